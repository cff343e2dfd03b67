use crate::core::scanner::{count_words, scan_into};
use crate::core::table::{FrequencyTable, SortedTable};
use crate::core::types::Mode;
use crate::error::WordCountError;
use crate::input::Input;
use crate::render::{write_count, write_frequencies};
use log::info;
use std::io::Write;

/// Everything one invocation needs to know.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub mode: Mode,
    pub input: Input,
}

/// What a successful run produced, after it has been rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Count(u64),
    Frequencies(SortedTable),
}

// Runs the whole pipeline: open, scan, sort (frequency mode), render.
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Nothing is written to `out` unless the scan finished cleanly.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Outcome, WordCountError> {
        let reader = self.config.input.open()?;
        info!("running in {:?} mode", self.config.mode);

        match self.config.mode {
            Mode::Count => {
                let total = count_words(reader)?;
                write_count(out, total).map_err(WordCountError::Output)?;
                Ok(Outcome::Count(total))
            }
            Mode::Frequency => {
                let table = scan_into(reader, FrequencyTable::new())?.sort();
                write_frequencies(out, &table).map_err(WordCountError::Output)?;
                Ok(Outcome::Frequencies(table))
            }
        }
    }
}
