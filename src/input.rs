// File: src/input.rs
use crate::error::WordCountError;
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where the text to scan comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    Stdin,
    Path(PathBuf),
}

impl Input {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(Input::Stdin, Input::Path)
    }

    /// Opens the source for reading. The handle closes when dropped, so
    /// callers release it on every path, errors included.
    pub fn open(&self) -> Result<Box<dyn Read>, WordCountError> {
        match self {
            Input::Stdin => {
                debug!("reading from standard input");
                Ok(Box::new(io::stdin().lock()))
            }
            Input::Path(path) => {
                debug!("opening {}", path.display());
                let file = File::open(path).map_err(|source| WordCountError::InputUnavailable {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
        }
    }
}
