// src/core/types.rs

/// What a run reports: a single total, or a per-word frequency listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Count,
    Frequency,
}

/// One row of a frequency table.
/// `word` is lowercase ASCII and never empty; `count` is at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u64,
}

impl FrequencyEntry {
    pub fn new(word: &str) -> Self {
        Self { word: word.to_string(), count: 1 }
    }
}

/// The three byte classes the scanner distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Space or newline. Tabs and carriage returns are not separators.
    Separator,
    Alphabetic,
    /// Digits, punctuation, other whitespace and any non-ASCII byte.
    Other,
}

pub fn classify(byte: u8) -> CharClass {
    match byte {
        b' ' | b'\n' => CharClass::Separator,
        b if b.is_ascii_alphabetic() => CharClass::Alphabetic,
        _ => CharClass::Other,
    }
}
