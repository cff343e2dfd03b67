// --- File: src/core/table.rs
use crate::core::types::FrequencyEntry;
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Default order: least frequent first, ties broken by plain byte order of
/// the word.
pub fn by_frequency(a: &FrequencyEntry, b: &FrequencyEntry) -> Ordering {
    a.count.cmp(&b.count).then_with(|| a.word.cmp(&b.word))
}

/// Most frequent first, ties still alphabetical.
pub fn by_frequency_desc(a: &FrequencyEntry, b: &FrequencyEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

// --- FrequencyTable: the open phase, filled while scanning ---

/// Word-to-count table that remembers first-occurrence order.
/// `entries` holds the order, `index` maps a word to its slot in `entries`.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `word`, matching case-insensitively.
    /// Empty input is ignored.
    /// O(k) where k is the word length.
    pub fn add_word(&mut self, word: &str) {
        if word.is_empty() {
            warn!("ignoring empty word");
            return;
        }
        let key = word.to_ascii_lowercase();
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].count += 1;
        } else {
            self.entries.push(FrequencyEntry::new(&key));
            self.index.insert(key, self.entries.len() - 1);
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.index
            .get(&word.to_ascii_lowercase())
            .map(|&slot| self.entries[slot].count)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of words seen.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    /// Closes the table and orders it with [`by_frequency`].
    pub fn sort(self) -> SortedTable {
        self.sort_by(by_frequency)
    }

    /// Closes the table and orders it with `compare`. The sort is stable.
    pub fn sort_by<F>(self, compare: F) -> SortedTable
    where
        F: FnMut(&FrequencyEntry, &FrequencyEntry) -> Ordering,
    {
        debug!("sorting {} entries", self.entries.len());
        SortedTable { entries: self.entries }.sort_by(compare)
    }
}

// --- SortedTable: the closed phase, only read or re-ordered ---

/// A frequency table after sorting. No words can be added any more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedTable {
    entries: Vec<FrequencyEntry>,
}

impl SortedTable {
    pub fn sort_by<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&FrequencyEntry, &FrequencyEntry) -> Ordering,
    {
        self.entries.sort_by(compare);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn into_entries(self) -> Vec<FrequencyEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a SortedTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
