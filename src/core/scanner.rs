// File: src/core/scanner.rs
use crate::core::table::FrequencyTable;
use crate::core::types::{classify, CharClass};
use crate::error::WordCountError;
use log::{debug, trace};
use std::io::{self, BufReader, Read};

/// Word-boundary state machine shared by both modes.
///
/// A run of bytes between two separators only counts as a word when it
/// holds nothing but letters. One `Other` byte disqualifies the whole run,
/// and only the next separator clears that. End of input is not a
/// separator, so an unterminated final run never counts.
#[derive(Debug, Clone)]
pub struct Scanner {
    skip: bool,
    after_separator: bool,
}

impl Scanner {
    pub fn new() -> Self {
        // Start of input behaves like the byte after a separator, so a
        // leading separator cannot close an empty word.
        Self { skip: false, after_separator: true }
    }

    /// Feeds one classified byte. Returns true when this byte is the
    /// separator that completes a word.
    pub fn step(&mut self, class: CharClass) -> bool {
        match class {
            CharClass::Separator => {
                let completes = !self.skip && !self.after_separator;
                self.skip = false;
                self.after_separator = true;
                completes
            }
            CharClass::Other => {
                self.skip = true;
                false
            }
            CharClass::Alphabetic => {
                self.after_separator = false;
                false
            }
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the lowercased words of a byte stream.
///
/// Yields at most one `Err`, after which it is exhausted. It cannot be
/// restarted since it consumes the reader.
pub struct Words<R> {
    bytes: io::Bytes<BufReader<R>>,
    scanner: Scanner,
    word: String,
    done: bool,
}

impl<R: Read> Words<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            scanner: Scanner::new(),
            word: String::new(),
            done: false,
        }
    }
}

impl<R: Read> Iterator for Words<R> {
    type Item = Result<String, WordCountError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for byte in self.bytes.by_ref() {
            let byte = match byte {
                Ok(byte) => byte,
                Err(e) => {
                    self.done = true;
                    return Some(Err(WordCountError::StreamRead(e)));
                }
            };
            let class = classify(byte);
            if self.scanner.step(class) {
                let word = std::mem::take(&mut self.word);
                trace!("word: {}", word);
                return Some(Ok(word));
            }
            match class {
                CharClass::Alphabetic => self.word.push(char::from(byte.to_ascii_lowercase())),
                CharClass::Separator | CharClass::Other => self.word.clear(),
            }
        }
        if !self.word.is_empty() {
            debug!("dropping unterminated word at end of input: {}", self.word);
        }
        self.done = true;
        None
    }
}

pub fn words<R: Read>(reader: R) -> Words<R> {
    Words::new(reader)
}

/// Count mode: total number of words, without building any of them.
pub fn count_words<R: Read>(reader: R) -> Result<u64, WordCountError> {
    let mut scanner = Scanner::new();
    let mut total = 0;
    for byte in BufReader::new(reader).bytes() {
        let byte = byte.map_err(WordCountError::StreamRead)?;
        if scanner.step(classify(byte)) {
            total += 1;
        }
    }
    debug!("counted {} words", total);
    Ok(total)
}

/// Frequency mode: feeds every word of `reader` into `table` and hands the
/// table back.
pub fn scan_into<R: Read>(
    reader: R,
    mut table: FrequencyTable,
) -> Result<FrequencyTable, WordCountError> {
    for word in words(reader) {
        table.add_word(&word?);
    }
    debug!("scanned {} distinct words, {} in total", table.len(), table.total());
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> Vec<String> {
        words(Cursor::new(input)).map(|w| w.unwrap()).collect()
    }

    fn count(input: &str) -> u64 {
        count_words(Cursor::new(input)).unwrap()
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "disk went away"));
            }
            self.served = true;
            let chunk = b"alpha beta ";
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn splits_on_space_and_newline() {
        assert_eq!(collect("one two\nthree\n"), vec!["one", "two", "three"]);
        assert_eq!(count("one two\nthree\n"), 3);
    }

    #[test]
    fn lowercases_words() {
        assert_eq!(collect("Hello hello HELLO "), vec!["hello", "hello", "hello"]);
    }

    #[test]
    fn only_separators_is_zero_words() {
        assert!(collect("   \n \n\n").is_empty());
        assert_eq!(count("   \n \n\n"), 0);
        assert_eq!(count(""), 0);
    }

    #[test]
    fn consecutive_separators_are_one_boundary() {
        assert_eq!(collect("a  \n\n b \n"), vec!["a", "b"]);
        assert_eq!(count("a  \n\n b \n"), 2);
    }

    #[test]
    fn embedded_other_byte_drops_whole_run() {
        assert_eq!(collect("ab3cd ef\n"), vec!["ef"]);
        assert_eq!(count("ab3cd ef\n"), 1);
        assert_eq!(collect("don't stop "), vec!["stop"]);
    }

    #[test]
    fn run_of_only_other_bytes_is_not_a_word() {
        assert!(collect("42 !? \n").is_empty());
        assert_eq!(count("42 !? \n"), 0);
    }

    #[test]
    fn unterminated_final_word_is_dropped() {
        assert_eq!(collect("one two three"), vec!["one", "two"]);
        assert_eq!(count("one two three"), 2);
    }

    #[test]
    fn tab_and_carriage_return_disqualify() {
        assert!(collect("a\tb \r\n").is_empty());
        assert_eq!(collect("win\r\nunix\n"), vec!["unix"]);
    }

    #[test]
    fn non_ascii_bytes_are_other() {
        assert_eq!(collect("caf\u{e9} tea "), vec!["tea"]);
    }

    #[test]
    fn read_error_is_yielded_once() {
        let mut iter = words(FailingReader { served: false });
        assert_eq!(iter.next().unwrap().unwrap(), "alpha");
        assert_eq!(iter.next().unwrap().unwrap(), "beta");
        assert!(matches!(iter.next(), Some(Err(WordCountError::StreamRead(_)))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn count_propagates_read_error() {
        let err = count_words(FailingReader { served: false }).unwrap_err();
        assert!(matches!(err, WordCountError::StreamRead(_)));
    }

    #[test]
    fn scan_into_returns_filled_table() {
        let table = scan_into(Cursor::new("b b a c "), FrequencyTable::new()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("b"), Some(2));
        assert_eq!(table.total(), count("b b a c "));
    }
}
