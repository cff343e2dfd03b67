// File: src/render.rs
use crate::core::table::SortedTable;
use std::io::{self, Write};

const USAGE: &str = "Flags:\n\
--count (-c): Count the total amount of words in the file, or STDIN if a file is not \
specified. This is default behavior if no flag is specified.\n\
--frequency (-f): Count the frequency of each word in the file, or STDIN if a file is \
not specified.\n\
--help (-h): Displays this help message.\n";

pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(USAGE.as_bytes())
}

pub fn write_count<W: Write>(out: &mut W, total: u64) -> io::Result<()> {
    writeln!(out, "The total number of words is: {}", total)
}

/// One `<count>\t<word>` line per entry, in the table's current order.
pub fn write_frequencies<W: Write>(out: &mut W, table: &SortedTable) -> io::Result<()> {
    writeln!(out, "The frequencies of each word are: ")?;
    for entry in table {
        writeln!(out, "{}\t{}", entry.count, entry.word)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::table::FrequencyTable;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn count_line() {
        assert_eq!(
            render(|out| write_count(out, 7)),
            "The total number of words is: 7\n"
        );
    }

    #[test]
    fn frequency_lines_are_tab_separated() {
        let mut table = FrequencyTable::new();
        for word in ["b", "b", "a", "c"] {
            table.add_word(word);
        }
        let sorted = table.sort();
        assert_eq!(
            render(|out| write_frequencies(out, &sorted)),
            "The frequencies of each word are: \n1\ta\n1\tc\n2\tb\n"
        );
    }

    #[test]
    fn empty_table_prints_only_header() {
        let sorted = FrequencyTable::new().sort();
        assert_eq!(
            render(|out| write_frequencies(out, &sorted)),
            "The frequencies of each word are: \n"
        );
    }

    #[test]
    fn usage_lists_every_flag() {
        let usage = render(|out| write_usage(out));
        for flag in ["--count (-c)", "--frequency (-f)", "--help (-h)"] {
            assert!(usage.contains(flag), "missing {}", flag);
        }
    }
}
