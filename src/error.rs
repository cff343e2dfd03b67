// File: src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a single word-count invocation can fail. All of them are
/// terminal for the invocation.
#[derive(Error, Debug)]
pub enum WordCountError {
    /// The input file could not be opened.
    #[error("cannot open '{}': {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input stream failed part way through a scan.
    #[error("failed while reading input: {0}")]
    StreamRead(#[source] io::Error),
    #[error("failed to write results: {0}")]
    Output(#[source] io::Error),
}
