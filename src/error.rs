//! Error types.
//!
//! Only I/O is fallible here. Every in-memory operation is total over the
//! datasets the program builds for itself.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing a data file.
#[derive(Error, Debug)]
pub enum DataFileError {
    /// The file could not be opened, read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-blank line could not be turned into a value.
    #[error("line {line}: cannot parse {text:?}")]
    Parse { line: usize, text: String },
}

/// Errors from running a demonstrator.
#[derive(Error, Debug)]
pub enum DemoError {
    /// Writing to the transcript failed.
    #[error("transcript write failed: {0}")]
    Output(#[from] io::Error),

    /// Saving the sorted snapshot failed.
    #[error(transparent)]
    DataFile(#[from] DataFileError),
}
