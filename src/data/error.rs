use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// FileFormatError – everything that can go wrong turning a file into a Series
// ---------------------------------------------------------------------------

/// A measurement file that could not be turned into a series.
///
/// Line numbers are 1-based and count every line of the file, header
/// included, so they match what an editor shows.
#[derive(Debug, Error)]
pub enum FileFormatError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: no '{marker}' line found", path.display())]
    MissingSection { path: PathBuf, marker: &'static str },

    #[error("{}: no data rows after the header", path.display())]
    NoData { path: PathBuf },

    #[error("{}:{line}: expected two columns, found {found}", path.display())]
    MissingColumn {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    #[error("{}:{line}: '{field}' is not a number", path.display())]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        field: String,
    },

    #[error("{file_name}: no HH-MM-SS acquisition time in file name")]
    InvalidTimestamp { file_name: String },
}

pub type FormatResult<T> = Result<T, FileFormatError>;
