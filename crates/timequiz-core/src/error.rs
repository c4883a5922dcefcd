//! Quiz loading error types.
//!
//! Every variant is fatal: the session never starts when any of these is
//! returned, so there is no partial state to roll back. Running out of time
//! is not an error and lives in [`crate::report::SessionOutcome`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a CSV file into quiz records.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The input file does not exist or could not be opened.
    #[error("Failed to open the CSV file: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV table could not be decoded.
    #[error("Failed to parse the provided CSV file")]
    Malformed {
        #[source]
        source: csv::Error,
    },

    /// A row carried fewer than the two required fields.
    #[error("Failed to parse the provided CSV file: row {row} has {fields} field(s), expected at least 2")]
    RowShape { row: usize, fields: usize },
}

impl From<csv::Error> for QuizError {
    fn from(source: csv::Error) -> Self {
        QuizError::Malformed { source }
    }
}
