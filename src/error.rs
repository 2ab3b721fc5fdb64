//! Error types for corpus loading and validation.
//!
//! Apart from [`CorpusError::Io`], every variant is a malformed-input
//! condition: the run cannot produce a trustworthy index or report and must
//! abort. Absent optional fields (verse, reference, empty expansion groups)
//! never reach this type, they are modeled as empty values in
//! [`crate::types`].

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a valid [`Catechism`](crate::types::Catechism).
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Corpus file could not be read.
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not JSON, or a required field is missing or has the wrong type.
    #[error("malformed corpus document: {0}")]
    Json(#[from] serde_json::Error),

    /// The `questions` sequence is empty.
    #[error("malformed corpus: no questions")]
    EmptyCorpus,

    /// `total_questions` disagrees with the number of questions present.
    #[error("malformed corpus: total_questions is {declared} but {actual} questions are present")]
    QuestionCountMismatch { declared: usize, actual: usize },

    /// A question's number is not its 1-based position in the corpus.
    #[error("malformed corpus: question at position {position} is numbered {number}")]
    QuestionNumbering { position: usize, number: u32 },
}

impl CorpusError {
    /// True for errors caused by the document itself rather than by I/O.
    pub fn is_malformed_input(&self) -> bool {
        !matches!(self, CorpusError::Io { .. })
    }
}
