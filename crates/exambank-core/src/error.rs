//! Error types for building, aggregating and emitting a question bank.
//!
//! Every error here is a deterministic authoring error: none of them are
//! retried, and each one names the record or field that failed.

use std::path::PathBuf;

use thiserror::Error;

/// A bad field value within a single question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required string field is empty or whitespace-only.
    #[error("required field `{0}` is empty")]
    EmptyField(String),

    #[error("expected at least 2 options, found {0}")]
    TooFewOptions(usize),

    /// `answer_index` does not reference an actual option.
    #[error("answer_index {index} is out of range for {len} options")]
    AnswerIndexOutOfRange { index: i64, len: usize },

    #[error("unknown level `{0}` (expected I, II or III)")]
    UnknownLevel(String),

    #[error("unknown difficulty `{0}` (expected Easy, Medium or Hard)")]
    UnknownDifficulty(String),

    /// The topic is not in the configured vocabulary.
    #[error("topic `{0}` is not in the topic vocabulary")]
    UnknownTopic(String),

    /// The draft has no id and the allocator has no ids left.
    #[error("no question ids left to allocate after {0}")]
    IdsExhausted(u32),
}

/// A draft that failed validation while assembling a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bucket `{bucket}`, record #{index}{}: {reason}", display_id(.id))]
pub struct RecordError {
    pub bucket: String,
    /// Zero-based position of the draft within its bucket.
    pub index: usize,
    /// The draft's explicit id, if it carried one.
    pub id: Option<u32>,
    pub reason: ValidationError,
}

fn display_id(id: &Option<u32>) -> String {
    id.map(|id| format!(" (id {id})")).unwrap_or_default()
}

/// Two or more records in the aggregated collection share an id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate question id(s): {}", join_ids(.ids))]
pub struct DuplicateIdError {
    /// Every colliding id, sorted, each listed once.
    pub ids: Vec<u32>,
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Any failure of the generation pipeline.
#[derive(Debug, Error)]
pub enum BankError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    DuplicateId(#[from] DuplicateIdError),

    /// The destination could not be written (missing directory, permissions,
    /// disk full). Nothing was committed.
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize question bank")]
    Serialize(#[from] serde_json::Error),

    /// A bucket file or emitted document could not be decoded.
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl BankError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BankError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        BankError::Parse {
            path: path.into(),
            source: Box::new(source),
        }
    }
}
