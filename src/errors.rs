//! Errors raised while building, merging, or querying tries.

use std::io;


/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, TrieError>;


/// Errors returned by the fallible operations of this crate.
///
/// An unseen attribute path is **not** an error.
/// Classification falls back to the default label instead.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// A record, a partial record, or another trie
    /// does not follow the schema of the operation.
    #[error("schema mismatch: expected {expected}, found {found}")]
    SchemaMismatch {
        /// What the schema requires.
        expected: String,
        /// What was given.
        found: String,
    },

    /// A column named in the schema does not exist in the data frame.
    #[error("column `{0}` does not exist")]
    MissingColumn(String),

    /// The progressive driver was built without a schema.
    #[error("schema is not set. Use `ProgressiveBuilder::schema`")]
    MissingSchema,

    /// The progressive driver was built without test records.
    #[error("test sample is not set. Use `ProgressiveBuilder::test_sample`")]
    MissingTestSample,

    /// Failed to read or convert a data frame.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Failed to read or write a file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to (de)serialize a trie or a report.
    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),
}


impl TrieError {
    /// Shorthand for a length mismatch.
    pub(crate) fn length(what: &str, expected: usize, found: usize) -> Self {
        TrieError::SchemaMismatch {
            expected: format!("{what} of length {expected}"),
            found: format!("{what} of length {found}"),
        }
    }
}
