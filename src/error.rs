//! Error types for blockstate generation.

use thiserror::Error;

/// Result type alias using GeneratorError.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Main error type for blockstate generation.
///
/// Programming errors (re-registering a block under the opposite builder
/// kind, building an empty model group, non-cardinal rotation angles,
/// matchers referencing undeclared properties) are not represented here;
/// they panic at the call site instead.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Failed to serialize a document to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while handing a document to a sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A state combination in the block's state space has no model assigned.
    #[error("block {block}: no models assigned for state [{state}]")]
    UnassignedState { block: String, state: String },

    /// A state combination is covered by more than one variant entry.
    #[error("block {block}: state [{state}] is matched by {count} variant entries")]
    ConflictingState {
        block: String,
        state: String,
        count: usize,
    },

    /// A multipart definition was flushed without any parts.
    #[error("block {block}: multipart definition has no parts")]
    EmptyMultipart { block: String },

    /// One or more blocks failed during the flush pass.
    ///
    /// Individual failures are logged as they happen; the remaining blocks
    /// are still generated and written.
    #[error("{failed} of {total} blockstate documents failed to generate")]
    Flush { failed: usize, total: usize },
}
