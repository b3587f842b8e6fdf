use thiserror::Error;

/// Errors produced when converting a loan record to or from its
/// persisted wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("failed to encode loan record: {0}")]
    Encode(String),

    #[error("failed to decode loan record: {0}")]
    Decode(String),
}
