//! Error types.

use std::io;

/// Failure of [`NewType::read_from`](crate::NewType::read_from).
#[derive(Debug, thiserror::Error)]
pub enum ReadError<E> {
    /// The reader itself failed.
    #[error("failed to read from stream: {0}")]
    Io(#[from] io::Error),

    /// Only whitespace remained.
    #[error("stream ended before a value could be read")]
    Exhausted,

    /// The token did not parse as the base type.
    #[error("failed to parse value: {0}")]
    Parse(E),
}
