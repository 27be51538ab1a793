//! The error type shared by every container in this crate.

use thiserror::Error;

/// Why an operation was refused. Every failing operation checks its inputs before touching the
/// container, so an `Err` always means nothing was modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A constructor parameter was out of range, e.g. a maximum size or vertex count below 1.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The operation needs at least one element but the container is empty.
    #[error("collection is empty")]
    EmptyCollection,
    /// A positional accessor was handed an index past the end of the container.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the container at the time of the request.
        len: usize,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidArgument("maximum size must be >= 1").to_string(),
            "invalid argument: maximum size must be >= 1"
        );
        assert_eq!(Error::EmptyCollection.to_string(), "collection is empty");
        assert_eq!(
            Error::IndexOutOfRange { index: 4, len: 2 }.to_string(),
            "index 4 out of range for length 2"
        );
    }
}
