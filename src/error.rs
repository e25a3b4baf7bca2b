//! Errors returned by the fallible operations of this crate.

use thiserror::Error;

/// Everything that can go wrong when calling into this crate. Misuse that
/// amounts to a broken contract (e.g. an out-of-bounds heap index) panics
/// instead, just like slice indexing does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation needs at least one element but the container is empty.
    #[error("the container must contain at least one item")]
    EmptyContainer,
    /// A numeric argument fell outside its valid domain `0..len`.
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange {
        /// The offending argument.
        index: usize,
        /// The exclusive upper bound the argument had to respect.
        len: usize,
    },
}

/// A `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
