use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for dynarray operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Illegal capacity: {capacity}")]
    InvalidArgument { capacity: i128 },

    /// `len` is the list length at the time of the call. Access requires
    /// `index < len`, insertion `index <= len`.
    #[error("Index out of range: index: {index}, len: {len}")]
    IndexOutOfRange { index: i128, len: usize },
}
