use std::io;

use thiserror::Error;

/// Errors surfaced by the public hashing API.
///
/// The compression math itself cannot fail; everything here is either a
/// caller precondition or an I/O failure of a caller-supplied reader.
#[derive(Debug, Error)]
pub enum HashError {
    /// `start + len` runs past the end of the supplied buffer.
    #[error("feed range {start}..{start}+{len} exceeds buffer of {available} bytes")]
    RangeOutOfBounds {
        start: usize,
        len: usize,
        available: usize,
    },

    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("unknown hash algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Not a hex string of 20, 28, 32, 48 or 64 bytes.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}

pub type Result<T> = std::result::Result<T, HashError>;
