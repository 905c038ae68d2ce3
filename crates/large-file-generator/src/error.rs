//! Fixture generation errors
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use err_derive::Error;

////////////////////////////////////////////////////////////////////////////////
// Generator-related error types.
////////////////////////////////////////////////////////////////////////////////

/// A generic catch-all error type for generating and checking fixture files.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Opening, writing, flushing, syncing or reading the file failed.
    #[error(display = "GeneratorError: an IO error occurred: {:?}.", _0)]
    IOError(#[error(source)] std::io::Error),
    /// The single-buffer strategy cannot allocate a buffer of this many bytes.
    #[error(
        display = "GeneratorError: {} bytes do not fit in a single in-memory buffer.",
        _0
    )]
    SizeOverflow(u64),
    /// The chunked strategy was asked to write with an empty buffer.
    #[error(display = "GeneratorError: chunk size must be non-zero.")]
    InvalidChunkSize,
    #[error(
        display = "GeneratorError: expected a file of {} bytes, found {} bytes.",
        _0, _1
    )]
    SizeMismatch(u64, u64),
    #[error(display = "GeneratorError: non-zero byte found at offset {}.", _0)]
    NonZeroByte(u64),
}
