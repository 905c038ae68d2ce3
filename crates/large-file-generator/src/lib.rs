//! Fixture file generator
//!
//! Creates binary files of a given size consisting entirely of zero bytes,
//! for use as test fixtures (raw disk images, large upload payloads and the
//! like).  By default this produces `large_file.bin`, 10 MiB in size.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

pub mod error;
pub mod fixture;
pub mod verify;

pub use crate::{
    error::GeneratorError,
    fixture::{
        write_zeros, FixtureFile, GenerationReport, WriteStrategy, DEFAULT_CHUNK_SIZE,
        DEFAULT_FILE_NAME, DEFAULT_FILE_SIZE,
    },
    verify::verify_zero_file,
};
