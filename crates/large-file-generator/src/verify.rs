//! Checking generated fixture files
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use crate::error::GeneratorError;
use log::info;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Checks that the file at `path` is exactly `expected_size` bytes long and
/// contains nothing but zero bytes.  Fails on the first offending byte.
pub fn verify_zero_file<P>(path: P, expected_size: u64) -> Result<(), GeneratorError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    info!("Verifying fixture file {:?}.", path);

    let file = File::open(path).map_err(GeneratorError::IOError)?;
    let actual_size = file.metadata().map_err(GeneratorError::IOError)?.len();

    if actual_size != expected_size {
        return Err(GeneratorError::SizeMismatch(expected_size, actual_size));
    }

    let mut reader = BufReader::new(file);
    let mut offset = 0u64;

    loop {
        let buffer = reader.fill_buf().map_err(GeneratorError::IOError)?;
        if buffer.is_empty() {
            break;
        }
        if let Some(position) = buffer.iter().position(|b| *b != 0) {
            return Err(GeneratorError::NonZeroByte(offset + position as u64));
        }
        let length = buffer.len();
        offset += length as u64;
        reader.consume(length);
    }

    // The file may have grown after the metadata was read.
    if offset != expected_size {
        return Err(GeneratorError::SizeMismatch(expected_size, offset));
    }

    info!("Fixture file {:?} verified ({} zero bytes).", path, offset);

    Ok(())
}
