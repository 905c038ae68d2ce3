//! Zero-filled fixture files
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
use log::{debug, info};
use std::{
    convert::TryFrom,
    fmt,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// The filename of the fixture if no alternative is provided.
pub const DEFAULT_FILE_NAME: &str = "large_file.bin";
/// The size of the fixture in bytes (10 MiB) if no alternative is provided.
pub const DEFAULT_FILE_SIZE: u64 = 10 * 1024 * 1024;
/// The size of the reusable zero buffer used by the chunked strategy.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

////////////////////////////////////////////////////////////////////////////////
// Write strategies.
////////////////////////////////////////////////////////////////////////////////

/// How the zero bytes reach the file.  Both strategies produce identical
/// file contents.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteStrategy {
    /// One buffer holding every byte of the file, written in one go.
    SingleBuffer,
    /// A zero buffer of the given length, written repeatedly.
    Chunked(usize),
}

impl Default for WriteStrategy {
    fn default() -> Self {
        WriteStrategy::Chunked(DEFAULT_CHUNK_SIZE)
    }
}

impl WriteStrategy {
    /// Checks that this strategy can write `size` bytes, before anything is
    /// opened or allocated.
    pub fn validate(&self, size: u64) -> Result<(), GeneratorError> {
        match self {
            WriteStrategy::SingleBuffer => usize::try_from(size)
                .map(|_| ())
                .map_err(|_| GeneratorError::SizeOverflow(size)),
            WriteStrategy::Chunked(0) => Err(GeneratorError::InvalidChunkSize),
            WriteStrategy::Chunked(_) => Ok(()),
        }
    }
}

/// Writes exactly `size` zero bytes to `writer`, returning the number of bytes
/// written.  The writer is not flushed.
pub fn write_zeros<W: Write>(
    writer: &mut W,
    size: u64,
    strategy: WriteStrategy,
) -> Result<u64, GeneratorError> {
    strategy.validate(size)?;

    match strategy {
        WriteStrategy::SingleBuffer => {
            let buffer = vec![0u8; size as usize];
            writer.write_all(&buffer).map_err(GeneratorError::IOError)?;
        }
        WriteStrategy::Chunked(chunk_size) => {
            let buffer = vec![0u8; (chunk_size as u64).min(size) as usize];
            let mut remaining = size;
            let mut chunks = 0u64;

            while remaining > 0 {
                let length = (buffer.len() as u64).min(remaining) as usize;
                writer
                    .write_all(&buffer[..length])
                    .map_err(GeneratorError::IOError)?;
                remaining -= length as u64;
                chunks += 1;
            }

            debug!("Wrote {} chunk(s) of at most {} bytes.", chunks, buffer.len());
        }
    }

    Ok(size)
}

////////////////////////////////////////////////////////////////////////////////
// Fixture files.
////////////////////////////////////////////////////////////////////////////////

/// A file to be filled with `size` zero bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixtureFile {
    path: PathBuf,
    size: u64,
}

impl Default for FixtureFile {
    fn default() -> Self {
        FixtureFile::new(DEFAULT_FILE_NAME, DEFAULT_FILE_SIZE)
    }
}

impl FixtureFile {
    pub fn new<P>(path: P, size: u64) -> Self
    where
        P: Into<PathBuf>,
    {
        FixtureFile {
            path: path.into(),
            size,
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Creates the file, truncating any previous contents, and fills it with
    /// zero bytes.  The file is flushed and synced to disk before this
    /// returns, and is closed whether or not generation succeeds.
    pub fn generate(&self, strategy: WriteStrategy) -> Result<GenerationReport, GeneratorError> {
        strategy.validate(self.size)?;

        info!("Opening fixture file {:?} for writing.", self.path);

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(GeneratorError::IOError)?;

        info!("Writing {} zero bytes ({:?}).", self.size, strategy);

        let bytes_written = write_zeros(&mut file, self.size, strategy)?;

        file.flush().map_err(GeneratorError::IOError)?;
        file.sync_all().map_err(GeneratorError::IOError)?;

        info!("Fixture file {:?} written and synced.", self.path);

        Ok(GenerationReport {
            path: self.path.clone(),
            bytes_written,
        })
    }
}

/// The outcome of a successful generation.  Displays as the confirmation
/// line printed by the command line tool.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub bytes_written: u64,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} with size {} bytes",
            self.path.display(),
            self.bytes_written
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests.
////////////////////////////////////////////////////////////////////////////////
