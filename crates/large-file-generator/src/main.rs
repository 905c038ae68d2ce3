//! Fixture file generator
//!
//! # Example
//! ```
//! cargo run -- --output [PATH] --size [BYTES] --chunk-size [BYTES] [--single-buffer] [--verify];
//! ```
//!
//! With no arguments, writes `large_file.bin` (10485760 zero bytes) into the
//! current directory.
//!
//! # AUTHORS
//!
//! The Veracruz Development Team.
//!
//! # COPYRIGHT
//!
//! See the `LICENSE.md` file in the Veracruz root directory for licensing
//! and copyright information.

use anyhow::{anyhow, Result};
use clap::Parser;
use large_file_generator::{
    verify_zero_file, FixtureFile, WriteStrategy, DEFAULT_CHUNK_SIZE, DEFAULT_FILE_NAME,
    DEFAULT_FILE_SIZE,
};
use log::{error, info};
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// About the utility.
const ABOUT: &str = "A utility for generating zero-filled binary fixture \
files of a given size.";
/// The name of the application.
const APPLICATION_NAME: &str = "large-file-generator";
/// The authors list.
const AUTHORS: &str = "The Veracruz Development Team.";
/// The application's version information.
const VERSION: &str = "0.3.0";

////////////////////////////////////////////////////////////////////////////////
// Command line parsing.
////////////////////////////////////////////////////////////////////////////////

/// A structure collating all of the arguments passed to the executable.
#[derive(Debug, Parser)]
#[command(name = APPLICATION_NAME, author = AUTHORS, version = VERSION, about = ABOUT, long_about = None, rename_all = "kebab-case")]
struct Arguments {
    /// The filename of the generated fixture.
    #[arg(short = 'o', long, default_value = DEFAULT_FILE_NAME, value_name = "PATH")]
    output: PathBuf,
    /// The size of the generated fixture, in bytes.
    #[arg(short = 's', long, default_value_t = DEFAULT_FILE_SIZE, value_name = "BYTES")]
    size: u64,
    /// The number of zero bytes handed to each write call.
    #[arg(short = 'c', long, default_value_t = DEFAULT_CHUNK_SIZE, value_name = "BYTES", value_parser = chunk_size_parser)]
    chunk_size: usize,
    /// Write the whole file from one in-memory buffer rather than in chunks.
    #[arg(long)]
    single_buffer: bool,
    /// Re-read the fixture after writing and check every byte.
    #[arg(long)]
    verify: bool,
}

impl Arguments {
    fn write_strategy(&self) -> WriteStrategy {
        if self.single_buffer {
            WriteStrategy::SingleBuffer
        } else {
            WriteStrategy::Chunked(self.chunk_size)
        }
    }
}

fn chunk_size_parser(input: &str) -> Result<usize> {
    match input.parse::<usize>() {
        Ok(0) => Err(anyhow!("Chunk size must be non-zero")),
        Ok(size) => Ok(size),
        Err(e) => Err(anyhow!("Error in parsing chunk size: {}", e)),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Entry point.
////////////////////////////////////////////////////////////////////////////////

/// Entry point: reads the command line, writes the fixture, optionally checks
/// it, and only then prints the confirmation line.
fn main() -> Result<()> {
    env_logger::init();

    let arguments = Arguments::parse();
    let fixture = FixtureFile::new(arguments.output.clone(), arguments.size);

    info!("Generating fixture file, {:?}.", fixture.path());

    let report = fixture
        .generate(arguments.write_strategy())
        .map_err(|e| {
            error!("Generation failed: {}", e);
            anyhow!("Could not generate file {:?}: {}", fixture.path(), e)
        })?;

    if arguments.verify {
        verify_zero_file(fixture.path(), fixture.size()).map_err(|e| {
            error!("Verification failed: {}", e);
            anyhow!("Could not verify file {:?}: {}", fixture.path(), e)
        })?;
    }

    println!("{}", report);

    Ok(())
}
