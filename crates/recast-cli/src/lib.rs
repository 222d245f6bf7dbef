//! Driver for the line-oriented argument swapper.
//!
//! The `recast` binary reads a Python source file, applies
//! [`swap_two_args_in_function_call`] to each line independently, joins the
//! results with newlines, and writes them to stdout. The interface is designed
//! to be exercised both from the binary entrypoint and from tests where the
//! output stream can be substituted.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use recast_syntax::{RecastError, swap_two_args_in_function_call};
use thiserror::Error;

/// Command-line arguments for the `recast` binary.
#[derive(Debug, Parser)]
#[command(name = "recast", about = "Swap the first two call arguments on each line of a file")]
pub struct Cli {
    /// Python source file processed line by line.
    pub file: PathBuf,
}

/// Errors raised by the driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line of the input failed to transform.
    #[error("line {line}: {source}")]
    Transform {
        /// Line number (one-based) of the failing line.
        line: usize,
        /// Underlying transformation error.
        #[source]
        source: RecastError,
    },
    /// Writing the transformed output failed.
    #[error("failed to write output: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Reads the named file and swaps call arguments on each of its lines.
///
/// Lines are transformed independently; a line without a call expression
/// (including a blank line) passes through unchanged.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any line fails to
/// transform, carrying that line's one-based number.
pub fn swap_two_args_in_file(path: &Path) -> Result<String, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let transformed = content
        .lines()
        .enumerate()
        .map(|(index, line)| {
            swap_two_args_in_function_call(line).map_err(|source| CliError::Transform {
                line: index.saturating_add(1),
                source,
            })
        })
        .collect::<Result<Vec<String>, CliError>>()?;

    Ok(transformed.join("\n"))
}

/// Runs the driver against the given arguments, writing to `stdout`.
///
/// # Errors
///
/// Returns an error if the input file cannot be read, a line fails to
/// transform, or the output cannot be written.
pub fn run(cli: &Cli, stdout: &mut impl Write) -> Result<(), CliError> {
    let output = swap_two_args_in_file(&cli.file)?;
    writeln!(stdout, "{output}").map_err(|source| CliError::Write { source })
}
