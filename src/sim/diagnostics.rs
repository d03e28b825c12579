//! Assembly diagnostics.
//!
//! Collects every error found while assembling a source file so they can be
//! reported together, on the terminal and in a `.err` file next to the input.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::common::AsmError;

/// Ordered collection of assembly errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<AsmError>,
}

impl Diagnostics {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error at `line`.
    pub fn push(&mut self, line: usize, message: impl Into<String>) {
        self.errors.push(AsmError::new(line, message));
    }

    /// Returns `true` if any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of recorded errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no error was recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Recorded errors in the order they were found.
    pub fn errors(&self) -> &[AsmError] {
        &self.errors
    }

    /// Discards all recorded errors.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Writes the terminal report.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n=== ASSEMBLY ERRORS ===")?;
        for err in &self.errors {
            writeln!(out, "{}", err)?;
        }
        writeln!(out, "Total errors: {}", self.errors.len())
    }

    /// Prints the terminal report to stderr.
    pub fn print(&self) {
        let stderr = io::stderr();
        let _ = self.write_report(&mut stderr.lock());
    }

    /// Writes the `.err` file format.
    pub fn write_error_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "MIPS Assembly Errors")?;
        writeln!(out, "====================")?;
        writeln!(out)?;
        for err in &self.errors {
            writeln!(out, "{}", err)?;
        }
        writeln!(out)?;
        writeln!(out, "Total errors: {}", self.errors.len())
    }

    /// Creates (or truncates) `path` and writes the `.err` report to it.
    pub fn write_error_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_error_report(&mut out)?;
        out.flush()
    }
}

/// Path of the error file for `input`: the same path with an `.err` extension.
pub fn error_file_path(input: impl AsRef<Path>) -> PathBuf {
    input.as_ref().with_extension("err")
}
