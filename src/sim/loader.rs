//! Source Loader.
//!
//! Reads an assembly file from disk and assembles it into a program ready to
//! hand to the engine.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::LoadError;
use crate::isa::Program;
use crate::sim::assembler;

/// Reads and assembles the source file at `path`.
///
/// # Errors
///
/// * `LoadError::Io` if the file cannot be read.
/// * `LoadError::Assembly` with every error found if assembly fails.
/// * `LoadError::Empty` if the file holds no instructions.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let program = assembler::assemble(&source).map_err(|diagnostics| LoadError::Assembly {
        path: path.to_path_buf(),
        diagnostics,
    })?;

    if program.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(
        path = %path.display(),
        instructions = program.len(),
        labels = program.labels.len(),
        "program loaded"
    );
    Ok(program)
}
