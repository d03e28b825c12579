//! Error types.
//!
//! Runtime faults raised by the pipeline core, per-line assembly errors
//! reported by the assembler, and configuration/loading failures surfaced by
//! the command-line front end.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;
use crate::sim::diagnostics::Diagnostics;

/// Fatal fault raised while the pipeline is running.
///
/// Any `SimError` terminates the run immediately. The architectural state
/// reached so far remains inspectable on the `Cpu`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// A load or store addressed a word outside data memory.
    #[error("memory {access} out of bounds at address {addr} (word {index}, memory holds {size} words)")]
    OutOfBounds {
        /// Whether the faulting access was a load or a store.
        access: AccessType,
        /// Byte address computed by the ALU.
        addr: i32,
        /// Word index derived from `addr`.
        index: usize,
        /// Size of data memory in words.
        size: usize,
    },
}

/// A single assembly error tied to a source line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Line {line}: {message}")]
pub struct AsmError {
    /// 1-based source line number.
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

impl AsmError {
    /// Creates an error for `line`.
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Failure to load the TOML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("failed to parse config '{}': {source}", .path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Failure to turn an assembly source file into a `Program`.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("could not open file '{}': {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The source contained assembly errors.
    #[error("{} assembly error(s) in '{}'", .diagnostics.len(), .path.display())]
    Assembly {
        /// Path that was assembled.
        path: PathBuf,
        /// Every error found.
        diagnostics: Diagnostics,
    },

    /// The source assembled cleanly but contains no instructions.
    #[error("no instructions found in '{}'", .path.display())]
    Empty {
        /// Path that was assembled.
        path: PathBuf,
    },
}
