//! Common types shared across the simulator.
//!
//! This module provides the memory access classification and the error
//! types used by the pipeline core, the assembler, and the front end.

/// Memory access type definitions.
pub mod data;

/// Error types for runtime faults, assembly, configuration and loading.
pub mod error;

pub use data::AccessType;
pub use error::{AsmError, ConfigError, LoadError, SimError};
