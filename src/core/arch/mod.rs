//! Architectural state components.
//!
//! Holds the programmer-visible register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
