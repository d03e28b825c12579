//! Simulation front end.
//!
//! Everything that sits between a source file on disk and the pipeline
//! engine: the assembler, its diagnostics, the file loader, and the text
//! renderers used for trace output and final state.

/// Two-pass assembler producing label-resolved programs.
pub mod assembler;

/// Collected assembly errors and the `.err` report.
pub mod diagnostics;

/// Source file loading.
pub mod loader;

/// Pipeline, listing, and state rendering.
pub mod trace;

pub use diagnostics::Diagnostics;
