//! CPU core implementation.
//!
//! The core is the pipeline advance engine: the register file, the control
//! unit, the execution units, the five pipeline stages with their latches,
//! and the `Cpu` that drives them one tick at a time.

/// Architectural register state.
pub mod arch;

/// Control signal derivation from opcodes.
pub mod control;

/// The pipeline engine and run loop.
pub mod cpu;

/// Pipeline latches, control signals, and stage implementations.
pub mod pipeline;

/// ALU and data memory.
pub mod units;

pub use cpu::{Cpu, RunOutcome, Snapshot};
