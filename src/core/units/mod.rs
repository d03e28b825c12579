//! Execution units used by the pipeline stages.

/// Integer ALU.
pub mod alu;

/// Data memory behind the Memory stage.
pub mod lsu;
