//! The five-stage pipeline.
//!
//! Stages are plain functions from one cycle's latch to the next; the
//! latches and the control signals they carry are defined alongside. There
//! is no hazard unit: dependent instructions simply read whatever the
//! register file holds when they reach Decode.

/// Single-slot latches between adjacent stages.
pub mod latches;

/// Per-instruction datapath control flags.
pub mod signals;

/// Fetch, Decode, Execute, Memory and Writeback.
pub mod stages;

/// Latch and per-cycle observer interfaces.
pub mod traits;
