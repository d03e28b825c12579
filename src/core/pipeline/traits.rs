//! Pipeline Latch and Observer Interfaces.
//!
//! Defines the common behaviours of the latches that connect pipeline stages
//! and the hook through which per-cycle state is surfaced in trace mode.

use crate::core::Cpu;

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of at most one instruction between two stages.
/// They must support flushing (discarding a wrongly fetched instruction) and
/// checking for emptiness.
pub trait PipelineLatch {
    /// Discards the latch contents, leaving a bubble.
    ///
    /// Called when a taken branch or jump invalidates the instructions
    /// fetched behind it.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if no instruction is held, `false` otherwise.
    fn is_empty(&self) -> bool;
}

/// Receives the engine state after every committed tick in trace mode.
///
/// Observers only read the `Cpu`; nothing they do can change the simulated
/// results.
pub trait CycleObserver {
    /// Called once after each tick has been committed.
    fn on_cycle(&mut self, cpu: &Cpu);
}

impl CycleObserver for () {
    fn on_cycle(&mut self, _cpu: &Cpu) {}
}
