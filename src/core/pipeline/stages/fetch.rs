//! Instruction Fetch (IF) Stage.
//!
//! Reads the instruction at the current program counter into the IF/ID
//! latch. The stage never moves the program counter itself; the engine
//! advances it after a successful fetch and overrides it on a redirect.

use tracing::trace;

use crate::core::pipeline::latches::{IfId, IfIdEntry};
use crate::isa::Instruction;

/// Executes the Fetch stage.
///
/// # Arguments
///
/// * `pc` - Instruction index to fetch.
/// * `instructions` - The program being executed.
/// * `flush` - When set, the fetch is squashed and a bubble is produced.
///
/// # Returns
///
/// An empty latch if `flush` is set or `pc` is past the end of the program,
/// otherwise a latch holding the instruction at `pc`.
pub fn fetch_stage(pc: usize, instructions: &[Instruction], flush: bool) -> IfId {
    if flush {
        return IfId::empty();
    }

    match instructions.get(pc) {
        Some(inst) => {
            trace!(pc, inst = %inst, "IF");
            IfId::with(IfIdEntry {
                pc,
                inst: inst.clone(),
            })
        }
        None => IfId::empty(),
    }
}
