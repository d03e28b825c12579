//! Execute (EX) Stage.
//!
//! This module implements the execution stage of the pipeline. It is responsible for:
//! - Selecting ALU operand B (immediate or `rt`).
//! - Performing the ALU operation.
//! - Resolving `BEQ` and `J`, reporting a redirect to the engine.

use tracing::trace;

use crate::core::pipeline::latches::{ExMem, ExMemEntry, IdEx};
use crate::core::units::alu::Alu;
use crate::isa::Opcode;

/// Executes the Execute stage.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch from the previous cycle.
///
/// # Returns
///
/// The EX/MEM latch for the next cycle, and the redirect target when a
/// branch or jump is taken. `BEQ` is taken when the two decoded register
/// values are equal; `J` is always taken. An empty input yields an empty
/// latch and no redirect.
pub fn execute_stage(id_ex: &IdEx) -> (ExMem, Option<usize>) {
    let Some(id) = id_ex.entry() else {
        return (ExMem::empty(), None);
    };

    let op_b = if id.ctrl.alu_src {
        id.sign_ext_imm
    } else {
        id.rt_val
    };
    let alu_result = Alu::execute(&id.inst, id.rs_val, op_b);

    let redirect = match id.inst.op {
        Opcode::Beq if id.rs_val == id.rt_val => Some(id.inst.target),
        Opcode::J => Some(id.inst.target),
        _ => None,
    };

    trace!(pc = id.pc, alu = alu_result, redirect = ?redirect, "EX");

    let result = ExMemEntry {
        pc: id.pc,
        inst: id.inst.clone(),
        ctrl: id.ctrl,
        alu_result,
        rt_val: id.rt_val,
        dest_reg: id.dest_reg,
        branch_taken: redirect.is_some(),
        branch_target: redirect.unwrap_or(0),
    };

    (ExMem::with(result), redirect)
}
