//! Instruction Decode (ID) Stage.
//!
//! This module implements the decode stage of the pipeline. It is responsible for:
//! - Generating control signals from the opcode.
//! - Reading `rs` and `rt` from the register file.
//! - Sign-extending the 16-bit immediate.
//! - Selecting the destination register.
//!
//! There is no hazard check. Registers are read after this cycle's
//! writeback has been applied, but a result still travelling through EX or
//! MEM is not visible yet.

use tracing::trace;

use crate::core::arch::Gpr;
use crate::core::control::derive_control;
use crate::core::pipeline::latches::{IdEx, IdExEntry, IfId};

/// Sign-extends the low 16 bits of `imm`.
pub fn sign_extend_16(imm: i32) -> i32 {
    imm as i16 as i32
}

/// Executes the Decode stage.
///
/// # Arguments
///
/// * `if_id` - The IF/ID latch from the previous cycle.
/// * `regs` - The register file.
///
/// # Returns
///
/// The ID/EX latch for the next cycle; empty when `if_id` is empty.
pub fn decode_stage(if_id: &IfId, regs: &Gpr) -> IdEx {
    let Some(entry) = if_id.entry() else {
        return IdEx::empty();
    };

    let inst = &entry.inst;
    let ctrl = derive_control(inst.op);

    let dest_reg = if ctrl.reg_dst {
        inst.rd
    } else if ctrl.reg_write {
        inst.rt
    } else {
        0
    };

    let decoded = IdExEntry {
        pc: entry.pc,
        inst: inst.clone(),
        ctrl,
        rs_val: regs.read(inst.rs),
        rt_val: regs.read(inst.rt),
        sign_ext_imm: sign_extend_16(inst.imm),
        dest_reg,
    };

    trace!(
        pc = decoded.pc,
        rs_val = decoded.rs_val,
        rt_val = decoded.rt_val,
        imm = decoded.sign_ext_imm,
        rd = decoded.dest_reg,
        "ID"
    );

    IdEx::with(decoded)
}
