//! Writeback (WB) Stage.
//!
//! Writes the result of a retiring instruction into the register file.

use tracing::trace;

use crate::core::arch::Gpr;
use crate::core::pipeline::latches::MemWb;
use crate::isa::abi;

/// Executes the Writeback stage.
///
/// Does nothing when the latch is empty, when the instruction does not
/// write a register, or when the destination is `$zero`. Otherwise writes
/// the loaded data (`mem_to_reg`) or the ALU result.
pub fn wb_stage(mem_wb: &MemWb, regs: &mut Gpr) {
    let Some(wb) = mem_wb.entry() else {
        return;
    };

    if !wb.ctrl.reg_write || wb.dest_reg == abi::REG_ZERO {
        trace!(pc = wb.pc, "WB");
        return;
    }

    let val = if wb.ctrl.mem_to_reg {
        wb.mem_read_data
    } else {
        wb.alu_result
    };

    trace!(pc = wb.pc, reg = abi::reg_name(wb.dest_reg), val, "WB");
    regs.write(wb.dest_reg, val);
}
