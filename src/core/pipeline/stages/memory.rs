//! Memory Access (MEM) Stage.
//!
//! Performs the data-memory access for loads and stores. Every instruction,
//! memory-touching or not, is forwarded to the MEM/WB latch with its ALU
//! result and destination register.

use tracing::trace;

use crate::common::SimError;
use crate::core::pipeline::latches::{ExMem, MemWb, MemWbEntry};
use crate::core::units::lsu::DataMemory;

/// Executes the Memory stage.
///
/// # Arguments
///
/// * `ex_mem` - The EX/MEM latch from the previous cycle.
/// * `memory` - Data memory.
///
/// # Returns
///
/// The MEM/WB latch for the next cycle.
///
/// # Errors
///
/// `SimError::OutOfBounds` when a load or store addresses a word outside
/// data memory. A faulting store leaves memory unchanged.
pub fn mem_stage(ex_mem: &ExMem, memory: &mut DataMemory) -> Result<MemWb, SimError> {
    let Some(ex) = ex_mem.entry() else {
        return Ok(MemWb::empty());
    };

    let mut mem_read_data = 0;
    if ex.ctrl.mem_read {
        mem_read_data = memory.load(ex.alu_result)?;
        trace!(pc = ex.pc, addr = ex.alu_result, data = mem_read_data, "MEM load");
    } else if ex.ctrl.mem_write {
        memory.store(ex.alu_result, ex.rt_val)?;
        trace!(pc = ex.pc, addr = ex.alu_result, data = ex.rt_val, "MEM store");
    } else {
        trace!(pc = ex.pc, "MEM");
    }

    Ok(MemWb::with(MemWbEntry {
        pc: ex.pc,
        inst: ex.inst.clone(),
        ctrl: ex.ctrl,
        alu_result: ex.alu_result,
        mem_read_data,
        dest_reg: ex.dest_reg,
    }))
}
