//! Simulation statistics collection and reporting.
//!
//! Tracks the cycle count, retired instruction mix, and control-flow
//! redirects of a run.

use serde::Serialize;

use crate::core::pipeline::signals::ControlSignals;
use crate::isa::Opcode;

/// Simulation statistics structure tracking all performance metrics.
///
/// Counters are updated by the engine as instructions leave the MEM/WB latch
/// and as taken branches flush the front of the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Ticks executed.
    pub cycles: u64,
    /// Instructions that reached writeback, bubbles excluded.
    pub instructions_retired: u64,

    /// Retired register-writing arithmetic/logic instructions.
    pub inst_alu: u64,
    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired conditional branches.
    pub inst_branch: u64,
    /// Retired unconditional jumps.
    pub inst_jump: u64,
    /// Retired `NOP` (and undecodable) instructions.
    pub inst_nop: u64,

    /// Branches and jumps that redirected the program counter.
    pub branches_taken: u64,
    /// Instructions discarded from IF/ID and ID/EX by redirects.
    pub flushed: u64,
}

impl SimStats {
    /// Records one retiring instruction.
    pub fn retire(&mut self, op: Opcode, ctrl: &ControlSignals) {
        self.instructions_retired += 1;
        if ctrl.mem_read {
            self.inst_load += 1;
        } else if ctrl.mem_write {
            self.inst_store += 1;
        } else if ctrl.branch {
            self.inst_branch += 1;
        } else if ctrl.jump {
            self.inst_jump += 1;
        } else if matches!(op, Opcode::Nop | Opcode::Unknown) {
            self.inst_nop += 1;
        } else {
            self.inst_alu += 1;
        }
    }

    /// Cycles per retired instruction, or 0 if nothing retired.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints a formatted summary of the statistics.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("inst_alu                 {}", self.inst_alu);
        println!("inst_load                {}", self.inst_load);
        println!("inst_store               {}", self.inst_store);
        println!("inst_branch              {}", self.inst_branch);
        println!("inst_jump                {}", self.inst_jump);
        println!("inst_nop                 {}", self.inst_nop);
        println!("----------------------------------------------------------");
        println!("branches_taken           {}", self.branches_taken);
        println!("flushed_slots            {}", self.flushed);
        println!("==========================================================");
    }
}
