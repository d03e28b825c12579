//! Pipeline Engine.
//!
//! The `Cpu` owns every piece of architectural state (program counter,
//! register file, data memory) together with the four inter-stage latches,
//! and advances all five stages once per `tick`.
//!
//! # Tick ordering
//!
//! Stages run in reverse pipeline order (WB, MEM, EX, ID, IF) against the
//! latch contents committed by the previous tick. Writeback mutates the
//! register file first, so Decode in the same tick sees that write; results
//! still in EX or MEM are not visible to Decode (there is no forwarding).
//! A taken branch or jump squashes the instructions that Decode and Fetch
//! produced in the same tick and redirects the program counter. The new
//! latches are then committed together.

use serde::Serialize;
use tracing::{debug, warn};

use crate::common::SimError;
use crate::config::Config;
use crate::core::arch::Gpr;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::stages;
use crate::core::pipeline::traits::{CycleObserver, PipelineLatch};
use crate::core::units::lsu::DataMemory;
use crate::isa::abi::NUM_REGS;
use crate::isa::{Instruction, Program};
use crate::stats::SimStats;

/// How a run ended when no fault occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    /// Every instruction was fetched and the pipeline emptied.
    Drained {
        /// Ticks executed.
        cycles: u64,
    },
    /// The cycle ceiling was reached before the pipeline drained.
    ///
    /// State up to this point is valid; the program simply did not finish.
    CycleLimit {
        /// Ticks executed.
        cycles: u64,
    },
}

/// Architectural state captured after a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Final program counter.
    pub pc: usize,
    /// Ticks executed.
    pub cycles: u64,
    /// Register file contents.
    pub registers: [i32; NUM_REGS],
    /// Data memory contents, by word index.
    pub memory: Vec<i32>,
}

/// The pipelined processor.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Index of the next instruction to fetch.
    pub pc: usize,
    /// General-purpose register file.
    pub regs: Gpr,
    /// Word-addressable data memory.
    pub memory: DataMemory,

    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,

    /// Surface per-cycle state to the run loop's observer.
    pub trace: bool,
    /// Run-loop ceiling.
    pub max_cycles: u64,
    /// Run statistics, including the cycle count.
    pub stats: SimStats,

    program: Vec<Instruction>,
}

impl Cpu {
    /// Creates an engine with default memory size and cycle ceiling.
    ///
    /// # Arguments
    ///
    /// * `program` - Assembled program with targets already resolved.
    /// * `trace` - Enable trace mode.
    pub fn new(program: &Program, trace: bool) -> Self {
        let config = Config::default();
        let mut cpu = Self::with_config(program, &config);
        cpu.trace = trace || cfg!(feature = "always-trace");
        cpu
    }

    /// Creates an engine sized and configured from `config`.
    pub fn with_config(program: &Program, config: &Config) -> Self {
        Self {
            pc: 0,
            regs: Gpr::new(),
            memory: DataMemory::new(config.memory.words),
            if_id: IfId::empty(),
            id_ex: IdEx::empty(),
            ex_mem: ExMem::empty(),
            mem_wb: MemWb::empty(),
            trace: config.general.trace || cfg!(feature = "always-trace"),
            max_cycles: config.pipeline.max_cycles,
            stats: SimStats::default(),
            program: program.instructions.clone(),
        }
    }

    /// The instruction list being executed.
    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    /// IF/ID latch as committed by the last tick.
    pub fn if_id(&self) -> &IfId {
        &self.if_id
    }

    /// ID/EX latch as committed by the last tick.
    pub fn id_ex(&self) -> &IdEx {
        &self.id_ex
    }

    /// EX/MEM latch as committed by the last tick.
    pub fn ex_mem(&self) -> &ExMem {
        &self.ex_mem
    }

    /// MEM/WB latch as committed by the last tick.
    pub fn mem_wb(&self) -> &MemWb {
        &self.mem_wb
    }

    /// Ticks executed so far.
    pub fn cycles(&self) -> u64 {
        self.stats.cycles
    }

    /// Returns `true` when all four latches are empty.
    pub fn pipeline_empty(&self) -> bool {
        self.if_id.is_empty()
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
    }

    /// Returns `true` when nothing is left to fetch and nothing is in flight.
    pub fn is_drained(&self) -> bool {
        self.pc >= self.program.len() && self.pipeline_empty()
    }

    /// Advances the pipeline by one clock cycle.
    ///
    /// # Errors
    ///
    /// `SimError::OutOfBounds` if the Memory stage faults. The tick is then
    /// abandoned: latches and program counter keep their previous values,
    /// although this tick's writeback has already been applied.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.stats.cycles += 1;

        if let Some(wb) = self.mem_wb.entry() {
            self.stats.retire(wb.inst.op, &wb.ctrl);
        }
        stages::wb_stage(&self.mem_wb, &mut self.regs);

        let next_mem_wb = stages::mem_stage(&self.ex_mem, &mut self.memory)?;
        let (next_ex_mem, redirect) = stages::execute_stage(&self.id_ex);
        let mut next_id_ex = stages::decode_stage(&self.if_id, &self.regs);
        let mut next_if_id = stages::fetch_stage(self.pc, &self.program, false);

        if next_if_id.is_valid() {
            self.pc += 1;
        }

        if let Some(target) = redirect {
            let squashed = u64::from(next_if_id.is_valid()) + u64::from(next_id_ex.is_valid());
            next_if_id.flush();
            next_id_ex.flush();
            self.stats.branches_taken += 1;
            self.stats.flushed += squashed;
            debug!(cycle = self.stats.cycles, target, squashed, "pipeline flush");
            self.pc = target;
        }

        self.mem_wb = next_mem_wb;
        self.ex_mem = next_ex_mem;
        self.id_ex = next_id_ex;
        self.if_id = next_if_id;

        self.regs.hardwire_zero();
        Ok(())
    }

    /// Runs until the pipeline drains or the cycle ceiling is reached.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        self.run_with(&mut ())
    }

    /// Runs like [`Cpu::run`], notifying `observer` after every tick when
    /// trace mode is on.
    ///
    /// # Errors
    ///
    /// Stops at the first `SimError`; the state reached so far remains
    /// available on `self`.
    pub fn run_with<O: CycleObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<RunOutcome, SimError> {
        while !self.is_drained() {
            if self.stats.cycles >= self.max_cycles {
                warn!(
                    cycles = self.stats.cycles,
                    "simulation stopped at the cycle ceiling"
                );
                return Ok(RunOutcome::CycleLimit {
                    cycles: self.stats.cycles,
                });
            }

            self.tick()?;

            if self.trace {
                observer.on_cycle(self);
            }
        }

        Ok(RunOutcome::Drained {
            cycles: self.stats.cycles,
        })
    }

    /// Captures registers, memory, program counter and cycle count.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.pc,
            cycles: self.stats.cycles,
            registers: self.regs.snapshot(),
            memory: self.memory.words().to_vec(),
        }
    }
}
