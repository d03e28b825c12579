//! Pipeline latch structures for inter-stage communication.
//!
//! Pipeline latches store instruction state as it flows through the five
//! pipeline stages. Each latch holds at most one entry; an empty latch is a
//! bubble and carries no payload at all, so stale fields can never be read.

use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::Instruction;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter (instruction index) of the instruction.
    pub pc: usize,
    /// The fetched instruction.
    pub inst: Instruction,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Contains register values read from the register file, the sign-extended
/// immediate, the resolved destination register, and the control signals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: usize,
    /// The decoded instruction.
    pub inst: Instruction,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// Value read from `rs`.
    pub rs_val: i32,
    /// Value read from `rt`.
    pub rt_val: i32,
    /// Low 16 bits of the immediate, sign-extended.
    pub sign_ext_imm: i32,
    /// Destination register index (0 when nothing is written).
    pub dest_reg: usize,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: usize,
    /// The executing instruction.
    pub inst: Instruction,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// ALU result, or the effective address for loads and stores.
    pub alu_result: i32,
    /// Unmodified `rt` value, stored by `SW`.
    pub rt_val: i32,
    /// Destination register index.
    pub dest_reg: usize,
    /// Whether this instruction redirected the program counter.
    pub branch_taken: bool,
    /// Redirect target when `branch_taken` is set.
    pub branch_target: usize,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: usize,
    /// The instruction being retired.
    pub inst: Instruction,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
    /// ALU result (for non-load instructions).
    pub alu_result: i32,
    /// Data loaded from memory (for loads).
    pub mem_read_data: i32,
    /// Destination register index.
    pub dest_reg: usize,
}

/// A single-slot pipeline latch.
///
/// `entry` is `None` when the slot holds a bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latch<T> {
    /// The in-flight instruction, if any.
    pub entry: Option<T>,
}

impl<T> Default for Latch<T> {
    /// Creates an empty latch.
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<T> Latch<T> {
    /// Creates an empty latch (a bubble).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a latch holding `entry`.
    pub fn with(entry: T) -> Self {
        Self { entry: Some(entry) }
    }

    /// Returns `true` if the latch holds an instruction.
    pub fn is_valid(&self) -> bool {
        self.entry.is_some()
    }

    /// Borrows the held entry, if any.
    pub fn entry(&self) -> Option<&T> {
        self.entry.as_ref()
    }
}

impl<T> PipelineLatch for Latch<T> {
    fn flush(&mut self) {
        self.entry = None;
    }

    fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

/// IF/ID pipeline latch (Fetch to Decode stage).
pub type IfId = Latch<IfIdEntry>;

/// ID/EX pipeline latch (Decode to Execute stage).
pub type IdEx = Latch<IdExEntry>;

/// EX/MEM pipeline latch (Execute to Memory stage).
pub type ExMem = Latch<ExMemEntry>;

/// MEM/WB pipeline latch (Memory to Writeback stage).
pub type MemWb = Latch<MemWbEntry>;
