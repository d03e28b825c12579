//! Pipeline control signals.
//!
//! This module defines the control signals that the Decode stage attaches to
//! each instruction and that travel with it through the remaining stages.

use serde::Serialize;

/// Control signals for pipeline stage execution.
///
/// Generated from the opcode alone by the control unit; see
/// [`crate::core::control::derive_control`]. All signals default to `false`,
/// which is also the encoding of a bubble.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ControlSignals {
    /// Destination register is `rd` (R-type) rather than `rt` (I-type).
    pub reg_dst: bool,
    /// ALU operand B is the sign-extended immediate rather than `rt`.
    pub alu_src: bool,
    /// Writeback value comes from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump.
    pub jump: bool,
}
