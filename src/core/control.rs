//! Control Unit.
//!
//! Derives the datapath control signals for an instruction from its opcode.
//! The mapping is a pure function: it holds no state and has no failure
//! mode. `NOP` and `UNKNOWN` produce all-false signals, so an instruction
//! that failed to decode flows through the pipeline as a bubble.

use crate::core::pipeline::signals::ControlSignals;
use crate::isa::Opcode;

/// Returns the control signals for `op`.
pub fn derive_control(op: Opcode) -> ControlSignals {
    match op {
        Opcode::Add
        | Opcode::Sub
        | Opcode::Mul
        | Opcode::And
        | Opcode::Or
        | Opcode::Sll
        | Opcode::Srl => ControlSignals {
            reg_dst: true,
            reg_write: true,
            ..Default::default()
        },
        Opcode::Addi => ControlSignals {
            alu_src: true,
            reg_write: true,
            ..Default::default()
        },
        Opcode::Lw => ControlSignals {
            alu_src: true,
            mem_to_reg: true,
            mem_read: true,
            reg_write: true,
            ..Default::default()
        },
        Opcode::Sw => ControlSignals {
            alu_src: true,
            mem_write: true,
            ..Default::default()
        },
        Opcode::Beq => ControlSignals {
            branch: true,
            ..Default::default()
        },
        Opcode::J => ControlSignals {
            jump: true,
            ..Default::default()
        },
        Opcode::Nop | Opcode::Unknown => ControlSignals::default(),
    }
}
