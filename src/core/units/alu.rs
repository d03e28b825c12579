//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. All
//! arithmetic wraps on overflow, and shift amounts are masked to 0-31, so
//! evaluation never fails.

use crate::isa::{Instruction, Opcode};

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Arithmetic Logic Unit for 32-bit integer operations.
pub struct Alu;

impl Alu {
    /// Executes the ALU operation selected by `inst.op`.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction being executed (selects the operation and
    ///   supplies the shift amount)
    /// * `a` - First operand (value of `rs`)
    /// * `b` - Second operand (value of `rt`, or the sign-extended immediate)
    ///
    /// # Returns
    ///
    /// The 32-bit result. Loads and stores yield the effective address,
    /// `BEQ` yields `a - b`, and operations without an ALU result yield 0.
    pub fn execute(inst: &Instruction, a: i32, b: i32) -> i32 {
        let sh = inst.shamt & SHAMT_MASK;
        match inst.op {
            Opcode::Add | Opcode::Addi => a.wrapping_add(b),
            Opcode::Sub => a.wrapping_sub(b),
            Opcode::Mul => a.wrapping_mul(b),
            Opcode::And => a & b,
            Opcode::Or => a | b,
            Opcode::Sll => b.wrapping_shl(sh),
            Opcode::Srl => (b as u32).wrapping_shr(sh) as i32,
            Opcode::Lw | Opcode::Sw => a.wrapping_add(b),
            Opcode::Beq => a.wrapping_sub(b),
            Opcode::J | Opcode::Nop | Opcode::Unknown => 0,
        }
    }
}
