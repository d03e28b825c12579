//! Opcode Definitions.
//!
//! The closed set of operations understood by the simulator. `Unknown` marks
//! a decode failure; if one ever reaches the pipeline it behaves like `Nop`.

use std::fmt;

/// Operation selector for a decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Opcode {
    /// `rd = rs + rt`
    Add,
    /// `rt = rs + imm`
    Addi,
    /// `rd = rs - rt`
    Sub,
    /// `rd = rs * rt` (low 32 bits)
    Mul,
    /// `rd = rs & rt`
    And,
    /// `rd = rs | rt`
    Or,
    /// `rd = rt << shamt`
    Sll,
    /// `rd = rt >> shamt` (logical)
    Srl,
    /// `rt = mem[rs + imm]`
    Lw,
    /// `mem[rs + imm] = rt`
    Sw,
    /// Branch to target when `rs == rt`.
    Beq,
    /// Unconditional jump to target.
    J,
    /// No operation.
    #[default]
    Nop,
    /// Unrecognised mnemonic.
    Unknown,
}

impl Opcode {
    /// Every opcode, in declaration order.
    pub const ALL: [Opcode; 14] = [
        Opcode::Add,
        Opcode::Addi,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::And,
        Opcode::Or,
        Opcode::Sll,
        Opcode::Srl,
        Opcode::Lw,
        Opcode::Sw,
        Opcode::Beq,
        Opcode::J,
        Opcode::Nop,
        Opcode::Unknown,
    ];

    /// Looks up a mnemonic, ignoring ASCII case.
    ///
    /// Returns `Opcode::Unknown` when the mnemonic is not part of the
    /// instruction set.
    pub fn from_mnemonic(mnemonic: &str) -> Self {
        match mnemonic.to_ascii_uppercase().as_str() {
            "ADD" => Opcode::Add,
            "ADDI" => Opcode::Addi,
            "SUB" => Opcode::Sub,
            "MUL" => Opcode::Mul,
            "AND" => Opcode::And,
            "OR" => Opcode::Or,
            "SLL" => Opcode::Sll,
            "SRL" => Opcode::Srl,
            "LW" => Opcode::Lw,
            "SW" => Opcode::Sw,
            "BEQ" => Opcode::Beq,
            "J" => Opcode::J,
            "NOP" => Opcode::Nop,
            _ => Opcode::Unknown,
        }
    }

    /// Upper-case assembly mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Addi => "ADDI",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Sll => "SLL",
            Opcode::Srl => "SRL",
            Opcode::Lw => "LW",
            Opcode::Sw => "SW",
            Opcode::Beq => "BEQ",
            Opcode::J => "J",
            Opcode::Nop => "NOP",
            Opcode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
