//! Decoded Instructions and Programs.
//!
//! An `Instruction` is produced once by the assembler and is read-only from
//! then on. Branch and jump targets are already resolved to absolute
//! instruction indices, so the pipeline never sees a symbolic label.

use std::collections::HashMap;
use std::fmt;

use super::abi;
use super::opcode::Opcode;

/// A fully decoded instruction.
///
/// Which register fields are meaningful depends on `op`: R-type operations
/// use `rd`, `rs`, `rt`; I-type operations use `rt` as destination (or store
/// source) and `rs` as base; shifts use `rd`, `rt` and `shamt`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Operation to perform.
    pub op: Opcode,
    /// First source register.
    pub rs: usize,
    /// Second source register, or destination for I-type operations.
    pub rt: usize,
    /// Destination register for R-type operations.
    pub rd: usize,
    /// Shift amount for `SLL`/`SRL`.
    pub shamt: u32,
    /// Immediate operand, 16-bit range stored widened.
    pub imm: i32,
    /// Resolved branch/jump target as an instruction index.
    pub target: usize,
    /// Source text, for diagnostics only.
    pub text: String,
}

impl Instruction {
    /// Builds a register-register instruction (`ADD`, `SUB`, `MUL`, `AND`, `OR`).
    pub fn r_type(op: Opcode, rd: usize, rs: usize, rt: usize) -> Self {
        Self {
            op,
            rd,
            rs,
            rt,
            text: format!(
                "{} {}, {}, {}",
                op.mnemonic().to_ascii_lowercase(),
                abi::reg_name(rd),
                abi::reg_name(rs),
                abi::reg_name(rt)
            ),
            ..Default::default()
        }
    }

    /// Builds `ADDI rt, rs, imm`.
    pub fn addi(rt: usize, rs: usize, imm: i32) -> Self {
        Self {
            op: Opcode::Addi,
            rt,
            rs,
            imm,
            text: format!("addi {}, {}, {}", abi::reg_name(rt), abi::reg_name(rs), imm),
            ..Default::default()
        }
    }

    /// Builds a shift (`SLL` or `SRL`) of `rt` by `shamt` into `rd`.
    pub fn shift(op: Opcode, rd: usize, rt: usize, shamt: u32) -> Self {
        Self {
            op,
            rd,
            rt,
            shamt,
            imm: shamt as i32,
            text: format!(
                "{} {}, {}, {}",
                op.mnemonic().to_ascii_lowercase(),
                abi::reg_name(rd),
                abi::reg_name(rt),
                shamt
            ),
            ..Default::default()
        }
    }

    /// Builds a memory access (`LW` or `SW`) of `rt` at `offset(base)`.
    pub fn mem(op: Opcode, rt: usize, offset: i32, base: usize) -> Self {
        Self {
            op,
            rt,
            rs: base,
            imm: offset,
            text: format!(
                "{} {}, {}({})",
                op.mnemonic().to_ascii_lowercase(),
                abi::reg_name(rt),
                offset,
                abi::reg_name(base)
            ),
            ..Default::default()
        }
    }

    /// Builds `BEQ rs, rt, target`.
    pub fn beq(rs: usize, rt: usize, target: usize) -> Self {
        Self {
            op: Opcode::Beq,
            rs,
            rt,
            target,
            text: format!(
                "beq {}, {}, {}",
                abi::reg_name(rs),
                abi::reg_name(rt),
                target
            ),
            ..Default::default()
        }
    }

    /// Builds `J target`.
    pub fn jump(target: usize) -> Self {
        Self {
            op: Opcode::J,
            target,
            text: format!("j {}", target),
            ..Default::default()
        }
    }

    /// Builds a `NOP`.
    pub fn nop() -> Self {
        Self {
            op: Opcode::Nop,
            text: "nop".to_string(),
            ..Default::default()
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.op)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// An assembled program.
///
/// Labels map to the index of the instruction that follows them. They are
/// only consulted while resolving targets during assembly.
#[derive(Clone, Debug, Default)]
pub struct Program {
    /// Instructions in program order.
    pub instructions: Vec<Instruction>,
    /// Label name to instruction index.
    pub labels: HashMap<String, usize>,
}

impl Program {
    /// Wraps an instruction list that needs no labels.
    pub fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            labels: HashMap::new(),
        }
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
