//! Binary Encoding.
//!
//! Produces the 32-bit MIPS machine word for a decoded instruction. The
//! encoding is only used for program listings; the pipeline itself works on
//! decoded `Instruction` records.

use super::instruction::Instruction;
use super::opcode::Opcode;

/// Primary opcode for R-type instructions.
pub const OP_SPECIAL: u32 = 0x00;
/// Primary opcode for `MUL` (SPECIAL2).
pub const OP_SPECIAL2: u32 = 0x1C;
/// Primary opcode for `J`.
pub const OP_J: u32 = 0x02;
/// Primary opcode for `BEQ`.
pub const OP_BEQ: u32 = 0x04;
/// Primary opcode for `ADDI`.
pub const OP_ADDI: u32 = 0x08;
/// Primary opcode for `LW`.
pub const OP_LW: u32 = 0x23;
/// Primary opcode for `SW`.
pub const OP_SW: u32 = 0x2B;

/// Function code for `SLL`.
pub const FUNCT_SLL: u32 = 0x00;
/// Function code for `SRL`.
pub const FUNCT_SRL: u32 = 0x02;
/// Function code for `MUL` under SPECIAL2.
pub const FUNCT_MUL: u32 = 0x02;
/// Function code for `ADD`.
pub const FUNCT_ADD: u32 = 0x20;
/// Function code for `SUB`.
pub const FUNCT_SUB: u32 = 0x22;
/// Function code for `AND`.
pub const FUNCT_AND: u32 = 0x24;
/// Function code for `OR`.
pub const FUNCT_OR: u32 = 0x25;

/// Word emitted for an instruction that failed to decode.
pub const UNKNOWN_WORD: u32 = 0xFFFF_FFFF;

const REG_MASK: u32 = 0x1F;
const IMM_MASK: u32 = 0xFFFF;
const TARGET_MASK: u32 = 0x03FF_FFFF;

fn r_type(op: u32, rs: usize, rt: usize, rd: usize, shamt: u32, funct: u32) -> u32 {
    (op << 26)
        | ((rs as u32 & REG_MASK) << 21)
        | ((rt as u32 & REG_MASK) << 16)
        | ((rd as u32 & REG_MASK) << 11)
        | ((shamt & REG_MASK) << 6)
        | funct
}

fn i_type(op: u32, rs: usize, rt: usize, imm: i32) -> u32 {
    (op << 26)
        | ((rs as u32 & REG_MASK) << 21)
        | ((rt as u32 & REG_MASK) << 16)
        | (imm as u32 & IMM_MASK)
}

/// Encodes `inst`, located at instruction index `index`, as a 32-bit word.
///
/// `BEQ` stores its target as a word offset relative to `index + 1`; `J`
/// stores the low 26 bits of the absolute target index.
pub fn encode(inst: &Instruction, index: usize) -> u32 {
    match inst.op {
        Opcode::Add => r_type(OP_SPECIAL, inst.rs, inst.rt, inst.rd, 0, FUNCT_ADD),
        Opcode::Sub => r_type(OP_SPECIAL, inst.rs, inst.rt, inst.rd, 0, FUNCT_SUB),
        Opcode::Mul => r_type(OP_SPECIAL2, inst.rs, inst.rt, inst.rd, 0, FUNCT_MUL),
        Opcode::And => r_type(OP_SPECIAL, inst.rs, inst.rt, inst.rd, 0, FUNCT_AND),
        Opcode::Or => r_type(OP_SPECIAL, inst.rs, inst.rt, inst.rd, 0, FUNCT_OR),
        Opcode::Sll => r_type(OP_SPECIAL, 0, inst.rt, inst.rd, inst.shamt, FUNCT_SLL),
        Opcode::Srl => r_type(OP_SPECIAL, 0, inst.rt, inst.rd, inst.shamt, FUNCT_SRL),
        Opcode::Addi => i_type(OP_ADDI, inst.rs, inst.rt, inst.imm),
        Opcode::Lw => i_type(OP_LW, inst.rs, inst.rt, inst.imm),
        Opcode::Sw => i_type(OP_SW, inst.rs, inst.rt, inst.imm),
        Opcode::Beq => {
            let offset = (inst.target as i64 - index as i64 - 1) as i32;
            i_type(OP_BEQ, inst.rs, inst.rt, offset)
        }
        Opcode::J => (OP_J << 26) | (inst.target as u32 & TARGET_MASK),
        Opcode::Nop => 0,
        Opcode::Unknown => UNKNOWN_WORD,
    }
}
