//! Instruction Set Architecture definitions.
//!
//! This module describes the small MIPS subset executed by the pipeline:
//! the opcode enumeration, the decoded instruction record, register ABI
//! names, and the 32-bit binary encoding used for program listings.

/// Register ABI names and lookup.
pub mod abi;

/// 32-bit MIPS binary encoding of decoded instructions.
pub mod encode;

/// Decoded instruction and program containers.
pub mod instruction;

/// Opcode enumeration and mnemonic lookup.
pub mod opcode;

pub use instruction::{Instruction, Program};
pub use opcode::Opcode;
