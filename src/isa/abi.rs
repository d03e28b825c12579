//! Register ABI names.
//!
//! Maps between register indices and their conventional MIPS names
//! (`$zero`, `$t0`, ...), and parses register operands in either form.

/// Hardwired zero register.
pub const REG_ZERO: usize = 0;
/// Assembler temporary.
pub const REG_AT: usize = 1;
/// First temporary register.
pub const REG_T0: usize = 8;
/// Second temporary register.
pub const REG_T1: usize = 9;
/// Third temporary register.
pub const REG_T2: usize = 10;
/// Fourth temporary register.
pub const REG_T3: usize = 11;
/// First saved register.
pub const REG_S0: usize = 16;
/// Stack pointer.
pub const REG_SP: usize = 29;
/// Return address.
pub const REG_RA: usize = 31;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

const REG_NAMES: [&str; NUM_REGS] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the ABI name of a register, or `$??` for an invalid index.
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}

/// Parses a register operand.
///
/// Accepts an optional `$` prefix followed by either a number in `0..=31`
/// or an ABI name (case-insensitive). Returns `None` for anything else.
pub fn parse_register(operand: &str) -> Option<usize> {
    let name = operand.trim();
    let name = name.strip_prefix('$').unwrap_or(name);

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return name.parse::<usize>().ok().filter(|&n| n < NUM_REGS);
    }

    let lower = name.to_ascii_lowercase();
    REG_NAMES
        .iter()
        .position(|candidate| candidate[1..] == lower)
}
