//! Two-pass assembler.
//!
//! Turns assembly source text into a `Program` whose branch and jump targets
//! are already resolved to instruction indices.
//!
//! # Syntax
//!
//! * `#` starts a comment that runs to the end of the line.
//! * `name:` defines a label for the next instruction; it may share a line
//!   with that instruction.
//! * Mnemonics are case-insensitive; operands are separated by commas.
//! * Registers are written `$t0`, `t0`, `$8` or `8`.
//! * Integers are decimal (optionally signed) or `0x` hexadecimal.
//! * `BEQ` takes a label or a signed offset relative to the next
//!   instruction; `J` takes a label or an absolute instruction index.
//!
//! Errors do not stop assembly: every problem in the file is collected into
//! a `Diagnostics` report.

use std::collections::HashMap;

use crate::isa::abi::{self, NUM_REGS};
use crate::isa::{Instruction, Opcode, Program};
use crate::sim::diagnostics::Diagnostics;

/// Largest accepted shift amount.
const MAX_SHAMT: i32 = 31;

/// An instruction line left over after comment and label stripping.
struct SourceLine<'a> {
    line: usize,
    text: &'a str,
}

/// Assembles `source` into a program.
///
/// # Errors
///
/// Returns every assembly error found, with 1-based line numbers, if there
/// is at least one.
pub fn assemble(source: &str) -> Result<Program, Diagnostics> {
    let mut diagnostics = Diagnostics::new();
    let mut labels: HashMap<String, usize> = HashMap::new();
    let mut lines: Vec<SourceLine<'_>> = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let mut text = strip_comment(raw).trim();
        if text.is_empty() {
            continue;
        }

        if let Some((label, rest)) = text.split_once(':') {
            let label = label.trim();
            if !label.is_empty() {
                if labels.contains_key(label) {
                    diagnostics.push(line, format!("Duplicate label: {}", label));
                } else {
                    labels.insert(label.to_string(), lines.len());
                }
            }
            text = rest.trim();
            if text.is_empty() {
                continue;
            }
        }

        lines.push(SourceLine { line, text });
    }

    let mut instructions = Vec::with_capacity(lines.len());
    for (index, src) in lines.iter().enumerate() {
        if let Some(inst) = assemble_line(src, index, &labels, &mut diagnostics) {
            instructions.push(inst);
        }
    }

    if diagnostics.has_errors() {
        Err(diagnostics)
    } else {
        Ok(Program {
            instructions,
            labels,
        })
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Splits an operand list on commas that are not inside parentheses.
fn split_operands(operands: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (pos, c) in operands.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(operands[start..pos].trim());
                start = pos + 1;
            }
            _ => {}
        }
    }

    let last = operands[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}

fn operand_count(op: Opcode) -> usize {
    match op {
        Opcode::Add
        | Opcode::Sub
        | Opcode::Mul
        | Opcode::And
        | Opcode::Or
        | Opcode::Addi
        | Opcode::Sll
        | Opcode::Srl
        | Opcode::Beq => 3,
        Opcode::Lw | Opcode::Sw => 2,
        Opcode::J => 1,
        Opcode::Nop | Opcode::Unknown => 0,
    }
}

fn assemble_line(
    src: &SourceLine<'_>,
    index: usize,
    labels: &HashMap<String, usize>,
    diagnostics: &mut Diagnostics,
) -> Option<Instruction> {
    let (mnemonic, rest) = match src.text.split_once(char::is_whitespace) {
        Some((m, r)) => (m, r.trim()),
        None => (src.text, ""),
    };

    let op = Opcode::from_mnemonic(mnemonic);
    if op == Opcode::Unknown {
        diagnostics.push(src.line, format!("Unknown instruction: {}", mnemonic));
        return None;
    }

    let operands = split_operands(rest);
    let expected = operand_count(op);
    if operands.len() != expected {
        diagnostics.push(
            src.line,
            format!(
                "Expected {} operand(s) for {}, found {}",
                expected,
                op,
                operands.len()
            ),
        );
        return None;
    }

    let mut inst = Instruction {
        op,
        text: src.text.to_string(),
        ..Default::default()
    };
    let mut p = OperandParser {
        line: src.line,
        diagnostics,
    };

    match op {
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::And | Opcode::Or => {
            inst.rd = p.register(operands[0]);
            inst.rs = p.register(operands[1]);
            inst.rt = p.register(operands[2]);
        }
        Opcode::Addi => {
            inst.rt = p.register(operands[0]);
            inst.rs = p.register(operands[1]);
            inst.imm = p.integer(operands[2], "Invalid immediate value");
        }
        Opcode::Sll | Opcode::Srl => {
            inst.rd = p.register(operands[0]);
            inst.rt = p.register(operands[1]);
            inst.shamt = p.shift_amount(operands[2]);
            inst.imm = inst.shamt as i32;
        }
        Opcode::Lw | Opcode::Sw => {
            inst.rt = p.register(operands[0]);
            let (offset, base) = p.memory_operand(operands[1]);
            inst.imm = offset;
            inst.rs = base;
        }
        Opcode::Beq => {
            inst.rs = p.register(operands[0]);
            inst.rt = p.register(operands[1]);
            inst.target = p.branch_target(operands[2], index, labels);
        }
        Opcode::J => {
            inst.target = p.jump_target(operands[0], labels);
        }
        Opcode::Nop => {}
        Opcode::Unknown => return None,
    }

    Some(inst)
}

/// Parses individual operands, recording failures against one source line.
///
/// A failed operand yields 0 so that the rest of the line can still be
/// checked.
struct OperandParser<'d> {
    line: usize,
    diagnostics: &'d mut Diagnostics,
}

impl OperandParser<'_> {
    fn error(&mut self, message: String) {
        self.diagnostics.push(self.line, message);
    }

    fn register(&mut self, operand: &str) -> usize {
        if let Some(idx) = abi::parse_register(operand) {
            return idx;
        }

        let name = operand.trim().trim_start_matches('$');
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            self.error(format!(
                "Invalid register number: {} (expected 0-{})",
                operand,
                NUM_REGS - 1
            ));
        } else {
            self.error(format!("Unknown register: {}", operand));
        }
        0
    }

    fn integer(&mut self, operand: &str, what: &str) -> i32 {
        match parse_int(operand) {
            Some(v) => v,
            None => {
                self.error(format!("{}: {}", what, operand));
                0
            }
        }
    }

    fn shift_amount(&mut self, operand: &str) -> u32 {
        match parse_int(operand) {
            Some(v) if (0..=MAX_SHAMT).contains(&v) => v as u32,
            _ => {
                self.error(format!("Invalid shift amount: {}", operand));
                0
            }
        }
    }

    /// Parses `offset(base)`; an empty offset means 0.
    fn memory_operand(&mut self, operand: &str) -> (i32, usize) {
        let operand = operand.trim();
        let parsed = operand
            .strip_suffix(')')
            .and_then(|s| s.split_once('('));

        let Some((offset, base)) = parsed else {
            self.error(format!("Invalid memory operand format: {}", operand));
            return (0, 0);
        };

        let offset = offset.trim();
        let offset = if offset.is_empty() {
            0
        } else {
            self.integer(offset, "Invalid offset")
        };
        (offset, self.register(base))
    }

    fn branch_target(
        &mut self,
        operand: &str,
        index: usize,
        labels: &HashMap<String, usize>,
    ) -> usize {
        let operand = operand.trim();
        if let Some(&target) = labels.get(operand) {
            return target;
        }

        match parse_int(operand) {
            Some(offset) => {
                let target = index as i64 + 1 + i64::from(offset);
                match usize::try_from(target) {
                    Ok(t) => t,
                    Err(_) => {
                        self.error(format!("Branch target out of range: {}", operand));
                        0
                    }
                }
            }
            None => {
                self.error(format!("Undefined label: {}", operand));
                0
            }
        }
    }

    fn jump_target(&mut self, operand: &str, labels: &HashMap<String, usize>) -> usize {
        let operand = operand.trim();
        if let Some(&target) = labels.get(operand) {
            return target;
        }

        match parse_int(operand).map(usize::try_from) {
            Some(Ok(t)) => t,
            Some(Err(_)) => {
                self.error(format!("Jump target out of range: {}", operand));
                0
            }
            None => {
                self.error(format!("Undefined label: {}", operand));
                0
            }
        }
    }
}

/// Parses a decimal or `0x` hexadecimal integer with an optional sign.
pub fn parse_int(text: &str) -> Option<i32> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if !body.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let magnitude = match body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => body.parse::<i64>().ok()?,
    };

    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}
