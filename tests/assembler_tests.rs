//! Tests for the two-pass assembler and the source loader.

use std::io::Write;

use mips_pipeline::common::LoadError;
use mips_pipeline::core::{Cpu, RunOutcome};
use mips_pipeline::isa::abi::{REG_SP, REG_T0, REG_T1, REG_T2, REG_ZERO};
use mips_pipeline::isa::Opcode;
use mips_pipeline::sim::assembler::{assemble, parse_int};
use mips_pipeline::sim::loader::load_program;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn error_lines(source: &str) -> Vec<(usize, String)> {
    let diagnostics = assemble(source).expect_err("should fail");
    diagnostics
        .errors()
        .iter()
        .map(|e| (e.line, e.message.clone()))
        .collect()
}

/// Tests labels, comments, and target resolution.
#[test]
fn test_assemble_labels_and_comments() {
    let source = "\
# count down from five
start:  addi $t0, $zero, 5   # counter
        addi $t1, $zero, 0x10
loop:
        beq $t0, $zero, end
        j loop
end:    nop
";
    let program = assemble(source).expect("assembles");
    assert_eq!(program.len(), 5);
    assert_eq!(program.labels.get("start"), Some(&0));
    assert_eq!(program.labels.get("loop"), Some(&2));
    assert_eq!(program.labels.get("end"), Some(&4));

    let inst = &program.instructions;
    assert_eq!(inst[0].op, Opcode::Addi);
    assert_eq!(inst[0].text, "addi $t0, $zero, 5");
    assert_eq!(inst[1].imm, 16);
    assert_eq!(inst[2].op, Opcode::Beq);
    assert_eq!(inst[2].target, 4);
    assert_eq!(inst[3].op, Opcode::J);
    assert_eq!(inst[3].target, 2);
    assert_eq!(inst[4].op, Opcode::Nop);
}

/// Tests operand order for each instruction format.
#[test]
fn test_assemble_operand_fields() {
    let program = assemble(
        "add $t2, $t0, $t1\n\
         sll $t1, $t0, 4\n\
         lw $t1, -4($sp)\n\
         sw $t0, ($t1)\n\
         addi $t0, $t1, -1\n",
    )
    .expect("assembles");
    let inst = &program.instructions;

    assert_eq!((inst[0].rd, inst[0].rs, inst[0].rt), (REG_T2, REG_T0, REG_T1));
    assert_eq!((inst[1].rd, inst[1].rt, inst[1].shamt), (REG_T1, REG_T0, 4));
    assert_eq!(inst[1].imm, 4);
    assert_eq!((inst[2].rt, inst[2].rs, inst[2].imm), (REG_T1, REG_SP, -4));
    assert_eq!((inst[3].rt, inst[3].rs, inst[3].imm), (REG_T0, REG_T1, 0));
    assert_eq!((inst[4].rt, inst[4].rs, inst[4].imm), (REG_T0, REG_T1, -1));
}

/// Tests the accepted register spellings.
#[test]
fn test_assemble_register_forms() {
    let program = assemble("add $t0, t0, $8\nadd 8, $T0, $zero\n").expect("assembles");
    let inst = &program.instructions;
    assert_eq!((inst[0].rd, inst[0].rs, inst[0].rt), (REG_T0, REG_T0, REG_T0));
    assert_eq!((inst[1].rd, inst[1].rs, inst[1].rt), (REG_T0, REG_T0, REG_ZERO));
}

/// Tests that mnemonics are case-insensitive.
#[test]
fn test_assemble_mnemonic_case() {
    let program = assemble("ADD $t0, $t0, $t0\nAdd $t0, $t0, $t0\nNoP\n").expect("assembles");
    assert_eq!(program.instructions[0].op, Opcode::Add);
    assert_eq!(program.instructions[1].op, Opcode::Add);
    assert_eq!(program.instructions[2].op, Opcode::Nop);
}

/// Tests numeric BEQ offsets relative to the next instruction.
#[test]
fn test_assemble_numeric_branch_offsets() {
    let program = assemble("nop\nbeq $t0, $t1, 2\nbeq $zero, $zero, -3\n").expect("assembles");
    assert_eq!(program.instructions[1].target, 4);
    assert_eq!(program.instructions[2].target, 0);
}

/// Tests that a numeric J operand is an absolute index.
#[test]
fn test_assemble_numeric_jump() {
    let program = assemble("nop\nj 0\n").expect("assembles");
    assert_eq!(program.instructions[1].target, 0);
}

/// Tests that a label may be used before it is defined.
#[test]
fn test_assemble_forward_reference() {
    let program = assemble("j done\nnop\ndone: nop\n").expect("assembles");
    assert_eq!(program.instructions[0].target, 2);
}

/// Tests that a source with only comments assembles to nothing.
#[test]
fn test_assemble_empty() {
    let program = assemble("# nothing here\n\n   \n").expect("assembles");
    assert!(program.is_empty());
}

/// Tests that every error is collected with its line number.
#[test]
fn test_assemble_collects_errors() {
    let source = "\
addi $t0, $zero, 1
frob $t0
add $t0, $t1
loop: nop
loop: nop
j nowhere
add $t0, $t10, $32
";
    assert_eq!(
        error_lines(source),
        vec![
            (5, "Duplicate label: loop".to_string()),
            (2, "Unknown instruction: frob".to_string()),
            (3, "Expected 3 operand(s) for ADD, found 2".to_string()),
            (6, "Undefined label: nowhere".to_string()),
            (7, "Unknown register: $t10".to_string()),
            (7, "Invalid register number: $32 (expected 0-31)".to_string()),
        ]
    );
}

/// Tests operand value errors.
#[test]
fn test_assemble_bad_operands() {
    let errors = error_lines(
        "addi $t0, $zero, five\n\
         sll $t0, $t1, 32\n\
         lw $t0, 4[$t1]\n\
         beq $t0, $t1, -5\n\
         nop $t0\n",
    );
    let lines: Vec<usize> = errors.iter().map(|(line, _)| *line).collect();
    assert_eq!(lines, vec![1, 2, 3, 4, 5]);
    assert_eq!(errors[0].1, "Invalid immediate value: five");
    assert_eq!(errors[1].1, "Invalid shift amount: 32");
    assert_eq!(errors[2].1, "Invalid memory operand format: 4[$t1]");
    assert_eq!(errors[3].1, "Branch target out of range: -5");
}

/// Tests integer literal parsing.
#[test]
fn test_parse_int() {
    assert_eq!(parse_int("42"), Some(42));
    assert_eq!(parse_int("-12"), Some(-12));
    assert_eq!(parse_int("+7"), Some(7));
    assert_eq!(parse_int("0x1F"), Some(31));
    assert_eq!(parse_int("0XfF"), Some(255));
    assert_eq!(parse_int("-0x10"), Some(-16));
    assert_eq!(parse_int(" 3 "), Some(3));
    assert_eq!(parse_int("0x"), None);
    assert_eq!(parse_int("--5"), None);
    assert_eq!(parse_int("abc"), None);
    assert_eq!(parse_int("99999999999"), None);
}

/// Tests that an assembled program runs as expected.
#[test]
fn test_assembled_program_runs() {
    let program = assemble(
        "\
        addi $t0, $zero, 3
        addi $t1, $zero, 4
        nop
        nop
        mul  $t2, $t0, $t1
        nop
        nop
        nop
        sw   $t2, 4($zero)
",
    )
    .expect("assembles");
    let mut cpu = Cpu::new(&program, false);
    assert_eq!(cpu.run(), Ok(RunOutcome::Drained { cycles: 13 }));
    assert_eq!(cpu.regs.read(REG_T2), 12);
    assert_eq!(cpu.memory.words()[1], 12);
}

/// Tests loading a program from a file.
#[test]
fn test_load_program_from_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "addi $t0, $zero, 5\nnop").expect("write");

    let program = load_program(file.path()).expect("loads");
    assert_eq!(program.len(), 2);
}

/// Tests that a missing file is an I/O error.
#[test]
fn test_load_program_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = load_program(dir.path().join("missing.asm"));
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

/// Tests that assembly errors surface through the loader.
#[test]
fn test_load_program_assembly_errors() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "bogus\nadd $t0").expect("write");

    match load_program(file.path()) {
        Err(LoadError::Assembly { diagnostics, .. }) => assert_eq!(diagnostics.len(), 2),
        other => panic!("expected assembly errors, got {:?}", other.map(|p| p.len())),
    }
}

/// Tests that a file without instructions is rejected.
#[test]
fn test_load_program_empty() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "# only a comment\nlabel:").expect("write");
    assert!(matches!(load_program(file.path()), Err(LoadError::Empty { .. })));
}
