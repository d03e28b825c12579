//! Unit tests for ALU operations.

use mips_pipeline::core::units::alu::Alu;
use mips_pipeline::isa::{Instruction, Opcode};
use rstest::rstest;

fn op(op: Opcode) -> Instruction {
    Instruction {
        op,
        ..Default::default()
    }
}

fn shift(op: Opcode, shamt: u32) -> Instruction {
    Instruction::shift(op, 8, 9, shamt)
}

/// Tests 32-bit addition, including wrap-around on overflow.
#[test]
fn test_alu_add() {
    assert_eq!(Alu::execute(&op(Opcode::Add), 10, 20), 30);
    assert_eq!(Alu::execute(&op(Opcode::Add), -7, 3), -4);
    assert_eq!(Alu::execute(&op(Opcode::Add), i32::MAX, 1), i32::MIN);
}

/// Tests subtraction, including wrap-around on underflow.
#[test]
fn test_alu_sub() {
    assert_eq!(Alu::execute(&op(Opcode::Sub), 30, 10), 20);
    assert_eq!(Alu::execute(&op(Opcode::Sub), 0, 1), -1);
    assert_eq!(Alu::execute(&op(Opcode::Sub), i32::MIN, 1), i32::MAX);
}

/// Tests that multiplication keeps the low 32 bits.
#[test]
fn test_alu_mul() {
    assert_eq!(Alu::execute(&op(Opcode::Mul), 6, 7), 42);
    assert_eq!(Alu::execute(&op(Opcode::Mul), -3, 5), -15);
    assert_eq!(Alu::execute(&op(Opcode::Mul), 0x1_0000, 0x1_0000), 0);
}

/// Tests bitwise AND and OR.
#[test]
fn test_alu_logic() {
    assert_eq!(Alu::execute(&op(Opcode::And), 0b1100, 0b1010), 0b1000);
    assert_eq!(Alu::execute(&op(Opcode::Or), 0b1100, 0b1010), 0b1110);
    assert_eq!(Alu::execute(&op(Opcode::And), -1, 0x1234), 0x1234);
}

/// Tests that shifts operate on operand B by `shamt`.
#[test]
fn test_alu_shifts() {
    assert_eq!(Alu::execute(&shift(Opcode::Sll, 3), 0, 1), 8);
    assert_eq!(Alu::execute(&shift(Opcode::Sll, 31), 0, 1), i32::MIN);
    assert_eq!(Alu::execute(&shift(Opcode::Srl, 4), 0, 0x100), 0x10);
}

/// Tests that SRL is a logical shift, not arithmetic.
#[test]
fn test_alu_srl_is_logical() {
    assert_eq!(Alu::execute(&shift(Opcode::Srl, 1), 0, -1), 0x7FFF_FFFF);
    assert_eq!(Alu::execute(&shift(Opcode::Srl, 31), 0, i32::MIN), 1);
}

/// Tests that shift amounts are masked to five bits.
#[test]
fn test_alu_shift_amount_masked() {
    assert_eq!(Alu::execute(&shift(Opcode::Sll, 33), 0, 1), 2);
    assert_eq!(Alu::execute(&shift(Opcode::Srl, 32), 0, 0x40), 0x40);
}

/// Tests address generation for loads and stores.
#[test]
fn test_alu_address_generation() {
    assert_eq!(Alu::execute(&op(Opcode::Lw), 100, -4), 96);
    assert_eq!(Alu::execute(&op(Opcode::Sw), 0, 8), 8);
}

/// Tests the BEQ comparison difference.
#[test]
fn test_alu_beq_difference() {
    assert_eq!(Alu::execute(&op(Opcode::Beq), 5, 5), 0);
    assert_ne!(Alu::execute(&op(Opcode::Beq), 5, 6), 0);
}

/// Tests that operations without an ALU result yield 0.
#[rstest]
#[case(Opcode::J)]
#[case(Opcode::Nop)]
#[case(Opcode::Unknown)]
fn test_alu_no_result(#[case] opcode: Opcode) {
    assert_eq!(Alu::execute(&op(opcode), 123, 456), 0);
}
