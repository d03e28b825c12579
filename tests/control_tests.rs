//! Tests for control signal derivation.

use mips_pipeline::core::control::derive_control;
use mips_pipeline::core::pipeline::signals::ControlSignals;
use mips_pipeline::isa::Opcode;
use rstest::rstest;

fn signals(flags: [bool; 8]) -> ControlSignals {
    let [reg_dst, alu_src, mem_to_reg, reg_write, mem_read, mem_write, branch, jump] = flags;
    ControlSignals {
        reg_dst,
        alu_src,
        mem_to_reg,
        reg_write,
        mem_read,
        mem_write,
        branch,
        jump,
    }
}

/// Tests the control table row for every opcode.
///
/// Column order: RegDst, ALUSrc, MemToReg, RegWrite, MemRead, MemWrite,
/// Branch, Jump.
#[rstest]
#[case(Opcode::Add, [true, false, false, true, false, false, false, false])]
#[case(Opcode::Sub, [true, false, false, true, false, false, false, false])]
#[case(Opcode::Mul, [true, false, false, true, false, false, false, false])]
#[case(Opcode::And, [true, false, false, true, false, false, false, false])]
#[case(Opcode::Or, [true, false, false, true, false, false, false, false])]
#[case(Opcode::Sll, [true, false, false, true, false, false, false, false])]
#[case(Opcode::Srl, [true, false, false, true, false, false, false, false])]
#[case(Opcode::Addi, [false, true, false, true, false, false, false, false])]
#[case(Opcode::Lw, [false, true, true, true, true, false, false, false])]
#[case(Opcode::Sw, [false, true, false, false, false, true, false, false])]
#[case(Opcode::Beq, [false, false, false, false, false, false, true, false])]
#[case(Opcode::J, [false, false, false, false, false, false, false, true])]
#[case(Opcode::Nop, [false; 8])]
#[case(Opcode::Unknown, [false; 8])]
fn test_control_table(#[case] op: Opcode, #[case] expected: [bool; 8]) {
    assert_eq!(derive_control(op), signals(expected));
}

/// Tests that derivation is pure: repeated calls agree for every opcode.
#[test]
fn test_control_idempotent() {
    for op in Opcode::ALL {
        let first = derive_control(op);
        for _ in 0..3 {
            assert_eq!(derive_control(op), first, "{} changed between calls", op);
        }
    }
}

/// Tests that undecodable instructions behave as bubbles.
#[test]
fn test_control_unknown_is_bubble() {
    assert_eq!(derive_control(Opcode::Unknown), ControlSignals::default());
    assert_eq!(derive_control(Opcode::Unknown), derive_control(Opcode::Nop));
}

/// Tests that no opcode both reads and writes memory.
#[test]
fn test_control_memory_exclusive() {
    for op in Opcode::ALL {
        let c = derive_control(op);
        assert!(!(c.mem_read && c.mem_write), "{}", op);
        assert!(!(c.branch && c.jump), "{}", op);
        if c.mem_to_reg {
            assert!(c.mem_read && c.reg_write, "{}", op);
        }
    }
}
