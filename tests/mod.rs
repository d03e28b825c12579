//! Test module organization.
//!
//! This module organizes all integration tests for the MIPS pipeline
//! simulator.

/// ALU (Arithmetic Logic Unit) operation tests.
mod alu_tests;


/// Assembler and source loader tests.
mod assembler_tests;



/// Control unit signal table tests.
mod control_tests;
