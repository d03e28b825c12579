//! MIPS 5-Stage Pipeline Simulator Library.
//!
//! This crate implements a cycle-accurate simulator for a small MIPS subset
//! running on the classic in-order pipeline with no forwarding and no
//! hazard stalls: the architectural results of a program are exactly what
//! that timing produces.
//!
//! # Architecture
//!
//! * **Core**: 5-stage pipeline (Fetch, Decode, Execute, Memory, Writeback)
//!   advanced one tick at a time by an explicit engine value.
//! * **Memory**: word-addressable data memory with bounds-checked access.
//! * **Front end**: two-pass assembler, diagnostics, and trace rendering.
//!
//! # Modules
//!
//! * `common`: Shared types and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU core implementation.
//! * `isa`: Instruction Set Architecture definitions.
//! * `sim`: Assembler, loader, and rendering.
//! * `stats`: Performance statistics collection.

/// Shared types and error handling.
///
/// Provides the memory access classification and the error types used by
/// the core, the assembler, and the front end.
pub mod common;

/// Configuration system for pipeline and memory settings.
///
/// Loads and parses TOML configuration files; every setting has a default.
pub mod config;

/// CPU core implementation including pipeline stages and execution units.
///
/// Implements the 5-stage in-order pipeline, the control unit, the register
/// file, and data memory.
pub mod core;

/// Instruction Set Architecture definitions.
///
/// Opcodes, decoded instructions, register names, and binary encoding.
pub mod isa;

/// Assembler, source loading, and pipeline rendering.
pub mod sim;

/// Performance statistics collection and reporting.
///
/// Tracks cycle counts, retired instruction mix, and pipeline flushes.
pub mod stats;
