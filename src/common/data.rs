//! Memory Access Types.
//!
//! Classifies data-memory accesses so that faults can report whether a load
//! or a store went out of range.

use std::fmt;

use serde::Serialize;

/// Type of data-memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AccessType {
    /// Load from memory into a register (`LW`).
    Read,

    /// Store from a register into memory (`SW`).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessType::Read => f.write_str("read"),
            AccessType::Write => f.write_str("write"),
        }
    }
}
