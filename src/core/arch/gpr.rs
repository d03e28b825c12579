//! General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It enforces
//! the architectural invariant that register `$zero` always reads as zero.

use crate::isa::abi::{self, NUM_REGS};

/// General-Purpose Register file.
///
/// Contains 32 signed 32-bit registers. Register 0 is hardwired to zero and
/// cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    ///
    /// # Returns
    ///
    /// The value held in the register. Register 0 always returns 0.
    pub fn read(&self, idx: usize) -> i32 {
        if idx == abi::REG_ZERO {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a register.
    ///
    /// Writes to register 0 are silently ignored.
    pub fn write(&mut self, idx: usize, val: i32) {
        if idx != abi::REG_ZERO {
            self.regs[idx] = val;
        }
    }

    /// Re-asserts that the backing slot of register 0 holds zero.
    pub fn hardwire_zero(&mut self) {
        self.regs[abi::REG_ZERO] = 0;
    }

    /// Copy of all 32 register values.
    pub fn snapshot(&self) -> [i32; NUM_REGS] {
        self.regs
    }

    /// Iterates over `(index, value)` for every register.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.regs.iter().copied().enumerate()
    }
}
