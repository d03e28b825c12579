//! Load/Store Unit (LSU).
//!
//! This module implements the word-addressable data memory accessed by the
//! Memory stage. Byte addresses are divided by four to select a word; any
//! address whose word index falls outside the memory raises
//! `SimError::OutOfBounds` rather than being clamped.

use crate::common::{AccessType, SimError};

/// Default data memory size in 32-bit words.
pub const DEFAULT_MEMORY_WORDS: usize = 1024;

/// Bytes per memory word.
pub const WORD_BYTES: u32 = 4;

/// Word-addressable data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<i32>,
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_WORDS)
    }
}

impl DataMemory {
    /// Creates a zero-filled memory of `words` 32-bit words.
    pub fn new(words: usize) -> Self {
        Self {
            words: vec![0; words],
        }
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the memory has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads the word at byte address `addr`.
    pub fn load(&self, addr: i32) -> Result<i32, SimError> {
        let index = self.index(addr, AccessType::Read)?;
        Ok(self.words[index])
    }

    /// Writes `val` to the word at byte address `addr`.
    pub fn store(&mut self, addr: i32, val: i32) -> Result<(), SimError> {
        let index = self.index(addr, AccessType::Write)?;
        self.words[index] = val;
        Ok(())
    }

    /// All words, indexed by word number.
    pub fn words(&self) -> &[i32] {
        &self.words
    }

    /// Maps a byte address to a word index.
    ///
    /// The address is reinterpreted as unsigned, so negative addresses land
    /// far above any realistic memory size.
    fn index(&self, addr: i32, access: AccessType) -> Result<usize, SimError> {
        let index = ((addr as u32) / WORD_BYTES) as usize;
        if index >= self.words.len() {
            return Err(SimError::OutOfBounds {
                access,
                addr,
                index,
                size: self.words.len(),
            });
        }
        Ok(index)
    }
}
