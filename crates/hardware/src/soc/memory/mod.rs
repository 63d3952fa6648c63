//! Word-Addressable System Memory.
//!
//! This module implements the small fixed block of data memory. It provides:
//! 1. **Storage:** A vector of signed 32-bit words, zero-initialized or preloaded.
//! 2. **Word Access:** Checked reads and writes by word index.
//! 3. **Byte View:** Big-endian byte reads used by the print-string syscall.

use std::io::{self, Write};

use crate::common::constants::WORD_BYTES;

/// System Memory structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<i32>,
}

impl Memory {
    /// Creates a zero-filled memory of `len` words.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len],
        }
    }

    /// Creates a memory of `len` words whose first cells hold `preload`.
    ///
    /// Preload values beyond `len` are dropped.
    pub fn with_contents(len: usize, preload: &[i32]) -> Self {
        let mut mem = Self::new(len);
        for (slot, val) in mem.words.iter_mut().zip(preload) {
            *slot = *val;
        }
        mem
    }

    /// Returns the extent of memory in words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if memory holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the extent of memory in bytes.
    pub fn len_bytes(&self) -> usize {
        self.words.len() * WORD_BYTES as usize
    }

    /// Reads the word at `index`, or `None` if it lies outside memory.
    pub fn read_word(&self, index: usize) -> Option<i32> {
        self.words.get(index).copied()
    }

    /// Writes the word at `index`; returns `false` (and writes nothing) if out of range.
    pub fn write_word(&mut self, index: usize, val: i32) -> bool {
        match self.words.get_mut(index) {
            Some(slot) => {
                *slot = val;
                true
            }
            None => false,
        }
    }

    /// Reads the word at an index already validated against [`Memory::len`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn load(&self, index: usize) -> i32 {
        self.words[index]
    }

    /// Writes the word at an index already validated against [`Memory::len`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn store(&mut self, index: usize, val: i32) {
        self.words[index] = val;
    }

    /// Reads the byte at byte address `addr`.
    ///
    /// Bytes are packed big-endian: address `A` selects word `A / 4`, and lane
    /// `A % 4 == 0` is the most significant byte.
    pub fn read_byte(&self, addr: usize) -> Option<u8> {
        let word = self.read_word(addr / WORD_BYTES as usize)?;
        word.to_be_bytes().get(addr % WORD_BYTES as usize).copied()
    }

    /// Returns all words in index order.
    pub fn words(&self) -> &[i32] {
        &self.words
    }

    /// Dumps non-zero words as `[index] value` lines.
    pub fn dump(&self, out: &mut impl Write) -> io::Result<()> {
        for (index, val) in self.words.iter().enumerate().filter(|(_, v)| **v != 0) {
            writeln!(out, "mem[{index:>3}] = {val}")?;
        }
        Ok(())
    }
}
