//! Load/Store Unit (LSU).
//!
//! This module computes and validates effective addresses for word accesses.
//! All checks run before any state is touched, so a rejected access leaves the
//! machine unchanged.

use crate::common::constants::WORD_BYTES;
use crate::common::data::AccessType;
use crate::common::error::ExecError;

/// Load/Store Unit for word memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Resolves `base + offset` into a word index.
    ///
    /// The offset is checked for alignment first, then the full byte address for
    /// alignment and for lying within `words` words of memory. The sum is formed in
    /// 64 bits, so it never wraps.
    ///
    /// # Arguments
    ///
    /// * `access` - Instruction class, used in error reports.
    /// * `base`   - Value of the base register.
    /// * `offset` - Sign-extended immediate.
    /// * `words`  - Memory extent in words.
    pub fn word_index(
        access: AccessType,
        base: i32,
        offset: i32,
        words: usize,
    ) -> Result<usize, ExecError> {
        let width = i64::from(WORD_BYTES);

        if i64::from(offset) % width != 0 {
            return Err(ExecError::Misaligned {
                access,
                what: "immediate",
                value: i64::from(offset),
            });
        }

        let address = i64::from(base) + i64::from(offset);
        if address % width != 0 {
            return Err(ExecError::Misaligned {
                access,
                what: "address",
                value: address,
            });
        }

        let index = usize::try_from(address / width)
            .ok()
            .filter(|idx| *idx < words)
            .ok_or(ExecError::OutOfBounds {
                access,
                address,
                words,
            })?;
        Ok(index)
    }
}
