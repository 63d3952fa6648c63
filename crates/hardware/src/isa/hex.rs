//! Hexadecimal Instruction Parser.
//!
//! Converts one line of operator input into a 32-bit instruction word. A line must
//! hold exactly eight hexadecimal digits, most-significant digit first; the line
//! terminator (`\n` or `\r\n`) is ignored.

use crate::common::constants::HEX_DIGITS;
use crate::common::error::HexError;

/// Radix of the instruction text.
const RADIX: u32 = 16;

/// Bits contributed by each hexadecimal digit.
const BITS_PER_DIGIT: u32 = 4;

/// Parses an 8-digit hexadecimal line into an instruction word.
///
/// # Arguments
///
/// * `line` - The input line, with or without its terminator.
///
/// # Returns
///
/// The encoded word, or a [`HexError`] naming the first violated constraint.
pub fn parse_word(line: &str) -> Result<u32, HexError> {
    let text = line.trim_end_matches(['\n', '\r']);

    let len = text.chars().count();
    if len != HEX_DIGITS {
        return Err(HexError::WrongLength { len });
    }

    text.chars()
        .enumerate()
        .try_fold(0u32, |acc, (position, ch)| {
            let digit = ch
                .to_digit(RADIX)
                .ok_or(HexError::InvalidDigit { ch, position })?;
            Ok((acc << BITS_PER_DIGIT) | digit)
        })
}

/// Formats an instruction word as zero-padded, upper-case 8-digit hexadecimal.
pub fn format_word(word: u32) -> String {
    format!("{word:08X}")
}
