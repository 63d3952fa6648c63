//! # Hex Parser Tests
//!
//! Lines must hold exactly eight hex digits; the terminator is not counted.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use spemu_core::common::error::HexError;
use spemu_core::isa::hex::{format_word, parse_word};

#[rstest]
#[case("00222820", 0x0022_2820)]
#[case("00222820\n", 0x0022_2820)]
#[case("00222820\r\n", 0x0022_2820)]
#[case("abcdefAB", 0xABCD_EFAB)]
#[case("FFFFFFFF", u32::MAX)]
#[case("00000000", 0)]
fn parses_valid_lines(#[case] line: &str, #[case] word: u32) {
    assert_eq!(parse_word(line), Ok(word));
}

#[rstest]
#[case("", 0)]
#[case("1234567", 7)]
#[case("123456789", 9)]
fn wrong_length(#[case] line: &str, #[case] len: usize) {
    assert_eq!(parse_word(line), Err(HexError::WrongLength { len }));
}

#[rstest]
#[case("0000000g", 'g', 7)]
#[case(" 0000000", ' ', 0)]
#[case("ZZZZZZZZ", 'Z', 0)]
#[case("0000-001", '-', 4)]
fn invalid_digit_reports_first_offender(#[case] line: &str, #[case] ch: char, #[case] position: usize) {
    assert_eq!(parse_word(line), Err(HexError::InvalidDigit { ch, position }));
}

#[test]
fn length_counts_characters_not_bytes() {
    // Eight characters, sixteen bytes.
    assert_eq!(
        parse_word("éééééééé"),
        Err(HexError::InvalidDigit { ch: 'é', position: 0 })
    );
    assert_eq!(parse_word("éé"), Err(HexError::WrongLength { len: 2 }));
}

#[test]
fn trailing_whitespace_is_not_stripped() {
    assert_eq!(parse_word("00222820 "), Err(HexError::WrongLength { len: 9 }));
}

#[test]
fn format_is_upper_case_and_padded() {
    assert_eq!(format_word(0x0022_2820), "00222820");
    assert_eq!(format_word(0xabcd_ef01), "ABCDEF01");
}

proptest! {
    #[test]
    fn any_word_parses_from_either_case(word in any::<u32>()) {
        prop_assert_eq!(parse_word(&format_word(word)), Ok(word));
        prop_assert_eq!(parse_word(&format!("{word:08x}")), Ok(word));
    }

    #[test]
    fn other_lengths_are_rejected(line in "[0-9a-f]{0,7}|[0-9a-f]{9,16}") {
        let len = line.chars().count();
        prop_assert_eq!(parse_word(&line), Err(HexError::WrongLength { len }));
    }
}
