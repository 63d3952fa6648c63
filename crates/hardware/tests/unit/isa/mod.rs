

/// Hexadecimal line parsing.
pub mod hex_parsing;
