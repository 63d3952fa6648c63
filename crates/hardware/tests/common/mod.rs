//! Shared test infrastructure.

/// Instruction word encoders.
pub mod builder;
