//! Execution units.
//!
//! Functional units shared by the instruction handlers:
//! 1. **LSU:** Effective-address generation and validation for word accesses.

/// Load/Store Unit (LSU) for effective-address validation.
pub mod lsu;
