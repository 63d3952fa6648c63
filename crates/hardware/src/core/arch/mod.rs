//! MIPS architecture-specific components.
//!
//! This module contains the implementation of core architectural elements.
//! It includes the following modules:
//! 1. **GPRs:** General-Purpose Register file implementation.
//! 2. **Modes:** Engine run states and their transitions.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Engine run state definitions.
pub mod mode;
