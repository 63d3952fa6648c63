//! Session driver.
//!
//! Runs the read-decode-execute loop over a console and reports the outcome.

/// The `Simulator` session loop.
pub mod simulator;

pub use simulator::{RunSummary, Simulator, StopReason};
