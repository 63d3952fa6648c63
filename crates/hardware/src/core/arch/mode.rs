//! Engine Run States.
//!
//! This module defines the lifecycle of the execution engine. It implements the following:
//! 1. **State Classification:** `Running` accepts instructions; `Halted` is terminal.
//! 2. **Observability:** Human-readable naming for state dumps and logs.

/// Execution engine run state.
///
/// The only transition is `Running` → `Halted`, taken by the exit syscall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Instructions are fetched, decoded, and executed.
    #[default]
    Running,

    /// Terminal state; no further instructions are executed.
    Halted,
}

impl RunState {
    /// Returns the human-readable name of the run state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Halted => "Halted",
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
