//! Configuration system for the MIPS emulator.
//!
//! This module defines the configuration structures used to parameterize a session.
//! It provides:
//! 1. **Defaults:** Baseline machine constants (memory extent, start PC, banner).
//! 2. **Structures:** Config sections for general behaviour and memory.
//! 3. **Loading:** JSON parsing and range validation.
//!
//! The CLI always runs with `Config::default()`; JSON configuration is available to
//! library users and test harnesses.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_MEMORY_WORDS, MAX_MEMORY_WORDS, WORD_BYTES};
use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    use super::DEFAULT_MEMORY_WORDS;

    /// Initial program counter.
    pub const START_PC: u32 = 0;

    /// Memory extent in words.
    pub const MEMORY_WORDS: usize = DEFAULT_MEMORY_WORDS;

    /// Print the welcome banner and prompt at session start.
    pub const SHOW_BANNER: bool = true;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use spemu_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "words": 64, "preload": [1, 2, 3] }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.words, 64);
/// assert_eq!(config.memory.preload, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General session settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.start_pc % WORD_BYTES != 0 {
            return Err(ConfigError::Invalid(format!(
                "start_pc {:#010x} is not word aligned",
                self.general.start_pc
            )));
        }
        if !(1..=MAX_MEMORY_WORDS).contains(&self.memory.words) {
            return Err(ConfigError::Invalid(format!(
                "memory.words must be between 1 and {MAX_MEMORY_WORDS}, got {}",
                self.memory.words
            )));
        }
        if self.memory.preload.len() > self.memory.words {
            return Err(ConfigError::Invalid(format!(
                "memory.preload holds {} words but memory has {}",
                self.memory.preload.len(),
                self.memory.words
            )));
        }
        Ok(())
    }
}

/// General session settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Echo `[trace] pc=... <disassembly>` after each executed instruction and dump
    /// registers and statistics when the session ends
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Print the welcome banner and prompt
    #[serde(default = "GeneralConfig::default_show_banner")]
    pub show_banner: bool,
}

impl GeneralConfig {
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }

    const fn default_show_banner() -> bool {
        defaults::SHOW_BANNER
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            show_banner: defaults::SHOW_BANNER,
        }
    }
}

/// Data memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Memory extent in words
    #[serde(default = "MemoryConfig::default_words")]
    pub words: usize,

    /// Initial contents of the first memory words
    #[serde(default)]
    pub preload: Vec<i32>,
}

impl MemoryConfig {
    const fn default_words() -> usize {
        defaults::MEMORY_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            words: defaults::MEMORY_WORDS,
            preload: Vec::new(),
        }
    }
}
