//! Simulator configuration.
//!
//! Configuration is read from a TOML file. Every field has a default, so an
//! empty file (or no file at all) yields the standard machine: 1024 words of
//! data memory, a 10000-cycle ceiling and trace mode off.
//!
//! ```toml
//! [general]
//! trace = false
//!
//! [pipeline]
//! max_cycles = 10000
//!
//! [memory]
//! words = 1024
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::core::units::lsu::DEFAULT_MEMORY_WORDS;

/// Default run-loop ceiling.
pub const DEFAULT_MAX_CYCLES: u64 = 10_000;

/// Top-level simulator configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Data memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// General settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Single-step / trace mode: surface pipeline state after every cycle.
    #[serde(default)]
    pub trace: bool,
}

/// Pipeline settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Cycle ceiling after which the run loop gives up.
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_cycles: default_max_cycles(),
        }
    }
}

/// Data memory settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Data memory size in 32-bit words.
    #[serde(default = "default_memory_words")]
    pub words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            words: default_memory_words(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn default_max_cycles() -> u64 {
    DEFAULT_MAX_CYCLES
}

fn default_memory_words() -> usize {
    DEFAULT_MEMORY_WORDS
}
