//! Configuration system for the bank generator.
//!
//! This module defines the configuration structures used to parameterize a
//! generator run. It provides:
//! 1. **Defaults:** The baseline array geometry and trace gate.
//! 2. **Structures:** Hierarchical config for general options and the array.
//!
//! Configuration is supplied via `Config::default()` from the CLI; the structs
//! also deserialize from JSON for embedding tools.

use serde::Deserialize;

use crate::common::constants;

/// Default configuration constants for the generator.
///
/// These values define the baseline target when not explicitly overridden.
mod defaults {
    use super::constants;

    /// Default total address depth of the array.
    pub const DEPTH: usize = constants::DEFAULT_DEPTH;
}

/// Root configuration for a generator run.
///
/// Composed of general options and the array geometry. All fields have
/// defaults matching the fixed hardware target.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General options (trace gate).
    #[serde(default)]
    pub general: GeneralConfig,
    /// Array geometry (address depth).
    #[serde(default)]
    pub array: ArrayConfig,
}

/// General generator options.
///
/// Contains the trace gate controlling per-address mapping output; the trace
/// is a debugging aid, not a stable interface.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-address mapping traces and bank dumps through `tracing`.
    #[serde(default)]
    pub trace_mapping: bool,
}

/// Array geometry configuration.
///
/// Defines the total address depth distributed across the 4 banks.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayConfig {
    /// Total address depth; must be a multiple of the bank count.
    #[serde(default = "ArrayConfig::default_depth")]
    pub depth: usize,
}

impl ArrayConfig {
    /// Returns the default array depth.
    const fn default_depth() -> usize {
        defaults::DEPTH
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            depth: defaults::DEPTH,
        }
    }
}
