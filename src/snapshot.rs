//! Build-configuration snapshot model
//!
//! Models the resolved build configuration as an immutable mapping from
//! `CONFIG_*` symbols to their tristate build states, and parses the
//! kernel-style `.config` file format that build systems emit:
//!
//! ```text
//! CONFIG_CXL_BUS=m
//! CONFIG_64BIT=y
//! # CONFIG_CXL_MEM is not set
//! ```
//!
//! A symbol absent from the snapshot is treated as [`ConfigState::Disabled`];
//! the contract engine never distinguishes "missing" from "explicitly off".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::error::{CheckerError, Result};

/// How a configuration symbol is built into the current image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigState {
    /// Excluded from the build entirely (`n`, `is not set`, or absent)
    Disabled,
    /// Compiled directly into the base image (`y`)
    BuiltIn,
    /// Compiled as a separately loadable unit (`m`)
    Module,
}

impl ConfigState {
    /// The single-character flag the build system writes for this state
    pub fn as_flag(self) -> char {
        match self {
            ConfigState::Disabled => 'n',
            ConfigState::BuiltIn => 'y',
            ConfigState::Module => 'm',
        }
    }

    /// Whether the symbol is present in the build in any form
    pub fn is_enabled(self) -> bool {
        !matches!(self, ConfigState::Disabled)
    }

    /// Parse a tristate value string (`y`/`m`/`n`)
    ///
    /// Returns `None` for non-tristate values (quoted strings, numbers),
    /// which are valid `.config` content but carry no tristate state.
    fn from_value(value: &str) -> Option<Self> {
        match value {
            "y" => Some(ConfigState::BuiltIn),
            "m" => Some(ConfigState::Module),
            "n" => Some(ConfigState::Disabled),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigState::Disabled => write!(f, "disabled"),
            ConfigState::BuiltIn => write!(f, "built-in"),
            ConfigState::Module => write!(f, "module"),
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState::Disabled
    }
}

/// An immutable snapshot of resolved configuration symbols
///
/// Constructed once from a `.config` file (or programmatically), then only
/// read. Lookups of absent symbols yield [`ConfigState::Disabled`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    symbols: HashMap<String, ConfigState>,
}

impl ConfigSnapshot {
    /// Create an empty snapshot (every symbol reads as Disabled)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a symbol's state (builder form, used by callers assembling
    /// snapshots programmatically)
    pub fn with_symbol(mut self, symbol: impl Into<String>, state: ConfigState) -> Self {
        self.symbols.insert(symbol.into(), state);
        self
    }

    /// Set a symbol's state
    pub fn set(&mut self, symbol: impl Into<String>, state: ConfigState) {
        self.symbols.insert(symbol.into(), state);
    }

    /// Look up a symbol's state, defaulting absent symbols to Disabled
    pub fn state_of(&self, symbol: &str) -> ConfigState {
        self.symbols.get(symbol).copied().unwrap_or_default()
    }

    /// Whether the symbol was explicitly recorded in the snapshot
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains_key(symbol)
    }

    /// Number of explicitly recorded symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the snapshot records no symbols at all
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Parse a snapshot from `.config` file content
    ///
    /// Recognizes `CONFIG_FOO=<value>` assignments and the kernel's
    /// `# CONFIG_FOO is not set` spelling of an unset tristate. Other
    /// comments and blank lines are skipped. Non-tristate values (strings,
    /// numbers) are ignored: they carry no tristate state, so the symbol
    /// reads as Disabled. Duplicate assignments follow last-wins semantics.
    pub fn parse(content: &str) -> Result<Self> {
        let mut snapshot = ConfigSnapshot::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            let line_no = index + 1;

            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                // The not-set spelling is the only comment that carries state.
                let comment = comment.trim();
                if let Some(symbol) = comment
                    .strip_suffix("is not set")
                    .map(str::trim)
                    .filter(|s| !s.is_empty() && !s.contains(char::is_whitespace))
                {
                    snapshot.set(symbol, ConfigState::Disabled);
                }
                continue;
            }

            let (symbol, value) = line.split_once('=').ok_or_else(|| {
                CheckerError::parse_error(format!(
                    "line {}: expected 'SYMBOL=value' or comment, got '{}'",
                    line_no, line
                ))
            })?;

            let symbol = symbol.trim();
            if symbol.is_empty() || symbol.contains(char::is_whitespace) {
                return Err(CheckerError::parse_error(format!(
                    "line {}: invalid symbol name '{}'",
                    line_no, symbol
                )));
            }

            match ConfigState::from_value(value.trim()) {
                Some(state) => snapshot.set(symbol, state),
                None => {
                    debug!(symbol, value, "skipping non-tristate value");
                }
            }
        }

        debug!(symbols = snapshot.len(), "parsed configuration snapshot");
        Ok(snapshot)
    }

    /// Load and parse a snapshot from a `.config` file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckerError::file_error(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_value() {
        assert_eq!(ConfigState::from_value("y"), Some(ConfigState::BuiltIn));
        assert_eq!(ConfigState::from_value("m"), Some(ConfigState::Module));
        assert_eq!(ConfigState::from_value("n"), Some(ConfigState::Disabled));
        assert_eq!(ConfigState::from_value("\"string\""), None);
        assert_eq!(ConfigState::from_value("42"), None);
    }

    #[test]
    fn test_state_display_and_flag() {
        assert_eq!(ConfigState::Module.to_string(), "module");
        assert_eq!(ConfigState::BuiltIn.to_string(), "built-in");
        assert_eq!(ConfigState::Disabled.to_string(), "disabled");
        assert_eq!(ConfigState::Module.as_flag(), 'm');
        assert_eq!(ConfigState::BuiltIn.as_flag(), 'y');
        assert_eq!(ConfigState::Disabled.as_flag(), 'n');
    }

    #[test]
    fn test_absent_symbol_defaults_to_disabled() {
        let snapshot = ConfigSnapshot::new();
        assert_eq!(snapshot.state_of("CONFIG_64BIT"), ConfigState::Disabled);
        assert!(!snapshot.contains("CONFIG_64BIT"));
    }

    #[test]
    fn test_parse_assignments() {
        let content = "CONFIG_CXL_BUS=m\nCONFIG_64BIT=y\nCONFIG_CXL_MEM=n\n";
        let snapshot = ConfigSnapshot::parse(content).unwrap();
        assert_eq!(snapshot.state_of("CONFIG_CXL_BUS"), ConfigState::Module);
        assert_eq!(snapshot.state_of("CONFIG_64BIT"), ConfigState::BuiltIn);
        assert_eq!(snapshot.state_of("CONFIG_CXL_MEM"), ConfigState::Disabled);
        assert!(snapshot.contains("CONFIG_CXL_MEM"));
    }

    #[test]
    fn test_parse_not_set_comment() {
        let content = "# CONFIG_CXL_PMEM is not set\n";
        let snapshot = ConfigSnapshot::parse(content).unwrap();
        assert!(snapshot.contains("CONFIG_CXL_PMEM"));
        assert_eq!(snapshot.state_of("CONFIG_CXL_PMEM"), ConfigState::Disabled);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let content = "#\n# Automatically generated file; DO NOT EDIT.\n\nCONFIG_64BIT=y\n";
        let snapshot = ConfigSnapshot::parse(content).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.state_of("CONFIG_64BIT"), ConfigState::BuiltIn);
    }

    #[test]
    fn test_parse_ignores_non_tristate_values() {
        let content = "CONFIG_LOCALVERSION=\"-test\"\nCONFIG_LOG_BUF_SHIFT=17\n";
        let snapshot = ConfigSnapshot::parse(content).unwrap();
        assert!(!snapshot.contains("CONFIG_LOCALVERSION"));
        assert_eq!(
            snapshot.state_of("CONFIG_LOG_BUF_SHIFT"),
            ConfigState::Disabled
        );
    }

    #[test]
    fn test_parse_duplicate_last_wins() {
        let content = "CONFIG_CXL_BUS=y\nCONFIG_CXL_BUS=m\n";
        let snapshot = ConfigSnapshot::parse(content).unwrap();
        assert_eq!(snapshot.state_of("CONFIG_CXL_BUS"), ConfigState::Module);
    }

    #[test]
    fn test_parse_malformed_line() {
        let content = "CONFIG_CXL_BUS=m\nthis is not a config line\n";
        let err = ConfigSnapshot::parse(content).unwrap_err();
        assert!(matches!(err, CheckerError::ParseError(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_invalid_symbol_name() {
        let content = "BAD SYMBOL=y\n";
        let err = ConfigSnapshot::parse(content).unwrap_err();
        assert!(matches!(err, CheckerError::ParseError(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ConfigSnapshot::from_file("/nonexistent/.config").unwrap_err();
        assert!(matches!(err, CheckerError::FileError(_)));
    }
}
