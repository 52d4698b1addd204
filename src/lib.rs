//! Build-configuration contract checker
//!
//! Checks that a resolved build configuration satisfies a fixed contract: an
//! ordered table of configuration symbols paired with the build state each
//! must be in. The built-in contract covers what the `cxl_test` harness
//! needs to load and operate (its subsystem drivers built as modules, its
//! test hooks enabled).
//!
//! ## Architecture
//!
//! 1. **Snapshot** (`snapshot`): immutable symbol-to-state mapping parsed
//!    from a kernel-style `.config` file; absent symbols read as disabled.
//!
//! 2. **Engine** (`engine`): pure contract evaluation over a snapshot, with
//!    aggregating and fail-fast checking modes, plus the built-in contract
//!    tables.
//!
//! 3. **CLI** (`cli`): command-line interface with table/JSON/YAML output
//!    and exit codes suitable for build-system integration.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Check a build configuration against the cxl_test contract
//! kconfig-check check --config .config
//!
//! # Stop at the first violation, machine-readable output
//! kconfig-check check --config .config --fail-fast --format json
//!
//! # List what the contract requires
//! kconfig-check requirements
//! ```
//!
//! ## Example
//!
//! ```rust
//! use kconfig_contract::{contracts, ConfigSnapshot, ConfigState};
//!
//! let snapshot = ConfigSnapshot::new()
//!     .with_symbol("CONFIG_64BIT", ConfigState::BuiltIn)
//!     .with_symbol("CONFIG_CXL_BUS", ConfigState::Module)
//!     .with_symbol("CONFIG_CXL_ACPI", ConfigState::Module)
//!     .with_symbol("CONFIG_CXL_PMEM", ConfigState::Module)
//!     .with_symbol("CONFIG_CXL_REGION_INVALIDATION_TEST", ConfigState::BuiltIn)
//!     .with_symbol("CONFIG_NVDIMM_SECURITY_TEST", ConfigState::BuiltIn);
//!
//! let result = contracts::cxl_test().check(&snapshot);
//! assert!(result.is_pass());
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod snapshot;

// Re-export the contract engine types
pub use engine::{
    contracts, CheckResult, Contract, RequiredPredicate, Requirement, Violation, ViolationKind,
};

// Re-export snapshot types
pub use snapshot::{ConfigSnapshot, ConfigState};

// Re-export CLI types for command-line usage
pub use cli::{CheckCli, CheckCommands, CheckOutput, ExitCode, OutputFormat};

// Re-export error types
pub use error::{CheckerError, Result};

/// Checker version (from Cargo.toml)
pub const CHECKER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI application
///
/// This is the main entry point for the CLI binary.
pub fn run_cli(cli: CheckCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                CheckerError::FileError(_) => ExitCode::FileError,
                _ if e.is_user_error() => ExitCode::InvalidInput,
                _ => ExitCode::InternalError,
            }
        }
    }
}
