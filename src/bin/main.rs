//! Contract checker CLI
//!
//! Command-line interface for the build-configuration contract checker.
//!
//! # Usage
//!
//! ```bash
//! # Check a build configuration against the cxl_test contract
//! kconfig-check check --config .config
//!
//! # List the contract's requirement table
//! kconfig-check requirements --format json
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success - contract satisfied
//! - 1: One or more contract requirements violated
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 10: Internal error

use clap::Parser;
use kconfig_contract::{run_cli, CheckCli};

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    // Parse CLI arguments
    let cli = CheckCli::parse();

    // Run the CLI and exit with appropriate code
    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
