//! CLI command definitions for the contract checker
//!
//! Provides Clap-based command definitions for checking a build
//! configuration against the built-in contract and for listing the
//! contract's requirement table.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use super::output::{CheckOutput, OutputFormat};
use super::ExitCode;
use crate::engine::contracts;
use crate::error::CheckerError;
use crate::snapshot::ConfigSnapshot;

/// Contract checker CLI
///
/// Check that a resolved build configuration satisfies the requirements a
/// dependent test harness needs to load and operate.
#[derive(Parser, Debug)]
#[command(name = "kconfig-check")]
#[command(about = "Check a build configuration against the cxl_test contract", long_about = None)]
#[command(version)]
pub struct CheckCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: CheckCommands,
}

/// Available checker commands
#[derive(Subcommand, Debug)]
pub enum CheckCommands {
    /// Check a configuration file against the contract
    ///
    /// Loads a kernel-style .config file and evaluates every requirement in
    /// the contract's table. Exits 0 when the contract is satisfied, 1 when
    /// any requirement is violated.
    Check {
        /// Path to the .config file to check
        #[arg(short, long)]
        config: PathBuf,

        /// Output format for check results
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,

        /// Stop at the first violation instead of reporting all of them
        #[arg(long)]
        fail_fast: bool,
    },

    /// List the contract's requirement table
    ///
    /// Prints each required symbol and the build state it must be in.
    Requirements {
        /// Output format for the requirement listing
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },
}

/// Execute the check command
pub fn execute_check(
    config: PathBuf,
    format: Option<OutputFormat>,
    fail_fast: bool,
) -> Result<ExitCode, CheckerError> {
    let snapshot = ConfigSnapshot::from_file(&config)?;
    debug!(config = %config.display(), symbols = snapshot.len(), fail_fast, "snapshot loaded");

    let contract = contracts::cxl_test();
    let result = if fail_fast {
        contract.check_fail_fast(&snapshot)
    } else {
        contract.check(&snapshot)
    };

    let output = CheckOutput::from_result(contract.name(), contract.requirements().len(), &result);
    output.render(format.unwrap_or_default())?;

    Ok(ExitCode::from_check_result(result.is_pass()))
}

/// Execute the requirements command
pub fn execute_requirements(format: Option<OutputFormat>) -> Result<ExitCode, CheckerError> {
    let contract = contracts::cxl_test();

    match format.unwrap_or_default() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(contract.requirements())?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(contract.requirements())?;
            println!("{}", yaml);
        }
        OutputFormat::Table => {
            print_requirements_table(&contract);
        }
    }

    Ok(ExitCode::Success)
}

/// Print the requirement table in human-readable format
fn print_requirements_table(contract: &crate::engine::Contract) {
    use colored::Colorize;

    println!(
        "{}",
        format!("Contract: {}", contract.name()).green().bold()
    );
    println!();
    println!("{}", "Requirements:".cyan().bold());
    for requirement in contract.requirements() {
        println!(
            "  {} {} {}",
            "-".blue(),
            requirement.symbol.bold(),
            requirement.predicate.expectation().dimmed()
        );
    }
}
