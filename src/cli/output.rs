//! Output formatting for the contract checker CLI
//!
//! Renders check results in JSON, YAML, and a colored human-readable table.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::engine::{CheckResult, Violation};
use crate::error::CheckerError;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format for configuration output
    Yaml,
}

/// Check output structure for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    /// Name of the contract that was checked
    pub contract: String,
    /// Whether every requirement held
    pub passed: bool,
    /// Number of requirements evaluated
    pub requirement_count: usize,
    /// Number of violated requirements
    pub violation_count: usize,
    /// The violations, in requirement-table order
    pub violations: Vec<ViolationOutput>,
    /// Summary message
    pub summary: String,
}

/// Individual violation output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationOutput {
    /// The misconfigured symbol
    pub symbol: String,
    /// What the contract requires of it
    pub required: String,
    /// The state the snapshot actually recorded
    pub actual: String,
    /// Violation classification
    pub kind: String,
    /// Remediation hint
    pub suggestion: String,
}

impl CheckOutput {
    /// Create output from a check result
    pub fn from_result(contract: &str, requirement_count: usize, result: &CheckResult) -> Self {
        let violations: Vec<ViolationOutput> = result
            .violations()
            .iter()
            .map(ViolationOutput::from_violation)
            .collect();
        let violation_count = violations.len();
        let passed = result.is_pass();

        let summary = if passed {
            format!(
                "Configuration satisfies the {} contract ({} requirements)",
                contract, requirement_count
            )
        } else {
            format!(
                "Configuration violates the {} contract: {} of {} requirements not met",
                contract, violation_count, requirement_count
            )
        };

        Self {
            contract: contract.to_string(),
            passed,
            requirement_count,
            violation_count,
            violations,
            summary,
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<(), CheckerError> {
        match format {
            OutputFormat::Json => self.render_json(),
            OutputFormat::Yaml => self.render_yaml(),
            OutputFormat::Table => self.render_table(),
        }
    }

    fn render_json(&self) -> Result<(), CheckerError> {
        let json = serde_json::to_string_pretty(self)?;
        println!("{}", json);
        Ok(())
    }

    fn render_yaml(&self) -> Result<(), CheckerError> {
        let yaml = serde_yaml::to_string(self)?;
        println!("{}", yaml);
        Ok(())
    }

    fn render_table(&self) -> Result<(), CheckerError> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Contract Check Results".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(stdout).ok();

        let status_icon = if self.passed {
            "+".green()
        } else {
            "x".red()
        };
        writeln!(stdout, "{} {}", status_icon, self.summary).ok();

        if !self.violations.is_empty() {
            writeln!(stdout).ok();
            writeln!(stdout, "{}", "Violations:".cyan().bold()).ok();
            writeln!(stdout, "{}", "-".repeat(60)).ok();

            for violation in &self.violations {
                violation.render_table_row(&mut stdout);
            }
        }

        stdout.flush().ok();
        Ok(())
    }
}

impl ViolationOutput {
    /// Create from an engine violation
    pub fn from_violation(violation: &Violation) -> Self {
        Self {
            symbol: violation.symbol.clone(),
            required: violation.predicate.expectation().to_string(),
            actual: violation.actual.to_string(),
            kind: violation.kind.to_string(),
            suggestion: violation.suggestion(),
        }
    }

    fn render_table_row(&self, stdout: &mut io::Stdout) {
        writeln!(stdout).ok();
        writeln!(
            stdout,
            "{} {} {}",
            "x".red(),
            "ERROR".red().bold(),
            self.symbol.bold()
        )
        .ok();
        writeln!(stdout, "  {} {}", "Required:".dimmed(), self.required.cyan()).ok();
        writeln!(stdout, "  {} {}", "Actual:".dimmed(), self.actual.yellow()).ok();
        writeln!(stdout, "  {} {}", "Fix:".dimmed(), self.suggestion.green()).ok();
    }
}
