//! CLI module for the contract checker
//!
//! Command-line interface for checking a build configuration against the
//! built-in requirement tables and for listing what a table demands.

pub mod commands;
pub mod output;

pub use commands::{CheckCli, CheckCommands};
pub use output::{CheckOutput, OutputFormat};

use crate::error::CheckerError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful execution, contract satisfied
    Success = 0,
    /// One or more contract requirements violated
    ContractViolation = 1,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from a check result
    pub fn from_check_result(passed: bool) -> Self {
        if passed {
            ExitCode::Success
        } else {
            ExitCode::ContractViolation
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: CheckCli) -> Result<ExitCode, CheckerError> {
    match cli.command {
        CheckCommands::Check {
            config,
            format,
            fail_fast,
        } => commands::execute_check(config, format, fail_fast),
        CheckCommands::Requirements { format } => commands::execute_requirements(format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::ContractViolation), 1);
        assert_eq!(i32::from(ExitCode::InvalidInput), 3);
        assert_eq!(i32::from(ExitCode::FileError), 4);
        assert_eq!(i32::from(ExitCode::InternalError), 10);
    }

    #[test]
    fn test_exit_code_from_check_result() {
        assert_eq!(ExitCode::from_check_result(true), ExitCode::Success);
        assert_eq!(
            ExitCode::from_check_result(false),
            ExitCode::ContractViolation
        );
    }
}
