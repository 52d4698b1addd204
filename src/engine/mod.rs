//! Contract engine for build-configuration checking
//!
//! A contract is a fixed, ordered table of requirements, each pairing a
//! configuration symbol with the predicate its build state must satisfy.
//! Checking a contract against a [`ConfigSnapshot`] is a pure evaluation:
//! no side effects, no retries, deterministic for a given snapshot.

pub mod contracts;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::snapshot::{ConfigSnapshot, ConfigState};

/// Predicate a required symbol's build state must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredPredicate {
    /// Symbol must be present in the build in any form (`y` or `m`)
    MustBeEnabledOrModule,
    /// Symbol must be built as a loadable module (`m` only)
    MustBeModule,
}

impl RequiredPredicate {
    /// Whether the given state satisfies this predicate
    pub fn is_satisfied_by(self, state: ConfigState) -> bool {
        match self {
            RequiredPredicate::MustBeEnabledOrModule => state.is_enabled(),
            RequiredPredicate::MustBeModule => state == ConfigState::Module,
        }
    }

    /// Human-readable statement of what the predicate demands
    pub fn expectation(self) -> &'static str {
        match self {
            RequiredPredicate::MustBeEnabledOrModule => "enabled (=y or =m)",
            RequiredPredicate::MustBeModule => "built as module (=m)",
        }
    }

    /// Violation classification produced when this predicate fails
    pub fn violation_kind(self) -> ViolationKind {
        match self {
            RequiredPredicate::MustBeEnabledOrModule => ViolationKind::RequiredFeatureDisabled,
            RequiredPredicate::MustBeModule => ViolationKind::MissingRequiredModule,
        }
    }
}

impl fmt::Display for RequiredPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredPredicate::MustBeEnabledOrModule => write!(f, "must be enabled or module"),
            RequiredPredicate::MustBeModule => write!(f, "must be module"),
        }
    }
}

/// Classification of a contract violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A symbol required as a loadable module is disabled or built-in
    MissingRequiredModule,
    /// A symbol required in any enabled form is disabled
    RequiredFeatureDisabled,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingRequiredModule => write!(f, "missing required module"),
            ViolationKind::RequiredFeatureDisabled => write!(f, "required feature disabled"),
        }
    }
}

/// A single entry in a contract's requirement table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Configuration symbol, in full `CONFIG_`-prefixed form
    pub symbol: String,
    /// Predicate the symbol's build state must satisfy
    pub predicate: RequiredPredicate,
}

impl Requirement {
    /// Create a new requirement
    pub fn new(symbol: impl Into<String>, predicate: RequiredPredicate) -> Self {
        Self {
            symbol: symbol.into(),
            predicate,
        }
    }

    /// Evaluate this requirement against a snapshot
    ///
    /// Returns the violation if the snapshot's state for the symbol does not
    /// satisfy the predicate, `None` otherwise.
    pub fn evaluate(&self, snapshot: &ConfigSnapshot) -> Option<Violation> {
        let actual = snapshot.state_of(&self.symbol);
        if self.predicate.is_satisfied_by(actual) {
            None
        } else {
            Some(Violation {
                symbol: self.symbol.clone(),
                predicate: self.predicate,
                actual,
                kind: self.predicate.violation_kind(),
            })
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.predicate)
    }
}

/// A violated requirement together with the symbol's actual state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The symbol that failed its requirement
    pub symbol: String,
    /// The predicate that was not satisfied
    pub predicate: RequiredPredicate,
    /// The state the snapshot actually recorded (Disabled if absent)
    pub actual: ConfigState,
    /// Classification of the violation
    pub kind: ViolationKind,
}

impl Violation {
    /// Human-readable description of the violation
    pub fn message(&self) -> String {
        format!(
            "{} {} but is {}",
            self.symbol,
            self.predicate,
            self.actual
        )
    }

    /// Remediation hint sufficient to fix the configuration
    pub fn suggestion(&self) -> String {
        let flag = match self.predicate {
            RequiredPredicate::MustBeModule => "m".to_string(),
            RequiredPredicate::MustBeEnabledOrModule => "y (or m)".to_string(),
        };
        format!("Set {}={} in the build configuration", self.symbol, flag)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message())
    }
}

/// Result of checking a contract against a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "violations")]
pub enum CheckResult {
    /// Every requirement holds
    Pass,
    /// One or more requirements are violated, in requirement-table order
    Fail(Vec<Violation>),
}

impl CheckResult {
    /// Whether the contract is satisfied
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::Pass)
    }

    /// The violations, empty on Pass
    pub fn violations(&self) -> &[Violation] {
        match self {
            CheckResult::Pass => &[],
            CheckResult::Fail(violations) => violations,
        }
    }
}

/// A named, fixed, ordered set of configuration requirements
///
/// The requirement table is data, never branching code: adding a requirement
/// is a table change. The table is established at construction and never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    name: String,
    requirements: Vec<Requirement>,
}

impl Contract {
    /// Build a contract from a requirement table
    pub fn from_table(
        name: impl Into<String>,
        table: &[(&str, RequiredPredicate)],
    ) -> Self {
        Self {
            name: name.into(),
            requirements: table
                .iter()
                .map(|(symbol, predicate)| Requirement::new(*symbol, *predicate))
                .collect(),
        }
    }

    /// Name of this contract
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered requirement table
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Check every requirement and aggregate all violations
    ///
    /// Violations are reported in requirement-table order. This is the
    /// diagnostic mode: a user sees everything that needs fixing in one run.
    pub fn check(&self, snapshot: &ConfigSnapshot) -> CheckResult {
        let violations: Vec<Violation> = self
            .requirements
            .iter()
            .filter_map(|req| req.evaluate(snapshot))
            .collect();

        debug!(
            contract = %self.name,
            requirements = self.requirements.len(),
            violations = violations.len(),
            "contract checked"
        );

        if violations.is_empty() {
            CheckResult::Pass
        } else {
            CheckResult::Fail(violations)
        }
    }

    /// Check requirements in order, stopping at the first violation
    ///
    /// Accepts and rejects exactly the same snapshots as [`Contract::check`];
    /// on failure the reported violations are a length-1 prefix of the
    /// aggregated list.
    pub fn check_fail_fast(&self, snapshot: &ConfigSnapshot) -> CheckResult {
        match self
            .requirements
            .iter()
            .find_map(|req| req.evaluate(snapshot))
        {
            None => CheckResult::Pass,
            Some(violation) => CheckResult::Fail(vec![violation]),
        }
    }
}
