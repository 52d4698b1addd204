//! Built-in contract tables
//!
//! The requirement tables shipped with the checker. Each table lists, in
//! order, the symbols a dependent feature needs and the state each must be
//! in. Tables are data: extending a contract means adding a row here.

use super::{Contract, RequiredPredicate};

/// Requirement table for loading the CXL unit test harness
///
/// The three CXL subsystem drivers must be loadable modules so the harness
/// can substitute its mock devices at load time; the remaining symbols only
/// need to be present in the build in some form.
const CXL_TEST_TABLE: &[(&str, RequiredPredicate)] = &[
    ("CONFIG_CXL_BUS", RequiredPredicate::MustBeModule),
    ("CONFIG_CXL_ACPI", RequiredPredicate::MustBeModule),
    ("CONFIG_CXL_PMEM", RequiredPredicate::MustBeModule),
    ("CONFIG_64BIT", RequiredPredicate::MustBeEnabledOrModule),
    (
        "CONFIG_CXL_REGION_INVALIDATION_TEST",
        RequiredPredicate::MustBeEnabledOrModule,
    ),
    (
        "CONFIG_NVDIMM_SECURITY_TEST",
        RequiredPredicate::MustBeEnabledOrModule,
    ),
];

/// The contract the `cxl_test` harness requires of the build configuration
pub fn cxl_test() -> Contract {
    Contract::from_table("cxl_test", CXL_TEST_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ConfigSnapshot, ConfigState};

    #[test]
    fn test_cxl_test_table_shape() {
        let contract = cxl_test();
        assert_eq!(contract.name(), "cxl_test");
        assert_eq!(contract.requirements().len(), 6);

        let module_symbols: Vec<&str> = contract
            .requirements()
            .iter()
            .filter(|r| r.predicate == RequiredPredicate::MustBeModule)
            .map(|r| r.symbol.as_str())
            .collect();
        assert_eq!(
            module_symbols,
            vec!["CONFIG_CXL_BUS", "CONFIG_CXL_ACPI", "CONFIG_CXL_PMEM"]
        );
    }

    #[test]
    fn test_cxl_test_satisfied_snapshot() {
        let snapshot = ConfigSnapshot::new()
            .with_symbol("CONFIG_64BIT", ConfigState::Module)
            .with_symbol("CONFIG_CXL_BUS", ConfigState::Module)
            .with_symbol("CONFIG_CXL_ACPI", ConfigState::Module)
            .with_symbol("CONFIG_CXL_PMEM", ConfigState::Module)
            .with_symbol("CONFIG_CXL_REGION_INVALIDATION_TEST", ConfigState::BuiltIn)
            .with_symbol("CONFIG_NVDIMM_SECURITY_TEST", ConfigState::Module);
        assert!(cxl_test().check(&snapshot).is_pass());
    }

    #[test]
    fn test_cxl_test_builtin_bus_violates() {
        let snapshot = ConfigSnapshot::new()
            .with_symbol("CONFIG_64BIT", ConfigState::Module)
            .with_symbol("CONFIG_CXL_BUS", ConfigState::BuiltIn)
            .with_symbol("CONFIG_CXL_ACPI", ConfigState::Module)
            .with_symbol("CONFIG_CXL_PMEM", ConfigState::Module)
            .with_symbol("CONFIG_CXL_REGION_INVALIDATION_TEST", ConfigState::BuiltIn)
            .with_symbol("CONFIG_NVDIMM_SECURITY_TEST", ConfigState::Module);

        let result = cxl_test().check(&snapshot);
        let violations = result.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].symbol, "CONFIG_CXL_BUS");
        assert_eq!(violations[0].predicate, RequiredPredicate::MustBeModule);
        assert_eq!(violations[0].actual, ConfigState::BuiltIn);
    }

    #[test]
    fn test_cxl_test_empty_snapshot_fails_everything() {
        let result = cxl_test().check(&ConfigSnapshot::new());
        assert_eq!(result.violations().len(), 6);
    }
}
