//! Builtin catalog of known smart-contract vulnerability patterns.
//!
//! The catalog is constructed once at startup and never mutated. Record
//! order is fixed and significant: scan results preserve it.

use crate::model::{Severity, VulnerabilityRecord};

/// Fixed, ordered list of known vulnerability patterns.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<VulnerabilityRecord>,
}

fn entry(
    name: &str,
    description: &str,
    severity: Severity,
    remediation: &str,
    reference: &str,
) -> VulnerabilityRecord {
    VulnerabilityRecord {
        name: name.to_string(),
        description: description.to_string(),
        severity,
        remediation: remediation.to_string(),
        references: vec![reference.to_string()],
    }
}

impl Catalog {
    /// Returns the builtin catalog of 20 known patterns.
    pub fn builtin() -> Self {
        let records = vec![
            entry(
                "Reentrancy",
                "Occurs when a function makes an external call to another untrusted contract before resolving any changes.",
                Severity::Critical,
                "Use a mutex to lock function execution or check-effects-interactions pattern.",
                "https://example.com/reentrancy",
            ),
            entry(
                "Integer Overflow and Underflow",
                "Occurs when arithmetic operations exceed the storage limits of their data types.",
                Severity::High,
                "Use SafeMath libraries to handle arithmetic operations.",
                "https://example.com/integer-overflow-underflow",
            ),
            entry(
                "Access Control Issues",
                "Improper access control can allow unauthorized users to perform restricted actions.",
                Severity::Critical,
                "Implement proper access control mechanisms and validate user permissions.",
                "https://example.com/access-control",
            ),
            entry(
                "Uninitialized Storage Pointers",
                "Uninitialized storage pointers can lead to unintentional data manipulation.",
                Severity::High,
                "Always initialize storage pointers before using them.",
                "https://example.com/uninitialized-storage-pointers",
            ),
            entry(
                "Unrestricted Write to Storage",
                "Allows unauthorized write access to storage, potentially leading to data corruption.",
                Severity::Critical,
                "Implement access control checks before allowing write operations.",
                "https://example.com/unrestricted-write",
            ),
            entry(
                "Denial of Service",
                "An attack that makes the contract unusable by consuming excessive gas or other resources.",
                Severity::High,
                "Optimize gas usage and validate inputs to prevent excessive resource consumption.",
                "https://example.com/denial-of-service",
            ),
            entry(
                "Floating Pragma",
                "Using a floating pragma can lead to inconsistent compiler behavior.",
                Severity::Medium,
                "Use a fixed compiler version for consistency.",
                "https://example.com/floating-pragma",
            ),
            entry(
                "Self-destruct Function",
                "Self-destructing a contract can lead to loss of funds and contract functionality.",
                Severity::High,
                "Avoid using self-destruct or restrict its access to authorized users.",
                "https://example.com/self-destruct",
            ),
            entry(
                "Unchecked External Call",
                "Failing to check the success of an external call can lead to unexpected behavior.",
                Severity::High,
                "Always check the return value of external calls.",
                "https://example.com/unchecked-external-call",
            ),
            entry(
                "Timestamp Dependence",
                "Using block timestamps for critical logic can be manipulated by miners.",
                Severity::Medium,
                "Avoid using timestamps for critical logic.",
                "https://example.com/timestamp-dependence",
            ),
            entry(
                "Block Number Dependence",
                "Using block numbers for critical logic can be manipulated by miners.",
                Severity::Medium,
                "Avoid using block numbers for critical logic.",
                "https://example.com/block-number-dependence",
            ),
            entry(
                "Unprotected Suicide",
                "Allows unauthorized users to destroy the contract.",
                Severity::Critical,
                "Restrict the suicide function to authorized users only.",
                "https://example.com/unprotected-suicide",
            ),
            entry(
                "Signature Malleability",
                "Allows signatures to be altered, potentially leading to unauthorized actions.",
                Severity::High,
                "Use EIP-2-compliant signatures to prevent malleability.",
                "https://example.com/signature-malleability",
            ),
            entry(
                "Delegatecall Injection",
                "Using delegatecall with user-controlled data can lead to code injection.",
                Severity::Critical,
                "Avoid using delegatecall with untrusted data.",
                "https://example.com/delegatecall-injection",
            ),
            entry(
                "tx.origin Authentication",
                "Using tx.origin for authentication can be exploited by malicious contracts.",
                Severity::High,
                "Use msg.sender for authentication instead of tx.origin.",
                "https://example.com/tx-origin-authentication",
            ),
            entry(
                "Short Address Attack",
                "Allows attackers to manipulate input data by providing shorter addresses.",
                Severity::Medium,
                "Validate the length of address inputs.",
                "https://example.com/short-address-attack",
            ),
            entry(
                "Default Visibility",
                "Functions with default visibility can be called by anyone.",
                Severity::High,
                "Specify the visibility of all functions explicitly.",
                "https://example.com/default-visibility",
            ),
            entry(
                "Unhandled Exceptions",
                "Failing to handle exceptions can lead to unintended behavior.",
                Severity::High,
                "Implement proper error handling for all operations.",
                "https://example.com/unhandled-exceptions",
            ),
            entry(
                "Gas Limit and Loops",
                "Using unbounded loops can exceed the gas limit, making functions unusable.",
                Severity::High,
                "Avoid unbounded loops and optimize gas usage.",
                "https://example.com/gas-limit-loops",
            ),
            entry(
                "Force Sending Ether to Contracts",
                "Contracts can be forced to accept ether, disrupting their logic.",
                Severity::Medium,
                "Implement a fallback function to handle unexpected ether.",
                "https://example.com/force-sending-ether",
            ),
        ];

        Self { records }
    }

    /// Records in catalog order.
    pub fn records(&self) -> &[VulnerabilityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by its exact name.
    pub fn get(&self, name: &str) -> Option<&VulnerabilityRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_has_twenty_records() {
        assert_eq!(Catalog::builtin().len(), 20);
    }

    #[test]
    fn record_names_are_unique() {
        let catalog = Catalog::builtin();
        let names: HashSet<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn every_record_has_a_reference() {
        for record in Catalog::builtin().records() {
            assert!(!record.references.is_empty(), "{} has no references", record.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        let catalog = Catalog::builtin();
        let reentrancy = catalog.get("Reentrancy").unwrap();
        assert_eq!(reentrancy.severity, Severity::Critical);
        assert!(catalog.get("Not A Pattern").is_none());
    }

    #[test]
    fn catalog_order_starts_with_reentrancy() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.records()[0].name, "Reentrancy");
        assert_eq!(catalog.records()[6].name, "Floating Pragma");
    }
}
