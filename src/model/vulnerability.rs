use serde::{Deserialize, Serialize};

/// Severity of a catalog entry.
///
/// Serialized as the literal strings `"Low"`, `"Medium"`, `"High"`,
/// `"Critical"` — the catalog's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A known vulnerability pattern.
///
/// `name` is the literal text the matcher looks for and is unique
/// across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityRecord {
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub remediation: String,
    pub references: Vec<String>,
}

/// Result of scanning one piece of source text: the matched catalog
/// entries, in catalog order. Doubles as the `/upload` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub vulnerabilities: Vec<VulnerabilityRecord>,
}

impl ScanReport {
    pub fn new(vulnerabilities: Vec<VulnerabilityRecord>) -> Self {
        Self { vulnerabilities }
    }
}
