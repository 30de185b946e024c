//! Core data types for vulnerability records and scan results.
//!
//! - [`VulnerabilityRecord`] - A known vulnerability pattern
//! - [`Severity`] - Severity level of a pattern
//! - [`ScanReport`] - Matches found in one piece of source text
//!
//! # Example
//!
//! ```
//! use contractscan::model::{ScanReport, Severity};
//!
//! let report = ScanReport::new(vec![]);
//! assert!(report.vulnerabilities.is_empty());
//! assert_eq!(Severity::Critical.as_str(), "Critical");
//! ```

mod vulnerability;

pub use vulnerability::*;
