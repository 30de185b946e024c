//! Substring matching of source text against the catalog.
//!
//! Detection is intentionally naive: a record matches iff its `name`
//! occurs as a contiguous, case-sensitive substring of the text. No
//! normalization, tokenization, or word-boundary checks, so prose
//! mentioning a pattern name matches and spelled-out synonyms do not.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::model::VulnerabilityRecord;

/// Matches source text against an immutable catalog.
#[derive(Clone)]
pub struct Matcher {
    catalog: Arc<Catalog>,
}

impl Matcher {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the catalog entries whose names occur in `text`, in
    /// catalog order. Empty input yields an empty result.
    pub fn scan(&self, text: &str) -> Vec<VulnerabilityRecord> {
        self.catalog
            .records()
            .iter()
            .filter(|record| text.contains(record.name.as_str()))
            .cloned()
            .collect()
    }
}
