// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

use std::path::PathBuf;
use std::sync::Arc;

use crate::ledger::LedgerStore;
use crate::matcher::Matcher;

/// Shared state for the upload service.
///
/// Everything here is immutable after startup; concurrent uploads share
/// only the read-only catalog behind the matcher.
pub struct AppState {
    pub matcher: Matcher,
    pub ledger: Arc<dyn LedgerStore>,
    /// Directory where uploads are staged before scanning.
    pub upload_dir: PathBuf,
    /// Ledger collection that scan matches are appended to.
    pub collection: String,
}

impl AppState {
    pub fn new(
        matcher: Matcher,
        ledger: Arc<dyn LedgerStore>,
        upload_dir: PathBuf,
        collection: String,
    ) -> Self {
        Self {
            matcher,
            ledger,
            upload_dir,
            collection,
        }
    }
}
