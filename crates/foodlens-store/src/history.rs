//! Persisted scan-history store.
//!
//! Most-recent-first, capped, de-duplicated by barcode. Persistence is
//! best-effort: a failed write (e.g. storage quota) is logged and swallowed,
//! never blocking the in-memory update or surfacing to the user.

use std::path::PathBuf;

use foodlens_core::{AnalysisResult, Product, ScanHistoryItem};

use crate::persist;

/// Maximum number of retained history entries; the oldest is evicted on
/// overflow.
pub const HISTORY_CAP: usize = 50;

/// File-backed, capped store of past lookups.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    /// Most-recent-first. Never longer than [`HISTORY_CAP`].
    items: Vec<ScanHistoryItem>,
}

impl HistoryStore {
    /// Opens the store at `path`, loading persisted history once. A missing
    /// or corrupt file yields an empty history.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut items: Vec<ScanHistoryItem> = persist::read_json_or_default(&path);
        // Re-enforce the cap in case the file was written by an older build
        // or edited by hand.
        items.truncate(HISTORY_CAP);
        Self { path, items }
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn items(&self) -> &[ScanHistoryItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a successful lookup.
    ///
    /// A repeat scan of a known barcode moves that entry to the front with a
    /// fresh snapshot and timestamp instead of creating a duplicate; any
    /// previously attached analysis is dropped, since it described the
    /// superseded snapshot. On overflow the oldest entry is evicted.
    pub fn record(&mut self, barcode: &str, product: Product) {
        self.items.retain(|item| item.barcode != barcode);
        self.items.insert(0, ScanHistoryItem::new(barcode, product));
        self.items.truncate(HISTORY_CAP);
        self.save_best_effort();
    }

    /// Attaches an analysis snapshot to the entry for `barcode`, in place.
    /// No matching entry is a no-op (the entry may have been evicted).
    pub fn attach_analysis(&mut self, barcode: &str, analysis: AnalysisResult) {
        let Some(item) = self.items.iter_mut().find(|item| item.barcode == barcode) else {
            tracing::warn!(barcode, "no history entry to attach analysis to");
            return;
        };
        item.analysis = Some(analysis);
        self.save_best_effort();
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.items.clear();
        self.save_best_effort();
    }

    fn save_best_effort(&self) {
        if let Err(e) = persist::write_json(&self.path, &self.items) {
            tracing::warn!(path = %self.path.display(), error = %e, "history write failed, keeping in-memory state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodlens_core::Recommendation;

    fn product(barcode: &str, name: &str) -> Product {
        Product {
            barcode: barcode.to_string(),
            name: name.to_string(),
            brand: String::new(),
            image_url: None,
            ingredients_text: String::new(),
            ingredients_list: Vec::new(),
            nutrition_facts: Default::default(),
        }
    }

    fn analysis(score: u8) -> AnalysisResult {
        AnalysisResult {
            health_score: score,
            recommendation: Recommendation::Recommended,
            recommendation_reason: "fine".to_string(),
            nutrition_components: Vec::new(),
            key_ingredients: Vec::new(),
            additives: Vec::new(),
            sources: None,
        }
    }

    fn open_temp() -> (tempfile::TempDir, HistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(dir.path().join("history.json"));
        (dir, store)
    }

    #[test]
    fn record_prepends_most_recent() {
        let (_dir, mut store) = open_temp();
        store.record("11111111", product("11111111", "First"));
        store.record("22222222", product("22222222", "Second"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].barcode, "22222222");
        assert_eq!(store.items()[1].barcode, "11111111");
    }

    #[test]
    fn cap_evicts_oldest() {
        let (_dir, mut store) = open_temp();
        for i in 0..(HISTORY_CAP + 1) {
            let barcode = format!("{:08}", i + 10_000_000);
            store.record(&barcode, product(&barcode, "Item"));
        }

        assert_eq!(store.len(), HISTORY_CAP);
        // The very first barcode was evicted; the newest is at the front.
        assert_eq!(store.items()[0].barcode, format!("{:08}", HISTORY_CAP + 10_000_000));
        assert!(store.items().iter().all(|i| i.barcode != "10000000"));
    }

    #[test]
    fn rescan_moves_entry_to_front_without_growing() {
        let (_dir, mut store) = open_temp();
        store.record("11111111", product("11111111", "First"));
        store.record("22222222", product("22222222", "Second"));
        store.record("11111111", product("11111111", "First (fresh)"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].barcode, "11111111");
        assert_eq!(store.items()[0].product.name, "First (fresh)");
    }

    #[test]
    fn rescan_drops_stale_analysis() {
        let (_dir, mut store) = open_temp();
        store.record("11111111", product("11111111", "First"));
        store.attach_analysis("11111111", analysis(70));
        assert!(store.items()[0].analysis.is_some());

        store.record("11111111", product("11111111", "First again"));
        assert!(store.items()[0].analysis.is_none());
    }

    #[test]
    fn attach_analysis_updates_in_place() {
        let (_dir, mut store) = open_temp();
        store.record("11111111", product("11111111", "First"));
        store.record("22222222", product("22222222", "Second"));
        store.attach_analysis("11111111", analysis(55));

        assert_eq!(store.len(), 2);
        let item = store.items().iter().find(|i| i.barcode == "11111111").unwrap();
        assert_eq!(item.analysis.as_ref().unwrap().health_score, 55);
    }

    #[test]
    fn attach_analysis_for_unknown_barcode_is_noop() {
        let (_dir, mut store) = open_temp();
        store.record("11111111", product("11111111", "First"));
        store.attach_analysis("99999999", analysis(10));

        assert_eq!(store.len(), 1);
        assert!(store.items()[0].analysis.is_none());
    }

    #[test]
    fn history_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::open(&path);
        store.record("11111111", product("11111111", "First"));
        store.attach_analysis("11111111", analysis(88));

        let reopened = HistoryStore::open(&path);
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.items()[0].product.name, "First");
        assert_eq!(reopened.items()[0].analysis.as_ref().unwrap().health_score, 88);
    }

    #[test]
    fn clear_empties_store_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::open(&path);
        store.record("11111111", product("11111111", "First"));
        store.clear();

        assert!(store.is_empty());
        assert!(HistoryStore::open(&path).is_empty());
    }

    #[test]
    fn corrupt_file_yields_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "[{\"broken\":").unwrap();

        assert!(HistoryStore::open(&path).is_empty());
    }

    #[test]
    fn unwritable_path_keeps_in_memory_state() {
        // Point at a path whose parent is a file, so directory creation fails.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let mut store = HistoryStore::open(blocker.join("history.json"));
        store.record("11111111", product("11111111", "First"));

        assert_eq!(store.len(), 1);
    }
}
