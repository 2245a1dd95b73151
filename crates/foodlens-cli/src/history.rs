//! `history` command: list or clear past scans.

use anyhow::Result;

use foodlens_core::AppConfig;
use foodlens_store::HistoryStore;

pub(crate) fn run(config: &AppConfig, clear: bool) -> Result<()> {
    let mut store = HistoryStore::open(config.history_path());

    if clear {
        store.clear();
        println!("Scan history cleared.");
        return Ok(());
    }

    if store.is_empty() {
        println!("No scans yet.");
        return Ok(());
    }

    for item in store.items() {
        let score = item
            .analysis
            .as_ref()
            .map_or_else(String::new, |a| format!("  score {}", a.health_score));
        println!(
            "{}  {:<14}  {}{}",
            item.scanned_at.format("%Y-%m-%d %H:%M"),
            item.barcode,
            item.product.name,
            score
        );
    }

    Ok(())
}
