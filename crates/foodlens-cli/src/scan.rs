//! `scan` command: load a product, then auto-analyze when allowed.

use anyhow::Result;

use foodlens_core::AppConfig;
use foodlens_session::ScanSession;

use crate::render;

pub(crate) async fn run(config: &AppConfig, barcode: &str, no_analyze: bool) -> Result<()> {
    let mut session = ScanSession::from_config(config)?;

    if !session.load_product(barcode).await {
        anyhow::bail!(
            "{}",
            session
                .error_message()
                .unwrap_or("Product load failed. Please try again.")
        );
    }
    if let Some(product) = session.product() {
        render::product(product);
    }

    if no_analyze || !session.can_analyze() {
        return Ok(());
    }

    println!("\nAnalyzing (this can take a minute)...");
    if !session.analyze().await {
        anyhow::bail!(
            "{}",
            session
                .error_message()
                .unwrap_or("Analysis failed. Please try again.")
        );
    }
    if let Some(analysis) = session.analysis() {
        render::analysis(analysis);
    }

    Ok(())
}
