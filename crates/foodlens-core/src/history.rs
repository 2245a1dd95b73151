//! Scan history entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::AnalysisResult;
use crate::product::Product;

/// One past lookup: the product snapshot at scan time, plus the analysis
/// snapshot once one completes for that scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanHistoryItem {
    pub id: Uuid,
    pub barcode: String,
    pub product: Product,
    #[serde(default)]
    pub analysis: Option<AnalysisResult>,
    pub scanned_at: DateTime<Utc>,
}

impl ScanHistoryItem {
    /// Creates a fresh entry (new id, current timestamp, no analysis yet).
    #[must_use]
    pub fn new(barcode: impl Into<String>, product: Product) -> Self {
        Self {
            id: Uuid::new_v4(),
            barcode: barcode.into(),
            product,
            analysis: None,
            scanned_at: Utc::now(),
        }
    }
}
