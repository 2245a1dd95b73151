//! Scan-session orchestration.
//!
//! Coordinates the two-phase flow: load a product by barcode, then request
//! an analysis for it. Each phase runs its own [`Phase`] machine; analysis
//! depends on a loaded product but is otherwise decoupled from the lookup.
//! Every successful step is mirrored into the capped history store.
//!
//! All failures are normalized to a display string and recorded in the
//! failing phase's error state; nothing here is fatal, and retry is always
//! an explicit re-invocation.

use foodlens_api::FoodApiClient;
use foodlens_core::barcode::{normalize_barcode, validate_barcode};
use foodlens_core::{AnalysisResult, AppConfig, Product, UserPreferences};
use foodlens_store::{HistoryStore, PreferenceStore};

/// Lifecycle of one asynchronous phase (product load or analysis).
///
/// `Idle → Loading → {Success | Error}`; `Error` transitions back to
/// `Loading` on retry. Loading a new barcode resets both phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Orchestrates product lookup and analysis over dependency-injected
/// collaborators. Preferences are a read-only input here; only the settings
/// flow mutates them.
pub struct ScanSession {
    client: FoodApiClient,
    preferences: PreferenceStore,
    history: HistoryStore,

    product: Option<Product>,
    analysis: Option<AnalysisResult>,
    product_phase: Phase,
    analysis_phase: Phase,
    error_message: Option<String>,

    /// Bumped on every new load and on reset. A completion whose generation
    /// no longer matches belongs to a superseded barcode and is discarded
    /// instead of overwriting newer state.
    generation: u64,
}

impl ScanSession {
    #[must_use]
    pub fn new(client: FoodApiClient, preferences: PreferenceStore, history: HistoryStore) -> Self {
        Self {
            client,
            preferences,
            history,
            product: None,
            analysis: None,
            product_phase: Phase::Idle,
            analysis_phase: Phase::Idle,
            error_message: None,
            generation: 0,
        }
    }

    /// Builds a session with client and stores derived from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`foodlens_api::ApiError`] if the HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, foodlens_api::ApiError> {
        let client = FoodApiClient::new(config)?;
        let preferences = PreferenceStore::open(config.preferences_path());
        let history = HistoryStore::open(config.history_path());
        Ok(Self::new(client, preferences, history))
    }

    /// Loads a product by barcode. Returns `true` on success (callers use
    /// this to decide whether to proceed to analysis or navigation).
    ///
    /// Validates the barcode before any network call; invalid input fails
    /// fast with a validation message and never reaches the network. Valid
    /// input clears any prior product, analysis, and error, resets both
    /// phases, and supersedes in-flight requests.
    pub async fn load_product(&mut self, barcode: &str) -> bool {
        if !validate_barcode(barcode) {
            self.error_message = Some("Please enter a valid barcode (8-14 digits)".to_string());
            return false;
        }
        let cleaned = normalize_barcode(barcode);

        self.product = None;
        self.analysis = None;
        self.error_message = None;
        self.analysis_phase = Phase::Idle;
        self.product_phase = Phase::Loading;
        self.generation += 1;
        let generation = self.generation;

        let result = self.client.fetch_product(&cleaned).await;
        if generation != self.generation {
            tracing::debug!(barcode = %cleaned, "discarding product response for superseded load");
            return false;
        }

        match result {
            Ok(product) => {
                tracing::info!(barcode = %cleaned, name = %product.name, "product loaded");
                self.history.record(&cleaned, product.clone());
                self.product = Some(product);
                self.product_phase = Phase::Success;
                true
            }
            Err(e) => {
                tracing::warn!(barcode = %cleaned, error = %e, "product load failed");
                self.error_message = Some(e.user_message());
                self.product_phase = Phase::Error;
                false
            }
        }
    }

    /// Requests an analysis for the currently loaded product with the
    /// current preferences. Returns `true` on success.
    ///
    /// Guarded: with no product loaded this records an error message and
    /// returns `false` without a network call. While an analysis is already
    /// in flight, or once a result is present, the call is a no-op — the
    /// guard, not request cancellation, is what prevents duplicate requests.
    pub async fn analyze(&mut self) -> bool {
        let Some(product) = self.product.clone() else {
            self.error_message = Some("No product loaded for analysis".to_string());
            return false;
        };
        if self.analysis.is_some() || self.analysis_phase == Phase::Loading {
            tracing::debug!(barcode = %product.barcode, "analysis already present or in flight");
            return false;
        }

        self.error_message = None;
        self.analysis_phase = Phase::Loading;
        let generation = self.generation;

        let result = self
            .client
            .fetch_analysis(&product, self.preferences.get())
            .await;
        if generation != self.generation {
            tracing::debug!(barcode = %product.barcode, "discarding analysis response for superseded load");
            return false;
        }

        match result {
            Ok(analysis) => {
                tracing::info!(
                    barcode = %product.barcode,
                    score = analysis.health_score,
                    "analysis complete"
                );
                self.history.attach_analysis(&product.barcode, analysis.clone());
                self.analysis = Some(analysis);
                self.analysis_phase = Phase::Success;
                true
            }
            Err(e) => {
                tracing::warn!(barcode = %product.barcode, error = %e, "analysis failed");
                self.error_message = Some(e.user_message());
                self.analysis_phase = Phase::Error;
                false
            }
        }
    }

    /// Convenience two-phase flow: load, then analyze if the load succeeded.
    pub async fn load_and_analyze(&mut self, barcode: &str) -> bool {
        if self.load_product(barcode).await {
            self.analyze().await
        } else {
            false
        }
    }

    /// Re-runs the product load for `barcode`, same rules as
    /// [`ScanSession::load_product`].
    pub async fn retry_product_load(&mut self, barcode: &str) -> bool {
        self.load_product(barcode).await
    }

    /// Re-runs the analysis, same guards as [`ScanSession::analyze`].
    pub async fn retry_analysis(&mut self) -> bool {
        self.analyze().await
    }

    /// Resets all transient state to idle. In-flight requests are not
    /// cancelled; their completions are discarded.
    pub fn clear_current(&mut self) {
        self.product = None;
        self.analysis = None;
        self.product_phase = Phase::Idle;
        self.analysis_phase = Phase::Idle;
        self.error_message = None;
        self.generation += 1;
    }

    /// True iff a product is loaded, no analysis is present yet, and no
    /// analysis is in flight. Consumers use this to auto-trigger analysis
    /// or offer a manual "analyze" action.
    #[must_use]
    pub fn can_analyze(&self) -> bool {
        self.product.is_some() && self.analysis.is_none() && self.analysis_phase != Phase::Loading
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    #[must_use]
    pub fn product_phase(&self) -> Phase {
        self.product_phase
    }

    #[must_use]
    pub fn analysis_phase(&self) -> Phase {
        self.analysis_phase
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Current preferences (read-only input to analysis).
    #[must_use]
    pub fn preferences(&self) -> &UserPreferences {
        self.preferences.get()
    }

    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session(dir: &std::path::Path) -> ScanSession {
        let client = FoodApiClient::with_base_url("http://127.0.0.1:9", 1, 1)
            .expect("client construction should not fail");
        ScanSession::new(
            client,
            PreferenceStore::open(dir.join("preferences.json")),
            HistoryStore::open(dir.join("history.json")),
        )
    }

    fn sample_product() -> Product {
        Product {
            barcode: "12345678".to_string(),
            name: "Sample".to_string(),
            brand: String::new(),
            image_url: None,
            ingredients_text: String::new(),
            ingredients_list: Vec::new(),
            nutrition_facts: Default::default(),
        }
    }

    fn sample_analysis() -> AnalysisResult {
        AnalysisResult {
            health_score: 50,
            recommendation: foodlens_core::Recommendation::Recommended,
            recommendation_reason: String::new(),
            nutrition_components: Vec::new(),
            key_ingredients: Vec::new(),
            additives: Vec::new(),
            sources: None,
        }
    }

    #[test]
    fn can_analyze_requires_product() {
        let dir = tempfile::tempdir().unwrap();
        let session = test_session(dir.path());
        assert!(!session.can_analyze());
    }

    #[test]
    fn can_analyze_with_product_and_no_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = test_session(dir.path());
        session.product = Some(sample_product());
        assert!(session.can_analyze());
    }

    #[test]
    fn can_analyze_false_once_analysis_present() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = test_session(dir.path());
        session.product = Some(sample_product());
        session.analysis = Some(sample_analysis());
        assert!(!session.can_analyze());
    }

    #[test]
    fn can_analyze_false_while_analysis_loading() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = test_session(dir.path());
        session.product = Some(sample_product());
        session.analysis_phase = Phase::Loading;
        assert!(!session.can_analyze());
    }

    #[test]
    fn clear_current_resets_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = test_session(dir.path());
        session.product = Some(sample_product());
        session.analysis = Some(sample_analysis());
        session.product_phase = Phase::Success;
        session.analysis_phase = Phase::Error;
        session.error_message = Some("boom".to_string());

        session.clear_current();

        assert!(session.product().is_none());
        assert!(session.analysis().is_none());
        assert_eq!(session.product_phase(), Phase::Idle);
        assert_eq!(session.analysis_phase(), Phase::Idle);
        assert!(session.error_message().is_none());
    }
}
