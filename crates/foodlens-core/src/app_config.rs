use std::path::PathBuf;

/// Production base URL of the analysis API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.whats-in-it.org";

/// Default bound on a product lookup, in seconds.
pub const DEFAULT_PRODUCT_TIMEOUT_SECS: u64 = 45;
/// Default bound on an analysis request, in seconds. Analysis generation is
/// slow, so this is deliberately looser than the lookup bound.
pub const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 90;

/// Application configuration. Every field has a default, so the application
/// runs with zero environment setup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote analysis API.
    pub api_base_url: String,
    /// Directory holding the persisted preference and history files.
    pub data_dir: PathBuf,
    pub log_level: String,
    pub product_timeout_secs: u64,
    pub analysis_timeout_secs: u64,
}

impl AppConfig {
    /// Path of the persisted preferences file.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join("preferences.json")
    }

    /// Path of the persisted scan-history file.
    #[must_use]
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join("history.json")
    }
}
