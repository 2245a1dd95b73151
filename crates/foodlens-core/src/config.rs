use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::{
    AppConfig, DEFAULT_ANALYSIS_TIMEOUT_SECS, DEFAULT_API_BASE_URL, DEFAULT_PRODUCT_TIMEOUT_SECS,
};

/// Errors from reading or parsing configuration env vars.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process. Unlike [`load_app_config`], this does NOT load `.env` files —
/// useful for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let api_base_url = or_default("FOODLENS_API_BASE_URL", DEFAULT_API_BASE_URL);
    let data_dir = PathBuf::from(or_default("FOODLENS_DATA_DIR", ".foodlens"));
    let log_level = or_default("FOODLENS_LOG_LEVEL", "info");
    let product_timeout_secs =
        parse_u64("FOODLENS_PRODUCT_TIMEOUT_SECS", DEFAULT_PRODUCT_TIMEOUT_SECS)?;
    let analysis_timeout_secs = parse_u64(
        "FOODLENS_ANALYSIS_TIMEOUT_SECS",
        DEFAULT_ANALYSIS_TIMEOUT_SECS,
    )?;

    Ok(AppConfig {
        api_base_url,
        data_dir,
        log_level,
        product_timeout_secs,
        analysis_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.data_dir, PathBuf::from(".foodlens"));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.product_timeout_secs, 45);
        assert_eq!(cfg.analysis_timeout_secs, 90);
    }

    #[test]
    fn base_url_override_is_respected() {
        let mut map = HashMap::new();
        map.insert("FOODLENS_API_BASE_URL", "http://localhost:8000");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn timeout_overrides_are_parsed() {
        let mut map = HashMap::new();
        map.insert("FOODLENS_PRODUCT_TIMEOUT_SECS", "5");
        map.insert("FOODLENS_ANALYSIS_TIMEOUT_SECS", "10");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.product_timeout_secs, 5);
        assert_eq!(cfg.analysis_timeout_secs, 10);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = HashMap::new();
        map.insert("FOODLENS_PRODUCT_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FOODLENS_PRODUCT_TIMEOUT_SECS"),
            "expected InvalidEnvVar, got: {result:?}"
        );
    }

    #[test]
    fn store_paths_derive_from_data_dir() {
        let mut map = HashMap::new();
        map.insert("FOODLENS_DATA_DIR", "/tmp/fl");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.preferences_path(), PathBuf::from("/tmp/fl/preferences.json"));
        assert_eq!(cfg.history_path(), PathBuf::from("/tmp/fl/history.json"));
    }
}
