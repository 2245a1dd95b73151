//! User dietary preferences.
//!
//! Mutated only by explicit save actions in the settings flow; read-only
//! input everywhere else. The persisted shape is this struct verbatim.

use serde::{Deserialize, Serialize};

/// Stored dietary preferences. Always fully populated after
/// initialization — loading code falls back to [`UserPreferences::default`]
/// rather than ever exposing a partial object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub diet_type: Vec<String>,
    pub allergies: Vec<String>,
    pub avoid_ingredients: Vec<String>,
    pub sugar_concern: bool,
    pub salt_concern: bool,
    pub fat_concern: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_loss: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_gain: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digestive_sensitivity: Option<bool>,
}

impl Default for UserPreferences {
    /// Standard diet, no allergies, no avoided ingredients, no concern flags.
    fn default() -> Self {
        Self {
            diet_type: vec!["standard".to_string()],
            allergies: Vec::new(),
            avoid_ingredients: Vec::new(),
            sugar_concern: false,
            salt_concern: false,
            fat_concern: false,
            weight_loss: None,
            muscle_gain: None,
            digestive_sensitivity: None,
        }
    }
}
