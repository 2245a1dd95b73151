//! Wire types for the analysis API.
//!
//! The request side renames the store's preference field names to the wire
//! contract (`sugar_concern` becomes `health_concerns.sugar`, and so on).
//! The response side reuses the domain types from `foodlens-core` directly,
//! since their serde shapes match the wire contract.

use serde::{Deserialize, Serialize};

use foodlens_core::{Product, UserPreferences};

/// Body of `POST /api/v1/analyze-comprehensive`.
#[derive(Debug, Serialize)]
pub struct AnalysisRequest<'a> {
    pub product: &'a Product,
    pub user_preferences: PreferencesPayload,
}

/// Preferences as the analysis endpoint expects them.
#[derive(Debug, Serialize)]
pub struct PreferencesPayload {
    pub diet_type: Vec<String>,
    pub allergies: Vec<String>,
    pub avoid_ingredients: Vec<String>,
    pub health_concerns: HealthConcerns,
}

#[derive(Debug, Serialize)]
pub struct HealthConcerns {
    pub sugar: bool,
    pub salt: bool,
    pub fat: bool,
}

impl From<&UserPreferences> for PreferencesPayload {
    fn from(prefs: &UserPreferences) -> Self {
        Self {
            diet_type: prefs.diet_type.clone(),
            allergies: prefs.allergies.clone(),
            avoid_ingredients: prefs.avoid_ingredients.clone(),
            health_concerns: HealthConcerns {
                sugar: prefs.sugar_concern,
                salt: prefs.salt_concern,
                fat: prefs.fat_concern,
            },
        }
    }
}

/// Structured error body returned by the backend (FastAPI convention):
/// `{"detail": "..."}` for plain errors, `{"detail": [{"msg": ...}, ...]}`
/// for validation errors.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorDetail {
    Message(String),
    Items(Vec<ErrorDetailItem>),
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetailItem {
    pub msg: String,
}
