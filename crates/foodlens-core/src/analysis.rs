//! Analysis result types as returned by `POST /api/v1/analyze-comprehensive`.
//!
//! The analysis service is an opaque remote collaborator; these types only
//! model its response shape. An analysis is produced once per
//! product + preferences combination and kept in transient session state.

use serde::{Deserialize, Serialize};

/// Complete health analysis for a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall healthfulness, 0 (worst) to 100 (best).
    pub health_score: u8,
    pub recommendation: Recommendation,
    pub recommendation_reason: String,
    #[serde(default)]
    pub nutrition_components: Vec<NutritionComponent>,
    #[serde(default)]
    pub key_ingredients: Vec<KeyIngredient>,
    #[serde(default)]
    pub additives: Vec<Additive>,
    #[serde(default)]
    pub sources: Option<Vec<Citation>>,
}

/// Binary verdict attached to an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "recommended")]
    Recommended,
    #[serde(rename = "not recommended")]
    NotRecommended,
}

/// One nutrient callout (e.g. "Sugars: 27g") with a rating and rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionComponent {
    pub name: String,
    pub value: String,
    pub health_rating: HealthRating,
    pub reason: String,
}

/// Per-component rating used for nutrition callouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthRating {
    Healthy,
    Moderate,
    Unhealthy,
}

/// A notable ingredient and its health impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyIngredient {
    pub name: String,
    pub description: String,
    pub health_impact: String,
}

/// A food additive (E-number) with its safety classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Additive {
    pub code: String,
    pub name: String,
    pub safety_level: SafetyLevel,
    pub description: String,
    pub potential_effects: String,
}

/// Ordinal additive safety classification. Wire strings are capitalized
/// (`"Safe"`, `"Caution"`, ...), matching the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SafetyLevel {
    Safe,
    Caution,
    Controversial,
    Avoid,
}

/// A citation backing the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}
