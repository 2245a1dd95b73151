//! Product record as returned by the lookup API.
//!
//! Field names match the wire contract of `GET /api/v1/product/{barcode}`.
//! A product is immutable once fetched; a new lookup replaces it wholesale.

use serde::{Deserialize, Serialize};

/// A food product looked up by barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub barcode: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients_text: String,
    #[serde(default)]
    pub ingredients_list: Vec<String>,
    #[serde(default)]
    pub nutrition_facts: NutritionFacts,
}

/// Nutrition facts per serving quantity. Every field is optional: the
/// upstream product database is sparsely populated and omits whatever it
/// does not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    #[serde(default)]
    pub per_quantity: Option<String>,
    #[serde(default)]
    pub energy_kj: Option<f64>,
    #[serde(default)]
    pub energy_kcal: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub saturated_fat: Option<f64>,
    #[serde(default)]
    pub carbohydrates: Option<f64>,
    #[serde(default)]
    pub sugars: Option<f64>,
    #[serde(default)]
    pub fiber: Option<f64>,
    #[serde(default)]
    pub proteins: Option<f64>,
    #[serde(default)]
    pub salt: Option<f64>,
    #[serde(default)]
    pub sodium: Option<f64>,
}
