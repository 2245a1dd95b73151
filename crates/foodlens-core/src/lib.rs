pub mod analysis;
pub mod app_config;
pub mod barcode;
pub mod config;
pub mod history;
pub mod preferences;
pub mod product;

pub use analysis::{
    Additive, AnalysisResult, Citation, HealthRating, KeyIngredient, NutritionComponent,
    Recommendation, SafetyLevel,
};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use history::ScanHistoryItem;
pub use preferences::UserPreferences;
pub use product::{NutritionFacts, Product};
