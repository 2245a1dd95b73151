pub mod error;
pub mod history;
pub mod preferences;

mod persist;

pub use error::StoreError;
pub use history::{HistoryStore, HISTORY_CAP};
pub use preferences::PreferenceStore;
