//! `prefs` command: show, set, or reset dietary preferences.

use anyhow::Result;
use clap::Subcommand;

use foodlens_core::{AppConfig, UserPreferences};
use foodlens_store::PreferenceStore;

#[derive(Debug, Subcommand)]
pub(crate) enum PrefsCommands {
    /// Print the stored preferences
    Show,
    /// Replace the stored preferences
    Set {
        /// Diet type, repeatable (e.g. --diet vegan). Defaults to "standard"
        #[arg(long = "diet")]
        diet: Vec<String>,

        /// Allergy, repeatable (e.g. --allergy Peanuts)
        #[arg(long = "allergy")]
        allergies: Vec<String>,

        /// Ingredient to avoid, repeatable
        #[arg(long = "avoid")]
        avoid: Vec<String>,

        /// Flag sugar as a health concern
        #[arg(long)]
        sugar: bool,

        /// Flag salt as a health concern
        #[arg(long)]
        salt: bool,

        /// Flag fat as a health concern
        #[arg(long)]
        fat: bool,
    },
    /// Restore the default preferences
    Reset,
}

pub(crate) fn run(config: &AppConfig, command: PrefsCommands) -> Result<()> {
    let mut store = PreferenceStore::open(config.preferences_path());

    match command {
        PrefsCommands::Show => {
            println!("{}", serde_json::to_string_pretty(store.get())?);
        }
        PrefsCommands::Set {
            diet,
            allergies,
            avoid,
            sugar,
            salt,
            fat,
        } => {
            store.set(build_preferences(diet, allergies, avoid, sugar, salt, fat))?;
            println!("Preferences saved.");
        }
        PrefsCommands::Reset => {
            store.reset()?;
            println!("Preferences reset to defaults.");
        }
    }

    Ok(())
}

fn build_preferences(
    diet: Vec<String>,
    allergies: Vec<String>,
    avoid: Vec<String>,
    sugar: bool,
    salt: bool,
    fat: bool,
) -> UserPreferences {
    UserPreferences {
        diet_type: if diet.is_empty() {
            vec!["standard".to_string()]
        } else {
            diet
        },
        allergies,
        avoid_ingredients: avoid,
        sugar_concern: sugar,
        salt_concern: salt,
        fat_concern: fat,
        ..UserPreferences::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_diet_defaults_to_standard() {
        let prefs = build_preferences(vec![], vec![], vec![], false, false, false);
        assert_eq!(prefs, UserPreferences::default());
    }

    #[test]
    fn flags_and_lists_are_carried_through() {
        let prefs = build_preferences(
            vec!["vegan".to_string()],
            vec!["Peanuts".to_string()],
            vec!["palm oil".to_string()],
            true,
            false,
            true,
        );
        assert_eq!(prefs.diet_type, vec!["vegan"]);
        assert_eq!(prefs.allergies, vec!["Peanuts"]);
        assert_eq!(prefs.avoid_ingredients, vec!["palm oil"]);
        assert!(prefs.sugar_concern);
        assert!(!prefs.salt_concern);
        assert!(prefs.fat_concern);
    }
}
