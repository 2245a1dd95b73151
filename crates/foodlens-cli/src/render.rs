//! Plain-text rendering of products and analysis results.

use foodlens_core::{
    AnalysisResult, HealthRating, NutritionFacts, Product, Recommendation, SafetyLevel,
};

pub(crate) fn product(product: &Product) {
    println!("{}", product.name);
    if !product.brand.is_empty() {
        println!("Brand: {}", product.brand);
    }
    println!("Barcode: {}", product.barcode);
    if !product.ingredients_text.is_empty() {
        println!("Ingredients: {}", product.ingredients_text);
    }
    nutrition(&product.nutrition_facts);
}

fn nutrition(facts: &NutritionFacts) {
    let rows: [(&str, Option<f64>, &str); 8] = [
        ("Energy", facts.energy_kcal, " kcal"),
        ("Fat", facts.fat, " g"),
        ("  of which saturated", facts.saturated_fat, " g"),
        ("Carbohydrates", facts.carbohydrates, " g"),
        ("  of which sugars", facts.sugars, " g"),
        ("Fiber", facts.fiber, " g"),
        ("Protein", facts.proteins, " g"),
        ("Salt", facts.salt, " g"),
    ];
    if rows.iter().all(|(_, v, _)| v.is_none()) {
        return;
    }

    let per = facts.per_quantity.as_deref().unwrap_or("100g");
    println!("\nNutrition (per {per}):");
    for (label, value, unit) in rows {
        if let Some(v) = value {
            println!("  {label}: {v}{unit}");
        }
    }
}

pub(crate) fn analysis(analysis: &AnalysisResult) {
    let verdict = match analysis.recommendation {
        Recommendation::Recommended => "Recommended",
        Recommendation::NotRecommended => "Not recommended",
    };
    println!("\nHealth score: {}/100 — {}", analysis.health_score, verdict);
    println!("{}", analysis.recommendation_reason);

    if !analysis.nutrition_components.is_empty() {
        println!("\nNutrition breakdown:");
        for c in &analysis.nutrition_components {
            println!("  [{}] {} ({}): {}", rating(c.health_rating), c.name, c.value, c.reason);
        }
    }

    if !analysis.key_ingredients.is_empty() {
        println!("\nKey ingredients:");
        for i in &analysis.key_ingredients {
            println!("  {} — {} {}", i.name, i.description, i.health_impact);
        }
    }

    if !analysis.additives.is_empty() {
        println!("\nAdditives:");
        for a in &analysis.additives {
            println!(
                "  {} {} [{}] — {} {}",
                a.code,
                a.name,
                safety(a.safety_level),
                a.description,
                a.potential_effects
            );
        }
    }

    if let Some(sources) = &analysis.sources {
        if !sources.is_empty() {
            println!("\nSources:");
            for s in sources {
                match &s.url {
                    Some(url) => println!("  {} <{}>", s.title, url),
                    None => println!("  {}", s.title),
                }
            }
        }
    }
}

fn rating(rating: HealthRating) -> &'static str {
    match rating {
        HealthRating::Healthy => "healthy",
        HealthRating::Moderate => "moderate",
        HealthRating::Unhealthy => "unhealthy",
    }
}

fn safety(level: SafetyLevel) -> &'static str {
    match level {
        SafetyLevel::Safe => "Safe",
        SafetyLevel::Caution => "Caution",
        SafetyLevel::Controversial => "Controversial",
        SafetyLevel::Avoid => "Avoid",
    }
}
