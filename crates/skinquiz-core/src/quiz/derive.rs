//! Recommendation derivation.
//!
//! Maps an answer set to a [`QuizResults`] by filling fixed templates from
//! the skin profile. Total over any answer set: absent profile answers fall
//! back to the defaults in `skinquiz_types::results`. Only `skinType` and
//! `concerns` reach the template text; `age` and `budget` are carried in the
//! profile only. The remaining answers are not consulted.

use chrono::{DateTime, Utc};
use skinquiz_types::answer::{AGE, AnswerSet, BUDGET, CONCERNS, SKIN_TYPE};
use skinquiz_types::results::{
    DEFAULT_AGE, DEFAULT_BUDGET, DEFAULT_CONCERNS, DEFAULT_SKIN_TYPE, ProductRecommendation,
    QuizResults, RoutineStep, SkinProfile,
};

/// Derive results stamped with the current time.
///
/// Two calls with the same answers differ only in `generated_at`.
pub fn derive(answers: &AnswerSet) -> QuizResults {
    derive_at(answers, Utc::now())
}

/// Derive results with a caller-supplied generation timestamp.
pub fn derive_at(answers: &AnswerSet, generated_at: DateTime<Utc>) -> QuizResults {
    let skin_profile = skin_profile(answers);

    QuizResults {
        morning_routine: morning_routine(&skin_profile),
        evening_routine: evening_routine(&skin_profile),
        product_recommendations: product_recommendations(&skin_profile),
        skin_profile,
        generated_at,
    }
}

/// Project the four profile answers, applying defaults for absent ones.
pub fn skin_profile(answers: &AnswerSet) -> SkinProfile {
    let field = |id: &str, default: &str| answers.value_of(id).unwrap_or(default).to_string();

    SkinProfile {
        skin_type: field(SKIN_TYPE, DEFAULT_SKIN_TYPE),
        concerns: field(CONCERNS, DEFAULT_CONCERNS),
        age: field(AGE, DEFAULT_AGE),
        budget: field(BUDGET, DEFAULT_BUDGET),
    }
}

fn morning_routine(profile: &SkinProfile) -> Vec<RoutineStep> {
    numbered(vec![
        ("Gentle Cleanser", "Start your day with a pH-balanced cleanser".to_string()),
        ("Vitamin C Serum", "Antioxidant protection for daytime".to_string()),
        (
            "Moisturizer",
            format!("{} skin formula for all-day hydration", profile.skin_type),
        ),
        ("Sunscreen SPF 30+", "Essential UV protection".to_string()),
    ])
}

fn evening_routine(profile: &SkinProfile) -> Vec<RoutineStep> {
    numbered(vec![
        ("Double Cleanse", "Remove makeup and daily buildup".to_string()),
        (
            "Treatment Serum",
            format!("Targets {} for overnight repair", profile.concerns),
        ),
        ("Night Moisturizer", "Rich formula for overnight restoration".to_string()),
        ("Face Oil", "Optional: Extra nourishment for dry skin".to_string()),
    ])
}

fn product_recommendations(profile: &SkinProfile) -> Vec<ProductRecommendation> {
    let product = |name: &str, category: &str, reason: String, price: &str| ProductRecommendation {
        name: name.to_string(),
        category: category.to_string(),
        reason,
        price: price.to_string(),
    };

    vec![
        product(
            "CeraVe Hydrating Cleanser",
            "Cleanser",
            format!(
                "Perfect for {} skin with ceramides and hyaluronic acid",
                profile.skin_type
            ),
            "$12-15",
        ),
        product(
            "The Ordinary Vitamin C Suspension",
            "Serum",
            "Budget-friendly antioxidant protection".to_string(),
            "$7-10",
        ),
        product(
            "Neutrogena Hydrating Foaming Cleanser",
            "Moisturizer",
            format!("Lightweight yet hydrating formula for {} skin", profile.skin_type),
            "$8-12",
        ),
    ]
}

/// Assign 1-based contiguous ordinals in list order.
fn numbered(steps: Vec<(&str, String)>) -> Vec<RoutineStep> {
    steps
        .into_iter()
        .zip(1u32..)
        .map(|((product, description), step)| RoutineStep {
            step,
            product: product.to_string(),
            description,
        })
        .collect()
}
