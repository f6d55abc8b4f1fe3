//! The fixed question catalog.
//!
//! Questions appear in display order. Completion is measured against the
//! length of this list, so adding or removing a question changes what
//! "all questions answered" means.

use std::sync::LazyLock;

use skinquiz_types::answer::AnswerSet;
use skinquiz_types::question::{Question, QuizOption};

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(build_questions);

/// All questions in display order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Number of questions a complete answer set must cover.
pub fn question_count() -> usize {
    QUESTIONS.len()
}

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Share of answered questions, 0.0 to 100.0 for well-formed answer sets.
///
/// Counts keys, not known ids, so an answer set carrying unknown ids can
/// exceed 100.
pub fn progress_percent(answers: &AnswerSet) -> f64 {
    answers.len() as f64 / question_count() as f64 * 100.0
}

fn question(id: &str, prompt: &str, subtitle: Option<&str>, options: Vec<QuizOption>) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        subtitle: subtitle.map(str::to_string),
        options,
    }
}

fn opt(value: &str, label: &str, description: &str) -> QuizOption {
    QuizOption::new(value, label).with_description(description)
}

fn build_questions() -> Vec<Question> {
    vec![
        question(
            "skinType",
            "What is your skin type?",
            Some("Think about how your skin feels naturally without products"),
            vec![
                opt("oily", "Oily", "Shiny, large pores, prone to breakouts"),
                opt("dry", "Dry", "Tight, flaky, rough texture"),
                opt("combination", "Combination", "Oily T-zone, dry cheeks"),
                opt("sensitive", "Sensitive", "Easily irritated, reactive to products"),
                opt("normal", "Normal", "Balanced, not too oily or dry"),
            ],
        ),
        question(
            "concerns",
            "What is your primary skin concern?",
            None,
            vec![
                opt("acne", "Acne & Breakouts", "Active breakouts, blackheads, whiteheads"),
                opt("aging", "Anti-Aging", "Fine lines, wrinkles, loss of firmness"),
                opt("hyperpigmentation", "Dark Spots", "Acne scars, sun spots, uneven tone"),
                opt("dryness", "Dryness & Dehydration", "Tight, flaky, lacking moisture"),
                opt("redness", "Redness & Sensitivity", "Irritation, rosacea, reactive skin"),
                opt("general", "General Maintenance", "Healthy skin maintenance"),
            ],
        ),
        question(
            "age",
            "What is your age range?",
            Some("This helps us recommend age-appropriate products"),
            vec![
                QuizOption::new("18-24", "18-24 years old"),
                QuizOption::new("25-34", "25-34 years old"),
                QuizOption::new("35-44", "35-44 years old"),
                QuizOption::new("45-54", "45-54 years old"),
                QuizOption::new("55+", "55+ years old"),
            ],
        ),
        question(
            "currentRoutine",
            "How would you describe your current skincare routine?",
            None,
            vec![
                opt("minimal", "Minimal", "Just cleanser or soap and water"),
                opt("basic", "Basic", "Cleanser, moisturizer, occasional sunscreen"),
                opt("moderate", "Moderate", "Morning and evening routine with 3-5 products"),
                opt("extensive", "Extensive", "6+ products, multiple serums and treatments"),
            ],
        ),
        question(
            "lifestyle",
            "Which best describes your lifestyle?",
            Some("This affects your skin and time available for skincare"),
            vec![
                opt("low-stress", "Low Stress", "Regular sleep, low stress levels"),
                opt("moderate-stress", "Moderate Stress", "Some stress, occasional late nights"),
                opt("high-stress", "High Stress", "Very busy, irregular sleep, high stress"),
                opt("very-active", "Very Active", "Exercise frequently, sweat a lot"),
            ],
        ),
        question(
            "budget",
            "What is your budget for skincare products?",
            Some("Monthly budget for all skincare products"),
            vec![
                opt("low", "Under $50/month", "Budget-friendly drugstore options"),
                opt("medium", "$50-150/month", "Mix of drugstore and mid-range brands"),
                opt("high", "$150-300/month", "Premium and professional brands"),
                opt("luxury", "$300+/month", "High-end and luxury skincare"),
            ],
        ),
        question(
            "sunExposure",
            "How much sun exposure do you get daily?",
            Some("Helps determine sunscreen needs"),
            vec![
                opt("minimal", "Minimal", "Mostly indoors, limited outdoor time"),
                opt("moderate", "Moderate", "Some outdoor activities, commuting"),
                opt("high", "High", "Outdoor job or frequent outdoor activities"),
            ],
        ),
        question(
            "timeAvailable",
            "How much time can you dedicate to skincare?",
            None,
            vec![
                opt("2-3-minutes", "2-3 minutes", "Quick morning and evening routine"),
                opt("5-10-minutes", "5-10 minutes", "Standard routine with multiple steps"),
                opt("10-15-minutes", "10-15+ minutes", "Comprehensive routine with treatments"),
            ],
        ),
        question(
            "products",
            "Which products have worked well for you?",
            Some("Select ingredients or brands you've had success with"),
            vec![
                opt("retinoids", "Retinoids/Retinol", "Anti-aging and acne treatment"),
                opt("vitamin-c", "Vitamin C", "Brightening antioxidant"),
                opt("hyaluronic-acid", "Hyaluronic Acid", "Hydrating ingredient"),
                opt("niacinamide", "Niacinamide", "Pore-refining and oil control"),
                opt("natural", "Natural/Organic Products", "Plant-based, minimal ingredients"),
                opt("none", "None/Not Sure", "Haven't found what works yet"),
            ],
        ),
        question(
            "allergies",
            "Do you have any known skincare allergies or sensitivities?",
            None,
            vec![
                opt("fragrances", "Fragrances", "Perfumes and scented products"),
                opt("acids", "Alpha/Beta Hydroxy Acids", "AHA/BHA, glycolic acid, salicylic acid"),
                opt("retinoids", "Retinoids", "Retinol, tretinoin, retinyl palmitate"),
                opt("alcohol", "Alcohol/Drying Ingredients", "Denatured alcohol, sulfates"),
                opt("none", "None Known", "No known sensitivities"),
            ],
        ),
    ]
}
