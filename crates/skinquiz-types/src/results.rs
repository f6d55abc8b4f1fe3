//! Derived recommendation results.
//!
//! `QuizResults` is produced once per completed quiz and replaced wholesale
//! on re-derivation. Field names follow the stored JSON layout
//! (`skinProfile`, `morningRoutine`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback skin type when the answer is absent.
pub const DEFAULT_SKIN_TYPE: &str = "normal";
/// Fallback primary concern when the answer is absent.
pub const DEFAULT_CONCERNS: &str = "general";
/// Fallback age range when the answer is absent.
pub const DEFAULT_AGE: &str = "25-34";
/// Fallback budget when the answer is absent.
pub const DEFAULT_BUDGET: &str = "medium";

/// Four-field projection of the answer set used to fill the templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinProfile {
    #[serde(rename = "type")]
    pub skin_type: String,
    pub concerns: String,
    pub age: String,
    pub budget: String,
}

impl Default for SkinProfile {
    fn default() -> Self {
        Self {
            skin_type: DEFAULT_SKIN_TYPE.to_string(),
            concerns: DEFAULT_CONCERNS.to_string(),
            age: DEFAULT_AGE.to_string(),
            budget: DEFAULT_BUDGET.to_string(),
        }
    }
}

/// One step of a morning or evening routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineStep {
    /// 1-based position within the routine.
    pub step: u32,
    pub product: String,
    pub description: String,
}

/// A recommended product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecommendation {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub reason: String,
    /// Display price range, e.g. `$12-15`.
    pub price: String,
}

/// The immutable recommendation bundle for a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResults {
    pub skin_profile: SkinProfile,
    pub morning_routine: Vec<RoutineStep>,
    pub evening_routine: Vec<RoutineStep>,
    pub product_recommendations: Vec<ProductRecommendation>,
    #[serde(with = "iso_millis")]
    pub generated_at: DateTime<Utc>,
}

impl QuizResults {
    /// Compare everything except `generated_at`.
    pub fn same_content(&self, other: &Self) -> bool {
        self.skin_profile == other.skin_profile
            && self.morning_routine == other.morning_routine
            && self.evening_routine == other.evening_routine
            && self.product_recommendations == other.product_recommendations
    }
}

/// ISO-8601 UTC timestamps with millisecond precision and a `Z` suffix
/// (`2025-03-01T09:30:00.123Z`). Any RFC 3339 offset is accepted on read.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(generated_at: DateTime<Utc>) -> QuizResults {
        QuizResults {
            skin_profile: SkinProfile::default(),
            morning_routine: vec![RoutineStep {
                step: 1,
                product: "Gentle Cleanser".to_string(),
                description: "Start your day with a pH-balanced cleanser".to_string(),
            }],
            evening_routine: Vec::new(),
            product_recommendations: vec![ProductRecommendation {
                name: "The Ordinary Vitamin C Suspension".to_string(),
                category: "Serum".to_string(),
                reason: "Budget-friendly antioxidant protection".to_string(),
                price: "$7-10".to_string(),
            }],
            generated_at,
        }
    }

    #[test]
    fn test_skin_profile_defaults() {
        let profile = SkinProfile::default();
        assert_eq!(profile.skin_type, "normal");
        assert_eq!(profile.concerns, "general");
        assert_eq!(profile.age, "25-34");
        assert_eq!(profile.budget, "medium");
    }

    #[test]
    fn test_results_json_layout() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let json = serde_json::to_value(sample(at)).unwrap();

        assert_eq!(json["skinProfile"]["type"], "normal");
        assert_eq!(json["morningRoutine"][0]["step"], 1);
        assert_eq!(json["productRecommendations"][0]["type"], "Serum");
        assert_eq!(json["productRecommendations"][0]["price"], "$7-10");
        assert_eq!(json["generatedAt"], "2025-03-01T09:30:00.000Z");
        assert!(json["eveningRoutine"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_generated_at_accepts_offset_timestamps() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let mut json = serde_json::to_value(sample(at)).unwrap();
        json["generatedAt"] = serde_json::json!("2025-03-01T10:30:00+01:00");

        let parsed: QuizResults = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.generated_at, at);
    }

    #[test]
    fn test_same_content_ignores_timestamp() {
        let a = sample(Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());
        let b = sample(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        assert_ne!(a, b);
        assert!(a.same_content(&b));
    }
}
