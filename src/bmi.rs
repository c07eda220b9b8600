// ⚖️ BMI Calculator - Measurement parsing, formula, classification
// weight (kg) / height (m)² rounded to one decimal, then bucketed into a category

use serde::Serialize;
use std::fmt;

/// Lower bound of the normal range (inclusive)
pub const UNDERWEIGHT_LIMIT: f64 = 18.5;

/// Upper bound of the normal range (exclusive). 24.9 itself is overweight.
pub const OVERWEIGHT_LIMIT: f64 = 24.9;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
}

impl BmiCategory {
    /// Classify a BMI value. Total over every f64: anything that is neither
    /// below 18.5 nor inside [18.5, 24.9) is overweight, NaN and ∞ included.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_LIMIT {
            BmiCategory::Underweight
        } else if bmi >= UNDERWEIGHT_LIMIT && bmi < OVERWEIGHT_LIMIT {
            BmiCategory::Normal
        } else {
            BmiCategory::Overweight
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
        }
    }

    /// Capitalized form used in headings
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "underweight" => Some(BmiCategory::Underweight),
            "normal" => Some(BmiCategory::Normal),
            "overweight" => Some(BmiCategory::Overweight),
            _ => None,
        }
    }

    /// Only non-normal categories come with recommendations
    pub fn needs_recommendations(&self) -> bool {
        *self != BmiCategory::Normal
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RESULT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    /// Commit a BMI value and derive its category in the same step
    pub fn new(value: f64) -> Self {
        BmiResult {
            value,
            category: BmiCategory::from_bmi(value),
        }
    }

    /// Value formatted with one decimal place ("22.9", "inf", "NaN")
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.value)
    }
}

// ============================================================================
// CALCULATOR
// ============================================================================

/// Above this magnitude f64 spacing exceeds 0.1, so there is no tenth left to round
const ROUND1_LIMIT: f64 = 1e15;

/// Round to one decimal place, half away from zero
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUND1_LIMIT {
        return value;
    }
    (value * 10.0).round() / 10.0
}

/// weight_kg / (height_cm / 100)², rounded to one decimal.
/// No bounds checks: zero height gives a non-finite value.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round1(weight_kg / (height_m * height_m))
}

/// Parse one raw input field. Empty, garbage, and textual inf/NaN are all None.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Full pipeline from raw text. None means "leave the previous result alone".
pub fn compute(weight: &str, height: &str) -> Option<BmiResult> {
    let weight_kg = parse_measurement(weight)?;
    let height_cm = parse_measurement(height)?;

    Some(BmiResult::new(calculate_bmi(weight_kg, height_cm)))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_matches_rounded_ratio() {
        let cases = [(70.0, 175.0), (45.0, 170.0), (95.0, 170.0), (82.3, 181.4)];

        for (w, h) in cases {
            let expected = ((w / ((h / 100.0) * (h / 100.0))) * 10.0_f64).round() / 10.0;
            assert_eq!(calculate_bmi(w, h), expected);
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(calculate_bmi(70.0, 175.0), 22.9);
        assert_eq!(calculate_bmi(45.0, 170.0), 15.6);
        assert_eq!(calculate_bmi(95.0, 170.0), 32.9);
    }

    #[test]
    fn test_round1_half_away_from_zero() {
        assert_eq!(round1(22.25), 22.3);
        assert_eq!(round1(-22.25), -22.3);
        assert_eq!(round1(18.44), 18.4);
    }

    #[test]
    fn test_round1_huge_values_stay_finite() {
        assert_eq!(round1(1e308), 1e308);
        assert_eq!(round1(-1e308), -1e308);
        assert!(round1(f64::INFINITY).is_infinite());
        assert!(round1(f64::NAN).is_nan());

        let raw: f64 = 1e304 / ((1.0 / 100.0) * (1.0 / 100.0));
        assert!(raw.is_finite());
        let result = compute("1e304", "1").unwrap();
        assert!(result.value.is_finite());
        assert_eq!(result.value, raw);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_classifier_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.8), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(-3.0), BmiCategory::Underweight);
    }

    #[test]
    fn test_classifier_non_finite() {
        assert_eq!(BmiCategory::from_bmi(f64::INFINITY), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(f64::NAN), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(f64::NEG_INFINITY), BmiCategory::Underweight);
    }

    #[test]
    fn test_parse_measurement() {
        assert_eq!(parse_measurement("70"), Some(70.0));
        assert_eq!(parse_measurement("  72.5 "), Some(72.5));
        assert_eq!(parse_measurement("-4"), Some(-4.0));
        assert_eq!(parse_measurement(""), None);
        assert_eq!(parse_measurement("   "), None);
        assert_eq!(parse_measurement("abc"), None);
        assert_eq!(parse_measurement("inf"), None);
        assert_eq!(parse_measurement("NaN"), None);
    }

    #[test]
    fn test_compute_skips_missing_input() {
        assert!(compute("", "170").is_none());
        assert!(compute("70", "").is_none());
        assert!(compute("seventy", "170").is_none());
    }

    #[test]
    fn test_compute_zero_height() {
        let result = compute("60", "0").unwrap();
        assert!(!result.value.is_finite());
        assert_eq!(result.category, BmiCategory::Overweight);
        assert_eq!(result.display_value(), "inf");
    }

    #[test]
    fn test_compute_is_idempotent() {
        assert_eq!(compute("70", "175"), compute("70", "175"));
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!(BmiCategory::parse("Overweight"), Some(BmiCategory::Overweight));
        assert_eq!(BmiCategory::parse("obese"), None);
        assert_eq!(BmiCategory::Normal.to_string(), "normal");
        assert!(!BmiCategory::Normal.needs_recommendations());
        assert!(BmiCategory::Underweight.needs_recommendations());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BmiCategory::Underweight).unwrap(), "\"underweight\"");
        let json = serde_json::to_value(BmiResult::new(22.9)).unwrap();
        assert_eq!(json["category"], "normal");
    }

    #[test]
    fn test_display_value_one_decimal() {
        assert_eq!(BmiResult::new(23.0).display_value(), "23.0");
        assert_eq!(BmiResult::new(22.9).display_value(), "22.9");
    }
}
