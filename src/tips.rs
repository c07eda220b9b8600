// 💡 Health Tips - Static advice tables keyed by category
// Normal BMI has no table; the other two carry six fixed tips each, in display order

use crate::bmi::BmiCategory;

pub const UNDERWEIGHT_TIPS: [&str; 6] = [
    "Eat more frequently throughout the day",
    "Include protein-rich foods in every meal",
    "Add healthy fats like nuts, avocados, and olive oil",
    "Drink calories through smoothies and protein shakes",
    "Get adequate sleep (7-9 hours)",
    "Perform strength training exercises",
];

pub const OVERWEIGHT_TIPS: [&str; 6] = [
    "Practice portion control",
    "Increase intake of fruits and vegetables",
    "Choose whole grains over refined grains",
    "Stay hydrated with water",
    "Exercise regularly (30 minutes daily)",
    "Get adequate sleep to regulate hormones",
];

/// Heading shown above the tip list
pub const RECOMMENDATIONS_TITLE: &str = "Recommendations to Achieve Normal BMI";

/// Tips for a category, empty for normal
pub fn tips_for(category: BmiCategory) -> &'static [&'static str] {
    match category {
        BmiCategory::Underweight => &UNDERWEIGHT_TIPS,
        BmiCategory::Normal => &[],
        BmiCategory::Overweight => &OVERWEIGHT_TIPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(tips_for(BmiCategory::Underweight).len(), 6);
        assert_eq!(tips_for(BmiCategory::Overweight).len(), 6);
        assert!(tips_for(BmiCategory::Normal).is_empty());
    }

    #[test]
    fn test_table_order() {
        assert_eq!(
            tips_for(BmiCategory::Underweight),
            [
                "Eat more frequently throughout the day",
                "Include protein-rich foods in every meal",
                "Add healthy fats like nuts, avocados, and olive oil",
                "Drink calories through smoothies and protein shakes",
                "Get adequate sleep (7-9 hours)",
                "Perform strength training exercises",
            ]
        );

        assert_eq!(
            tips_for(BmiCategory::Overweight),
            [
                "Practice portion control",
                "Increase intake of fruits and vegetables",
                "Choose whole grains over refined grains",
                "Stay hydrated with water",
                "Exercise regularly (30 minutes daily)",
                "Get adequate sleep to regulate hormones",
            ]
        );
    }

    #[test]
    fn test_lookup_is_stable() {
        assert_eq!(
            tips_for(BmiCategory::Overweight),
            tips_for(BmiCategory::Overweight)
        );
        assert_ne!(
            tips_for(BmiCategory::Overweight),
            tips_for(BmiCategory::Underweight)
        );
    }
}
