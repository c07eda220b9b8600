// BMI Calculator - Core Library
// Exposes the calculator, classifier, tip tables and form state to the TUI and web server

pub mod bmi;
pub mod tips;
pub mod form;

// Web routes only exist when the server feature is on
#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use bmi::{
    BmiCategory, BmiResult,
    calculate_bmi, compute, parse_measurement, round1,
    UNDERWEIGHT_LIMIT, OVERWEIGHT_LIMIT,
};
pub use tips::{tips_for, UNDERWEIGHT_TIPS, OVERWEIGHT_TIPS, RECOMMENDATIONS_TITLE};
pub use form::{BmiForm, Field};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
