//! Pure scoring functions shared by every screening workflow.
//!
//! Each classifier is a deterministic function of its inputs and a threshold
//! table from [`ScoringConfig`]; nothing here performs I/O or holds state.

pub mod anthropometry;
pub mod behaviour;
pub mod config;
pub mod risk;
pub mod wage;

pub use anthropometry::{calculate_bmi, classify_bmi, classify_nutrition, NutritionAssessment, NutritionStatus};
pub use behaviour::{score_responses, score_scale, BehaviourBand, BehaviourResponses, BehaviourScores};
pub use config::{
    BehaviourScale, BmiBands, RiskPolicy, ScoringConfig, ServiceScoreBands, ThresholdError,
    WageRatioBands,
};
pub use risk::{aggregate_child_risk, birth_weight_category, nutrition_severity, BirthWeightCategory, ChildRiskProfile};
pub use wage::{categorize_wage, WageCategory};

/// Invalid-input rejection shared by the scoring functions.
///
/// Every variant is the caller's fault: retrying with the same input always
/// reproduces the same failure.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("height and weight must be positive and finite (got {height_cm} cm, {weight_kg} kg)")]
    InvalidMeasurement { height_cm: f64, weight_kg: f64 },
    #[error("computed BMI is not a finite number")]
    NonFiniteBmi,
    #[error("behaviour answer {value} is outside the 0..={max} scale")]
    ScaleExceeded { value: u8, max: u8 },
    #[error("household must have at least one member")]
    EmptyHousehold,
    #[error("monthly income must be non-negative and finite (got {0})")]
    InvalidIncome(f64),
    #[error("regional minimum wage must be positive and finite (got {0})")]
    InvalidMinimumWage(f64),
    #[error("birth weight must be positive and finite (got {0} kg)")]
    InvalidBirthWeight(f64),
}
