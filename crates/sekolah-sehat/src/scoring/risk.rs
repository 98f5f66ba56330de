use serde::{Deserialize, Serialize};

use super::anthropometry::NutritionStatus;
use super::behaviour::{score_responses, BehaviourResponses, BehaviourScores};
use super::config::ScoringConfig;
use super::ScoringError;

/// Birth-weight band recorded during enrolment screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthWeightCategory {
    /// Above 4 kg at birth.
    Macrosomia,
    /// At or below 4 kg at birth.
    Typical,
}

impl BirthWeightCategory {
    pub const fn score(self) -> u8 {
        match self {
            Self::Macrosomia => 1,
            Self::Typical => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Macrosomia => "Berat lahir lebih dari 4 kg",
            Self::Typical => "Berat lahir normal",
        }
    }
}

pub fn birth_weight_category(birth_weight_kg: f64) -> Result<BirthWeightCategory, ScoringError> {
    if !birth_weight_kg.is_finite() || birth_weight_kg <= 0.0 {
        return Err(ScoringError::InvalidBirthWeight(birth_weight_kg));
    }
    if birth_weight_kg > 4.0 {
        Ok(BirthWeightCategory::Macrosomia)
    } else {
        Ok(BirthWeightCategory::Typical)
    }
}

/// Severity ordinal for a nutrition band, measured as distance from the
/// normal band: Normal 1, Thin/Overweight 2, SeverelyThin/Obese 3. Both
/// extremes of the BMI scale carry the same severity.
pub fn nutrition_severity(status: NutritionStatus) -> u8 {
    let normal = NutritionStatus::Normal.status_id() as i8;
    (status.status_id() as i8 - normal).unsigned_abs() + 1
}

/// Composite screening outcome for one child.
///
/// Every component score is reported for transparency, but only the
/// nutrition severity gates `at_risk`: birth weight and behaviour scores
/// never flip the flag on their own. That asymmetry is a domain policy
/// carried over from the screening programme, not an engineering default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildRiskProfile {
    pub birth_weight: BirthWeightCategory,
    pub behaviour: BehaviourScores,
    pub nutrition_status: NutritionStatus,
    pub nutrition_severity: u8,
    pub at_risk: bool,
}

pub fn aggregate_child_risk(
    config: &ScoringConfig,
    birth_weight_kg: f64,
    responses: &BehaviourResponses,
    nutrition_status: NutritionStatus,
) -> Result<ChildRiskProfile, ScoringError> {
    let birth_weight = birth_weight_category(birth_weight_kg)?;
    let behaviour = score_responses(&config.behaviour, responses)?;
    let severity = nutrition_severity(nutrition_status);

    Ok(ChildRiskProfile {
        birth_weight,
        behaviour,
        nutrition_status,
        nutrition_severity: severity,
        at_risk: severity >= config.risk.elevated_nutrition_severity,
    })
}
