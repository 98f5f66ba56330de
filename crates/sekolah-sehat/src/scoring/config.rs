use serde::{Deserialize, Serialize};

/// Threshold tables for every classifier in the scoring core.
///
/// The defaults encode the Indonesian Ministry of Health adult BMI table and
/// the UKS stratification cut points; deployments targeting a different
/// classification standard override them through `APP_SCORING_CONFIG`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub bmi: BmiBands,
    pub behaviour: BehaviourScale,
    pub wage: WageRatioBands,
    pub service_score: ServiceScoreBands,
    pub risk: RiskPolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            bmi: BmiBands::default(),
            behaviour: BehaviourScale::default(),
            wage: WageRatioBands::default(),
            service_score: ServiceScoreBands::default(),
            risk: RiskPolicy::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ThresholdError> {
        self.bmi.validate()?;
        self.behaviour.validate()?;
        self.wage.validate()?;
        self.service_score.validate()?;
        Ok(())
    }
}

/// BMI cut points separating the five nutrition bands.
///
/// Bounds alternate exclusive/inclusive so the bands partition the positive
/// reals: `< severely_thin_lt`, `< thin_lt`, `<= normal_le`,
/// `<= overweight_le`, and everything above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiBands {
    pub severely_thin_lt: f64,
    pub thin_lt: f64,
    pub normal_le: f64,
    pub overweight_le: f64,
}

impl Default for BmiBands {
    fn default() -> Self {
        Self {
            severely_thin_lt: 17.0,
            thin_lt: 18.5,
            normal_le: 25.0,
            overweight_le: 27.0,
        }
    }
}

impl BmiBands {
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let ordered = self.severely_thin_lt < self.thin_lt
            && self.thin_lt < self.normal_le
            && self.normal_le < self.overweight_le;
        if !ordered {
            return Err(ThresholdError::new("bmi", "cut points must ascend"));
        }
        if self.severely_thin_lt <= 0.0 || !self.overweight_le.is_finite() {
            return Err(ThresholdError::new("bmi", "cut points must be positive and finite"));
        }
        Ok(())
    }
}

/// Raw survey scale and the cut points mapping it to a three-band score.
///
/// One scale serves every behaviour field so the thresholds cannot drift
/// between call sites: raw `<= low_le` scores Low, `<= medium_le` Moderate,
/// anything above High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourScale {
    /// Largest raw answer a single survey field may carry.
    pub max_value: u8,
    pub low_le: u8,
    pub medium_le: u8,
}

impl Default for BehaviourScale {
    fn default() -> Self {
        Self {
            max_value: 4,
            low_le: 1,
            medium_le: 3,
        }
    }
}

impl BehaviourScale {
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if self.low_le >= self.medium_le {
            return Err(ThresholdError::new("behaviour", "cut points must ascend"));
        }
        if self.max_value == 0 {
            return Err(ThresholdError::new("behaviour", "scale maximum must be positive"));
        }
        Ok(())
    }
}

/// Income-per-capita thresholds expressed as multiples of the regional
/// minimum wage (UMR).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageRatioBands {
    pub very_low_lt: f64,
    pub low_lt: f64,
    pub moderate_le: f64,
}

impl Default for WageRatioBands {
    fn default() -> Self {
        Self {
            very_low_lt: 0.5,
            low_lt: 1.0,
            moderate_le: 2.0,
        }
    }
}

impl WageRatioBands {
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let ordered = self.very_low_lt < self.low_lt && self.low_lt < self.moderate_le;
        if !ordered {
            return Err(ThresholdError::new("wage", "ratio cut points must ascend"));
        }
        if self.very_low_lt <= 0.0 || !self.moderate_le.is_finite() {
            return Err(ThresholdError::new("wage", "ratio cut points must be positive and finite"));
        }
        Ok(())
    }
}

/// Affirmative-answer totals separating the four service score categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceScoreBands {
    pub minimal_le: u32,
    pub standar_le: u32,
    pub optimal_le: u32,
}

impl Default for ServiceScoreBands {
    fn default() -> Self {
        Self {
            minimal_le: 3,
            standar_le: 6,
            optimal_le: 9,
        }
    }
}

impl ServiceScoreBands {
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if self.minimal_le < self.standar_le && self.standar_le < self.optimal_le {
            Ok(())
        } else {
            Err(ThresholdError::new("service_score", "cut points must ascend"))
        }
    }
}

/// Policy dial for the child-risk aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Nutrition severity (distance from the normal band, 1..=3) at or above
    /// which a child is flagged.
    pub elevated_nutrition_severity: u8,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            elevated_nutrition_severity: 3,
        }
    }
}

/// Rejection raised by threshold-table validation.
#[derive(Debug, thiserror::Error)]
#[error("invalid {table} thresholds: {reason}")]
pub struct ThresholdError {
    pub table: &'static str,
    pub reason: &'static str,
}

impl ThresholdError {
    fn new(table: &'static str, reason: &'static str) -> Self {
        Self { table, reason }
    }
}
