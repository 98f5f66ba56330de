use serde::{Deserialize, Serialize};

use super::config::BmiBands;
use super::ScoringError;

/// Nutrition band assigned to a BMI value, ascending from severe
/// underweight to obesity. The stored ids (1..=5) follow the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionStatus {
    SeverelyThin,
    Thin,
    Normal,
    Overweight,
    Obese,
}

impl NutritionStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::SeverelyThin,
            Self::Thin,
            Self::Normal,
            Self::Overweight,
            Self::Obese,
        ]
    }

    /// Identifier persisted by the surrounding stores.
    pub const fn status_id(self) -> u8 {
        match self {
            Self::SeverelyThin => 1,
            Self::Thin => 2,
            Self::Normal => 3,
            Self::Overweight => 4,
            Self::Obese => 5,
        }
    }

    pub const fn from_status_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::SeverelyThin),
            2 => Some(Self::Thin),
            3 => Some(Self::Normal),
            4 => Some(Self::Overweight),
            5 => Some(Self::Obese),
            _ => None,
        }
    }

    /// Broad group printed on report cards.
    pub const fn group(self) -> &'static str {
        match self {
            Self::SeverelyThin | Self::Thin => "KURUS",
            Self::Normal => "NORMAL",
            Self::Overweight | Self::Obese => "GEMUK",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SeverelyThin => "Kekurangan berat badan tingkat berat",
            Self::Thin => "Kekurangan berat badan tingkat ringan",
            Self::Normal => "Gizi normal",
            Self::Overweight => "Kelebihan berat badan tingkat ringan",
            Self::Obese => "Kelebihan berat badan tingkat berat",
        }
    }
}

/// BMI together with the band it falls in; the snapshot stored alongside a
/// family member or screened child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionAssessment {
    pub bmi: f64,
    pub status: NutritionStatus,
}

/// BMI = kg / (cm / 100)^2.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, ScoringError> {
    let valid = height_cm.is_finite() && weight_kg.is_finite() && height_cm > 0.0 && weight_kg > 0.0;
    if !valid {
        return Err(ScoringError::InvalidMeasurement {
            height_cm,
            weight_kg,
        });
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() {
        return Err(ScoringError::NonFiniteBmi);
    }

    Ok(bmi)
}

/// Places a BMI value in exactly one band; the bounds in [`BmiBands`]
/// alternate exclusive/inclusive so no value falls between bands.
pub fn classify_bmi(bands: &BmiBands, bmi: f64) -> NutritionStatus {
    if bmi < bands.severely_thin_lt {
        NutritionStatus::SeverelyThin
    } else if bmi < bands.thin_lt {
        NutritionStatus::Thin
    } else if bmi <= bands.normal_le {
        NutritionStatus::Normal
    } else if bmi <= bands.overweight_le {
        NutritionStatus::Overweight
    } else {
        NutritionStatus::Obese
    }
}

pub fn classify_nutrition(
    bands: &BmiBands,
    height_cm: f64,
    weight_kg: f64,
) -> Result<NutritionAssessment, ScoringError> {
    let bmi = calculate_bmi(height_cm, weight_kg)?;
    Ok(NutritionAssessment {
        bmi,
        status: classify_bmi(bands, bmi),
    })
}
