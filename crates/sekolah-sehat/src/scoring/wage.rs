use serde::{Deserialize, Serialize};

use super::config::WageRatioBands;
use super::ScoringError;

/// Ordinal household wage category, ascending with income per capita
/// relative to the regional minimum wage (UMR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageCategory {
    VeryLow,
    Low,
    Moderate,
    High,
}

impl WageCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::VeryLow, Self::Low, Self::Moderate, Self::High]
    }

    pub const fn score(self) -> u8 {
        match self {
            Self::VeryLow => 1,
            Self::Low => 2,
            Self::Moderate => 3,
            Self::High => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Far below the regional minimum wage",
            Self::Low => "Below the regional minimum wage",
            Self::Moderate => "Meets the regional minimum wage",
            Self::High => "Well above the regional minimum wage",
        }
    }
}

/// Categorizes income per household member against the UMR ratio bands.
pub fn categorize_wage(
    bands: &WageRatioBands,
    monthly_income: f64,
    household_size: u32,
    regional_minimum_wage: f64,
) -> Result<WageCategory, ScoringError> {
    if household_size == 0 {
        return Err(ScoringError::EmptyHousehold);
    }
    if !monthly_income.is_finite() || monthly_income < 0.0 {
        return Err(ScoringError::InvalidIncome(monthly_income));
    }
    if !regional_minimum_wage.is_finite() || regional_minimum_wage <= 0.0 {
        return Err(ScoringError::InvalidMinimumWage(regional_minimum_wage));
    }

    let per_capita = monthly_income / f64::from(household_size);
    let ratio = per_capita / regional_minimum_wage;

    let category = if ratio < bands.very_low_lt {
        WageCategory::VeryLow
    } else if ratio < bands.low_lt {
        WageCategory::Low
    } else if ratio <= bands.moderate_le {
        WageCategory::Moderate
    } else {
        WageCategory::High
    };

    Ok(category)
}
