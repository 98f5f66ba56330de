use serde::{Deserialize, Serialize};

use super::config::BehaviourScale;
use super::ScoringError;

/// Raw survey answers for one family member, each on the configured scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourResponses {
    pub eat_frequency: u8,
    pub drink_frequency: u8,
    pub physical_activity: u8,
    pub sleep_quality: u8,
    pub hygiene_practice: u8,
}

/// Ordinal band produced by the shared scale mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviourBand {
    Low,
    Moderate,
    High,
}

impl BehaviourBand {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Moderate, Self::High]
    }

    pub const fn score(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Moderate => 2,
            Self::High => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// Banded scores for the behaviour survey. Diet covers eating and drinking
/// frequency combined before banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourScores {
    pub diet: BehaviourBand,
    pub physical_activity: BehaviourBand,
    pub sleep_quality: BehaviourBand,
    pub hygiene_practice: BehaviourBand,
}

/// Maps one raw answer through the shared cut points.
pub fn score_scale(scale: &BehaviourScale, raw: u8) -> Result<BehaviourBand, ScoringError> {
    if raw > scale.max_value {
        return Err(ScoringError::ScaleExceeded {
            value: raw,
            max: scale.max_value,
        });
    }
    Ok(band_for(scale, u16::from(raw)))
}

/// Scores a full response set. Every field is checked against the scale
/// maximum before banding; the diet band is computed from the combined
/// eat + drink total, which may exceed a single field's maximum.
pub fn score_responses(
    scale: &BehaviourScale,
    responses: &BehaviourResponses,
) -> Result<BehaviourScores, ScoringError> {
    let fields = [
        responses.eat_frequency,
        responses.drink_frequency,
        responses.physical_activity,
        responses.sleep_quality,
        responses.hygiene_practice,
    ];
    for value in fields {
        if value > scale.max_value {
            return Err(ScoringError::ScaleExceeded {
                value,
                max: scale.max_value,
            });
        }
    }

    let diet_total = u16::from(responses.eat_frequency) + u16::from(responses.drink_frequency);
    Ok(BehaviourScores {
        diet: band_for(scale, diet_total),
        physical_activity: band_for(scale, u16::from(responses.physical_activity)),
        sleep_quality: band_for(scale, u16::from(responses.sleep_quality)),
        hygiene_practice: band_for(scale, u16::from(responses.hygiene_practice)),
    })
}

fn band_for(scale: &BehaviourScale, raw: u16) -> BehaviourBand {
    if raw <= u16::from(scale.low_le) {
        BehaviourBand::Low
    } else if raw <= u16::from(scale.medium_le) {
        BehaviourBand::Moderate
    } else {
        BehaviourBand::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> BehaviourScale {
        BehaviourScale::default()
    }

    #[test]
    fn shared_cut_points_cover_the_scale() {
        let scale = scale();
        assert_eq!(score_scale(&scale, 0).expect("in range"), BehaviourBand::Low);
        assert_eq!(score_scale(&scale, 1).expect("in range"), BehaviourBand::Low);
        assert_eq!(score_scale(&scale, 2).expect("in range"), BehaviourBand::Moderate);
        assert_eq!(score_scale(&scale, 3).expect("in range"), BehaviourBand::Moderate);
        assert_eq!(score_scale(&scale, 4).expect("in range"), BehaviourBand::High);
    }

    #[test]
    fn rejects_values_above_the_scale() {
        let err = score_scale(&scale(), 5).expect_err("above maximum");
        match err {
            ScoringError::ScaleExceeded { value, max } => {
                assert_eq!(value, 5);
                assert_eq!(max, 4);
            }
            other => panic!("expected ScaleExceeded, got {other:?}"),
        }
    }

    #[test]
    fn diet_band_combines_eat_and_drink() {
        let responses = BehaviourResponses {
            eat_frequency: 2,
            drink_frequency: 3,
            physical_activity: 1,
            sleep_quality: 3,
            hygiene_practice: 4,
        };
        let scores = score_responses(&scale(), &responses).expect("valid responses");
        // 2 + 3 = 5 lands above the medium cut point.
        assert_eq!(scores.diet, BehaviourBand::High);
        assert_eq!(scores.physical_activity, BehaviourBand::Low);
        assert_eq!(scores.sleep_quality, BehaviourBand::Moderate);
        assert_eq!(scores.hygiene_practice, BehaviourBand::High);
    }

    #[test]
    fn response_fields_are_validated_individually() {
        let responses = BehaviourResponses {
            eat_frequency: 1,
            drink_frequency: 1,
            physical_activity: 9,
            sleep_quality: 1,
            hygiene_practice: 1,
        };
        let err = score_responses(&scale(), &responses).expect_err("field above maximum");
        assert!(matches!(err, ScoringError::ScaleExceeded { value: 9, .. }));
    }

    #[test]
    fn band_scores_ascend() {
        let scores: Vec<u8> = BehaviourBand::ordered().iter().map(|band| band.score()).collect();
        assert_eq!(scores, vec![1, 2, 3]);
    }
}
