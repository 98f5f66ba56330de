use crate::scoring::config::ServiceScoreBands;

use super::domain::{
    ScopeSurvey, ServiceScope, StratificationResult, StratificationTier, TierBreakdown,
    TierQualification, TierSurvey,
};

/// Missing-configuration and missing-data failures, kept distinct from the
/// normal "tier not achieved" outcome.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error("no question set configured for {} tier {}", scope.key(), tier.label())]
    QuestionSetMissing {
        scope: ServiceScope,
        tier: StratificationTier,
    },
    #[error("no answers submitted for {} tier {}", scope.key(), tier.label())]
    AnswersMissing {
        scope: ServiceScope,
        tier: StratificationTier,
    },
    #[error("answers for {} tier {} cover {answered} of {expected} questions", scope.key(), tier.label())]
    AnswersIncomplete {
        scope: ServiceScope,
        tier: StratificationTier,
        expected: usize,
        answered: usize,
    },
    #[error("question {} does not belong to {} tier {}", question.0, scope.key(), tier.label())]
    UnknownQuestion {
        scope: ServiceScope,
        tier: StratificationTier,
        question: super::domain::QuestionId,
    },
    #[error("question {} has no answer", question.0)]
    UnansweredQuestion {
        scope: ServiceScope,
        tier: StratificationTier,
        question: super::domain::QuestionId,
    },
}

/// Stateless evaluator applying the configured score bands to a scope
/// survey. Evaluation is a pure function of the survey, so repeated calls
/// on the same input always produce the same result.
#[derive(Debug, Clone)]
pub struct StratificationEngine {
    bands: ServiceScoreBands,
}

impl StratificationEngine {
    pub fn new(bands: ServiceScoreBands) -> Self {
        Self { bands }
    }

    /// Stratifies one scope: unit-weight score over affirmative answers,
    /// score category from the configured cut points, and the achieved tier
    /// from the ascending qualification chain.
    ///
    /// Every tier of the instrument must be configured; a tier whose
    /// answers are missing or incomplete simply breaks the chain. Minimal
    /// is the floor of the ladder and is reported even when its own check
    /// fails; the breakdown still records `satisfied: false` for it.
    pub fn evaluate(&self, survey: &ScopeSurvey) -> Result<StratificationResult, SurveyError> {
        let breakdown = self.breakdown(survey, StratificationTier::Paripurna)?;

        let score: u32 = breakdown
            .iter()
            .map(|entry| entry.affirmative as u32)
            .sum();

        let mut tier_achieved = StratificationTier::Minimal;
        for entry in &breakdown {
            if !entry.satisfied {
                break;
            }
            tier_achieved = entry.tier;
        }

        Ok(StratificationResult {
            scope: survey.scope,
            score,
            score_category: self.score_category(score),
            tier_achieved,
            breakdown,
        })
    }

    /// Strict qualification check for one claimed tier: every tier at or
    /// below it must be configured and fully answered, otherwise the check
    /// is an error rather than a quiet "not qualified".
    pub fn check_tier(
        &self,
        survey: &ScopeSurvey,
        tier: StratificationTier,
    ) -> Result<TierQualification, SurveyError> {
        for candidate in StratificationTier::ordered() {
            if candidate > tier {
                break;
            }
            let entry = require_tier(survey, candidate)?;
            let answers = entry.answers.as_ref().ok_or(SurveyError::AnswersMissing {
                scope: survey.scope,
                tier: candidate,
            })?;
            let answered = entry
                .questions
                .iter()
                .filter(|question| answers.contains_key(&question.id))
                .count();
            if answered < entry.questions.len() {
                return Err(SurveyError::AnswersIncomplete {
                    scope: survey.scope,
                    tier: candidate,
                    expected: entry.questions.len(),
                    answered,
                });
            }
        }

        let breakdown = self.breakdown(survey, tier)?;
        let qualified = breakdown.iter().all(|entry| entry.satisfied);

        Ok(TierQualification {
            tier,
            qualified,
            breakdown,
        })
    }

    fn score_category(&self, score: u32) -> StratificationTier {
        if score <= self.bands.minimal_le {
            StratificationTier::Minimal
        } else if score <= self.bands.standar_le {
            StratificationTier::Standar
        } else if score <= self.bands.optimal_le {
            StratificationTier::Optimal
        } else {
            StratificationTier::Paripurna
        }
    }

    fn breakdown(
        &self,
        survey: &ScopeSurvey,
        up_to: StratificationTier,
    ) -> Result<Vec<TierBreakdown>, SurveyError> {
        let mut breakdown = Vec::new();
        for tier in StratificationTier::ordered() {
            if tier > up_to {
                break;
            }
            let entry = require_tier(survey, tier)?;
            breakdown.push(tier_breakdown(entry));
        }
        Ok(breakdown)
    }
}

fn require_tier(
    survey: &ScopeSurvey,
    tier: StratificationTier,
) -> Result<&TierSurvey, SurveyError> {
    survey
        .tier(tier)
        .filter(|entry| !entry.questions.is_empty())
        .ok_or(SurveyError::QuestionSetMissing {
            scope: survey.scope,
            tier,
        })
}

fn tier_breakdown(entry: &TierSurvey) -> TierBreakdown {
    let defined = entry.questions.len();
    let (answered, affirmative) = match &entry.answers {
        Some(answers) => {
            let answered = entry
                .questions
                .iter()
                .filter(|question| answers.contains_key(&question.id))
                .count();
            let affirmative = entry
                .questions
                .iter()
                .filter(|question| answers.get(&question.id).copied() == Some(true))
                .count();
            (answered, affirmative)
        }
        None => (0, 0),
    };

    TierBreakdown {
        tier: entry.tier,
        defined,
        answered,
        affirmative,
        satisfied: answered == defined && affirmative == defined,
    }
}
