use std::sync::Arc;

use chrono::NaiveDate;

use crate::directory::InstitutionId;
use crate::scoring::ScoringConfig;

use super::domain::{
    AnswerSet, SchoolStratification, ScopeSurvey, ServiceScope, StratificationResult,
    StratificationTier, TierQualification, TierSurvey,
};
use super::engine::{StratificationEngine, SurveyError};
use super::repository::{StoredStratification, SurveyRepository, SurveyStoreError};

/// Service composing the survey store and the stratification engine.
pub struct SchoolStratificationService<R> {
    repository: Arc<R>,
    engine: StratificationEngine,
}

impl<R> SchoolStratificationService<R>
where
    R: SurveyRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: &ScoringConfig) -> Self {
        Self {
            repository,
            engine: StratificationEngine::new(config.service_score),
        }
    }

    /// Validates a submission against the configured question set: every
    /// question must carry exactly one answer, and no foreign question ids
    /// are accepted. Resubmitting a cell replaces the previous answers.
    pub fn submit_answers(&self, set: AnswerSet) -> Result<(), SchoolServiceError> {
        let questions = self
            .repository
            .question_set(set.scope, set.tier)?
            .ok_or(SurveyError::QuestionSetMissing {
                scope: set.scope,
                tier: set.tier,
            })?;

        for question in &questions.questions {
            if !set.answers.contains_key(&question.id) {
                return Err(SurveyError::UnansweredQuestion {
                    scope: set.scope,
                    tier: set.tier,
                    question: question.id.clone(),
                }
                .into());
            }
        }
        for id in set.answers.keys() {
            if !questions.questions.iter().any(|question| &question.id == id) {
                return Err(SurveyError::UnknownQuestion {
                    scope: set.scope,
                    tier: set.tier,
                    question: id.clone(),
                }
                .into());
            }
        }

        self.repository.store_answers(set)?;
        Ok(())
    }

    /// Stratifies one scope of a school and persists the result.
    pub fn stratify_scope(
        &self,
        institution: &InstitutionId,
        scope: ServiceScope,
        computed_on: NaiveDate,
    ) -> Result<StratificationResult, SchoolServiceError> {
        let survey = self.scope_survey(institution, scope)?;
        let result = self.engine.evaluate(&survey)?;

        self.repository.store_result(StoredStratification {
            institution: institution.clone(),
            result: result.clone(),
            computed_on,
        })?;

        Ok(result)
    }

    /// Stratifies all four scopes. The overall tier is the minimum across
    /// scopes, so the weakest scope caps the school.
    pub fn school_stratification(
        &self,
        institution: &InstitutionId,
        computed_on: NaiveDate,
    ) -> Result<SchoolStratification, SchoolServiceError> {
        let mut scopes = Vec::with_capacity(ServiceScope::ordered().len());
        for scope in ServiceScope::ordered() {
            scopes.push(self.stratify_scope(institution, scope, computed_on)?);
        }

        let overall_tier = scopes
            .iter()
            .map(|result| result.tier_achieved)
            .min()
            .unwrap_or(StratificationTier::Minimal);

        Ok(SchoolStratification {
            institution: institution.clone(),
            scopes,
            overall_tier,
        })
    }

    /// Strict qualification check for one claimed tier of one scope.
    pub fn check_tier(
        &self,
        institution: &InstitutionId,
        scope: ServiceScope,
        tier: StratificationTier,
    ) -> Result<TierQualification, SchoolServiceError> {
        let survey = self.scope_survey(institution, scope)?;
        Ok(self.engine.check_tier(&survey, tier)?)
    }

    pub fn latest_result(
        &self,
        institution: &InstitutionId,
        scope: ServiceScope,
    ) -> Result<Option<StoredStratification>, SchoolServiceError> {
        Ok(self.repository.latest_result(institution, scope)?)
    }

    fn scope_survey(
        &self,
        institution: &InstitutionId,
        scope: ServiceScope,
    ) -> Result<ScopeSurvey, SchoolServiceError> {
        let mut tiers = Vec::with_capacity(StratificationTier::ordered().len());
        for tier in StratificationTier::ordered() {
            let questions = self
                .repository
                .question_set(scope, tier)?
                .map(|set| set.questions)
                .unwrap_or_default();
            let answers = self
                .repository
                .answer_set(institution, scope, tier)?
                .map(|set| set.answers);
            tiers.push(TierSurvey {
                tier,
                questions,
                answers,
            });
        }

        Ok(ScopeSurvey {
            institution: institution.clone(),
            scope,
            tiers,
        })
    }
}

/// Error raised by the stratification service.
#[derive(Debug, thiserror::Error)]
pub enum SchoolServiceError {
    #[error(transparent)]
    Survey(#[from] SurveyError),
    #[error(transparent)]
    Store(#[from] SurveyStoreError),
}
