use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::directory::InstitutionId;

use super::domain::{AnswerSet, QuestionSet, ServiceScope, StratificationResult, StratificationTier};

/// A stratification result as persisted alongside the owning institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredStratification {
    pub institution: InstitutionId,
    pub result: StratificationResult,
    pub computed_on: NaiveDate,
}

/// Storage abstraction for the survey instrument, submitted answers, and
/// computed results, so the service can be exercised in isolation.
pub trait SurveyRepository: Send + Sync {
    fn question_set(
        &self,
        scope: ServiceScope,
        tier: StratificationTier,
    ) -> Result<Option<QuestionSet>, SurveyStoreError>;

    fn answer_set(
        &self,
        institution: &InstitutionId,
        scope: ServiceScope,
        tier: StratificationTier,
    ) -> Result<Option<AnswerSet>, SurveyStoreError>;

    /// Replaces any previously submitted answers for the same cell.
    fn store_answers(&self, set: AnswerSet) -> Result<(), SurveyStoreError>;

    fn store_result(&self, stored: StoredStratification) -> Result<(), SurveyStoreError>;

    fn latest_result(
        &self,
        institution: &InstitutionId,
        scope: ServiceScope,
    ) -> Result<Option<StoredStratification>, SurveyStoreError>;
}

/// Error enumeration for survey store failures.
#[derive(Debug, thiserror::Error)]
pub enum SurveyStoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("survey store unavailable: {0}")]
    Unavailable(String),
}
