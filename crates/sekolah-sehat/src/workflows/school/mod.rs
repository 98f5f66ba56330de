//! School service stratification: the survey instrument, the scoring
//! engine, and the service wiring both to a survey store.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod repository;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::SurveyCatalog;
pub use domain::{
    AnswerSet, QuestionId, QuestionSet, SchoolStratification, ScopeSurvey, ServiceScope,
    StratificationResult, StratificationTier, SurveyQuestion, TierBreakdown, TierQualification,
    TierSurvey,
};
pub use engine::{StratificationEngine, SurveyError};
pub use repository::{StoredStratification, SurveyRepository, SurveyStoreError};
pub use service::{SchoolServiceError, SchoolStratificationService};
pub use views::{SchoolStratificationView, ScopeResultView, TierBreakdownView};
