use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use crate::directory::InstitutionId;
use crate::scoring::ScoringConfig;
use crate::workflows::school::catalog::SurveyCatalog;
use crate::workflows::school::domain::{
    AnswerSet, QuestionSet, ServiceScope, StratificationTier,
};
use crate::workflows::school::repository::{
    StoredStratification, SurveyRepository, SurveyStoreError,
};
use crate::workflows::school::service::SchoolStratificationService;

pub(super) fn school() -> InstitutionId {
    InstitutionId("sch-001".to_string())
}

/// Survey store seeded with the standard instrument and no answers.
#[derive(Default)]
pub(super) struct MemorySurveyStore {
    pub(super) questions: Vec<QuestionSet>,
    pub(super) answers: Mutex<HashMap<(InstitutionId, ServiceScope, StratificationTier), AnswerSet>>,
    pub(super) results: Mutex<Vec<StoredStratification>>,
}

impl MemorySurveyStore {
    pub(super) fn seeded() -> Self {
        Self {
            questions: SurveyCatalog::standard().question_sets().to_vec(),
            ..Self::default()
        }
    }
}

impl SurveyRepository for MemorySurveyStore {
    fn question_set(
        &self,
        scope: ServiceScope,
        tier: StratificationTier,
    ) -> Result<Option<QuestionSet>, SurveyStoreError> {
        Ok(self
            .questions
            .iter()
            .find(|set| set.scope == scope && set.tier == tier)
            .cloned())
    }

    fn answer_set(
        &self,
        institution: &InstitutionId,
        scope: ServiceScope,
        tier: StratificationTier,
    ) -> Result<Option<AnswerSet>, SurveyStoreError> {
        let guard = self.answers.lock().expect("answer mutex poisoned");
        Ok(guard.get(&(institution.clone(), scope, tier)).cloned())
    }

    fn store_answers(&self, set: AnswerSet) -> Result<(), SurveyStoreError> {
        let mut guard = self.answers.lock().expect("answer mutex poisoned");
        guard.insert((set.institution.clone(), set.scope, set.tier), set);
        Ok(())
    }

    fn store_result(&self, stored: StoredStratification) -> Result<(), SurveyStoreError> {
        let mut guard = self.results.lock().expect("result mutex poisoned");
        guard.push(stored);
        Ok(())
    }

    fn latest_result(
        &self,
        institution: &InstitutionId,
        scope: ServiceScope,
    ) -> Result<Option<StoredStratification>, SurveyStoreError> {
        let guard = self.results.lock().expect("result mutex poisoned");
        Ok(guard
            .iter()
            .filter(|stored| &stored.institution == institution && stored.result.scope == scope)
            .last()
            .cloned())
    }
}

pub(super) struct UnavailableSurveyStore;

impl SurveyRepository for UnavailableSurveyStore {
    fn question_set(
        &self,
        _scope: ServiceScope,
        _tier: StratificationTier,
    ) -> Result<Option<QuestionSet>, SurveyStoreError> {
        Err(SurveyStoreError::Unavailable("database offline".to_string()))
    }

    fn answer_set(
        &self,
        _institution: &InstitutionId,
        _scope: ServiceScope,
        _tier: StratificationTier,
    ) -> Result<Option<AnswerSet>, SurveyStoreError> {
        Err(SurveyStoreError::Unavailable("database offline".to_string()))
    }

    fn store_answers(&self, _set: AnswerSet) -> Result<(), SurveyStoreError> {
        Err(SurveyStoreError::Unavailable("database offline".to_string()))
    }

    fn store_result(&self, _stored: StoredStratification) -> Result<(), SurveyStoreError> {
        Err(SurveyStoreError::Unavailable("database offline".to_string()))
    }

    fn latest_result(
        &self,
        _institution: &InstitutionId,
        _scope: ServiceScope,
    ) -> Result<Option<StoredStratification>, SurveyStoreError> {
        Err(SurveyStoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    SchoolStratificationService<MemorySurveyStore>,
    Arc<MemorySurveyStore>,
) {
    let store = Arc::new(MemorySurveyStore::seeded());
    let service = SchoolStratificationService::new(store.clone(), &ScoringConfig::default());
    (service, store)
}

/// Answers every question of the cell with the given value.
pub(super) fn uniform_answers(
    store: &MemorySurveyStore,
    institution: &InstitutionId,
    scope: ServiceScope,
    tier: StratificationTier,
    value: bool,
) -> AnswerSet {
    let set = store
        .question_set(scope, tier)
        .expect("store available")
        .expect("cell configured");
    let answers: BTreeMap<_, _> = set
        .questions
        .iter()
        .map(|question| (question.id.clone(), value))
        .collect();
    AnswerSet {
        institution: institution.clone(),
        scope,
        tier,
        answers,
    }
}

/// Submits uniform answers for every tier of the scope.
pub(super) fn answer_scope(
    service: &SchoolStratificationService<MemorySurveyStore>,
    store: &MemorySurveyStore,
    institution: &InstitutionId,
    scope: ServiceScope,
    value: bool,
) {
    for tier in StratificationTier::ordered() {
        service
            .submit_answers(uniform_answers(store, institution, scope, tier, value))
            .expect("submission valid");
    }
}
