use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;
use sekolah_sehat::directory::InstitutionId;
use sekolah_sehat::workflows::family::{
    Family, FamilyId, FamilyMember, FamilyRepository, FamilyStoreError, MemberId,
};
use sekolah_sehat::workflows::school::{
    AnswerSet, QuestionSet, ServiceScope, StoredStratification, StratificationTier, SurveyCatalog,
    SurveyRepository, SurveyStoreError,
};

/// Survey store backed by the built-in instrument, holding answers and
/// results in memory for the demo commands.
pub(crate) struct InMemorySurveyStore {
    sets: Vec<QuestionSet>,
    answers: Mutex<HashMap<(InstitutionId, ServiceScope, StratificationTier), AnswerSet>>,
    results: Mutex<HashMap<(InstitutionId, ServiceScope), StoredStratification>>,
}

impl InMemorySurveyStore {
    pub(crate) fn seeded() -> Self {
        Self {
            sets: SurveyCatalog::standard().question_sets().to_vec(),
            answers: Mutex::new(HashMap::new()),
            results: Mutex::new(HashMap::new()),
        }
    }
}

impl SurveyRepository for InMemorySurveyStore {
    fn question_set(
        &self,
        scope: ServiceScope,
        tier: StratificationTier,
    ) -> Result<Option<QuestionSet>, SurveyStoreError> {
        Ok(self
            .sets
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
        guard.insert((stored.institution.clone(), stored.result.scope), stored);
        Ok(())
    }

    fn latest_result(
        &self,
        institution: &InstitutionId,
        scope: ServiceScope,
    ) -> Result<Option<StoredStratification>, SurveyStoreError> {
        let guard = self.results.lock().expect("result mutex poisoned");
        Ok(guard.get(&(institution.clone(), scope)).cloned())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryFamilyStore {
    families: Mutex<HashMap<FamilyId, Family>>,
    members: Mutex<HashMap<MemberId, FamilyMember>>,
}

impl FamilyRepository for InMemoryFamilyStore {
    fn insert_family(&self, family: Family) -> Result<Family, FamilyStoreError> {
        let mut guard = self.families.lock().expect("family mutex poisoned");
        if guard.contains_key(&family.id) {
            return Err(FamilyStoreError::Conflict);
        }
        guard.insert(family.id.clone(), family.clone());
        Ok(family)
    }

    fn update_family(&self, family: Family) -> Result<(), FamilyStoreError> {
        let mut guard = self.families.lock().expect("family mutex poisoned");
        if !guard.contains_key(&family.id) {
            return Err(FamilyStoreError::NotFound);
        }
        guard.insert(family.id.clone(), family);
        Ok(())
    }

    fn find_family_by_head(&self, head_name: &str) -> Result<Option<Family>, FamilyStoreError> {
        let guard = self.families.lock().expect("family mutex poisoned");
        Ok(guard
            .values()
            .find(|family| family.head_name == head_name)
            .cloned())
    }

    fn fetch_family(&self, id: &FamilyId) -> Result<Option<Family>, FamilyStoreError> {
        let guard = self.families.lock().expect("family mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn insert_member(&self, member: FamilyMember) -> Result<FamilyMember, FamilyStoreError> {
        let mut guard = self.members.lock().expect("member mutex poisoned");
        if guard.contains_key(&member.id) {
            return Err(FamilyStoreError::Conflict);
        }
        guard.insert(member.id.clone(), member.clone());
        Ok(member)
    }

    fn fetch_member(&self, id: &MemberId) -> Result<Option<FamilyMember>, FamilyStoreError> {
        let guard = self.members.lock().expect("member mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn members_of(&self, family: &FamilyId) -> Result<Vec<FamilyMember>, FamilyStoreError> {
        let guard = self.members.lock().expect("member mutex poisoned");
        let mut members: Vec<_> = guard
            .values()
            .filter(|member| &member.family == family)
            .cloned()
            .collect();
        members.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(members)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_tier(raw: &str) -> Result<StratificationTier, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "minimal" => Ok(StratificationTier::Minimal),
        "standar" | "standard" => Ok(StratificationTier::Standar),
        "optimal" => Ok(StratificationTier::Optimal),
        "paripurna" => Ok(StratificationTier::Paripurna),
        _ => Err(format!(
            "unknown tier '{raw}' (expected minimal, standar, optimal, or paripurna)"
        )),
    }
}
