use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::scoring::{BehaviourResponses, ScoringConfig};
use crate::workflows::family::domain::{
    Family, FamilyId, FamilyMember, FamilyRegistration, Gender, MemberId, MemberIntake, Relation,
};
use crate::workflows::family::repository::{FamilyRepository, FamilyStoreError};
use crate::workflows::family::service::FamilyService;

pub(super) const UMR: f64 = 2_000_000.0;

#[derive(Default)]
pub(super) struct MemoryFamilyStore {
    pub(super) families: Mutex<HashMap<FamilyId, Family>>,
    pub(super) members: Mutex<HashMap<MemberId, FamilyMember>>,
}

impl FamilyRepository for MemoryFamilyStore {
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
        if guard.contains_key(&family.id) {
            guard.insert(family.id.clone(), family);
            Ok(())
        } else {
            Err(FamilyStoreError::NotFound)
        }
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

pub(super) fn build_service() -> (FamilyService<MemoryFamilyStore>, Arc<MemoryFamilyStore>) {
    let store = Arc::new(MemoryFamilyStore::default());
    let service = FamilyService::new(store.clone(), ScoringConfig::default());
    (service, store)
}

pub(super) fn registration(head_name: &str) -> FamilyRegistration {
    FamilyRegistration {
        head_name: head_name.to_string(),
        contact: "081234567890".to_string(),
        registered_on: NaiveDate::from_ymd_opt(2026, 1, 12).expect("valid date"),
    }
}

pub(super) fn adult_intake(name: &str, monthly_income: f64) -> MemberIntake {
    MemberIntake {
        name: name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(1988, 4, 3).expect("valid date"),
        gender: Gender::Male,
        relation: Relation::Head,
        education: Some("SMA".to_string()),
        occupation: Some("Buruh".to_string()),
        monthly_income,
        school: None,
        birth_weight_kg: None,
        height_cm: 170.0,
        weight_kg: 70.0,
        measured_on: NaiveDate::from_ymd_opt(2026, 1, 12).expect("valid date"),
        behaviour: None,
    }
}

pub(super) fn child_intake(name: &str) -> MemberIntake {
    MemberIntake {
        name: name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(2016, 8, 21).expect("valid date"),
        gender: Gender::Female,
        relation: Relation::Child,
        education: Some("SD".to_string()),
        occupation: None,
        monthly_income: 0.0,
        school: None,
        birth_weight_kg: Some(3.1),
        height_cm: 128.0,
        weight_kg: 26.0,
        measured_on: NaiveDate::from_ymd_opt(2026, 1, 12).expect("valid date"),
        behaviour: Some(BehaviourResponses {
            eat_frequency: 2,
            drink_frequency: 2,
            physical_activity: 2,
            sleep_quality: 3,
            hygiene_practice: 3,
        }),
    }
}
