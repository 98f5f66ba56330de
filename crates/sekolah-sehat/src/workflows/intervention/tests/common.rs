use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::directory::{
    DirectoryError, Institution, InstitutionDirectory, InstitutionId, InstitutionKind,
};
use crate::workflows::family::MemberId;
use crate::workflows::intervention::domain::{
    Intervention, InterventionRequest, NewRequest, Page, PageRequest, RequestFilter, RequestId,
    RequestStatus,
};
use crate::workflows::intervention::repository::{InterventionRepository, InterventionStoreError};
use crate::workflows::intervention::service::InterventionService;

pub(super) fn school_id() -> InstitutionId {
    InstitutionId("sch-001".to_string())
}

pub(super) fn puskesmas_id() -> InstitutionId {
    InstitutionId("pkm-001".to_string())
}

pub(super) fn requested_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 2).expect("valid date")
}

pub(super) fn new_request() -> NewRequest {
    NewRequest {
        school: school_id(),
        puskesmas: puskesmas_id(),
        member: MemberId("mem-000001".to_string()),
        complaint: "Status gizi sangat kurus pada penjaringan".to_string(),
        requested_on: requested_on(),
    }
}

/// Directory with one school and one puskesmas.
pub(super) struct StaticDirectory;

impl InstitutionDirectory for StaticDirectory {
    fn find(&self, id: &InstitutionId) -> Result<Option<Institution>, DirectoryError> {
        let institution = if id == &school_id() {
            Some(Institution {
                id: school_id(),
                name: "SDN 1 Menteng".to_string(),
                kind: InstitutionKind::School,
            })
        } else if id == &puskesmas_id() {
            Some(Institution {
                id: puskesmas_id(),
                name: "Puskesmas Menteng".to_string(),
                kind: InstitutionKind::Puskesmas,
            })
        } else {
            None
        };
        Ok(institution)
    }
}

#[derive(Default)]
pub(super) struct MemoryInterventionStore {
    pub(super) requests: Mutex<HashMap<RequestId, InterventionRequest>>,
    pub(super) interventions: Mutex<Vec<Intervention>>,
}

impl InterventionRepository for MemoryInterventionStore {
    fn insert_request(
        &self,
        request: InterventionRequest,
    ) -> Result<InterventionRequest, InterventionStoreError> {
        let mut guard = self.requests.lock().expect("request mutex poisoned");
        if guard.contains_key(&request.id) {
            return Err(InterventionStoreError::Conflict);
        }
        guard.insert(request.id.clone(), request.clone());
        Ok(request)
    }

    fn fetch_request(
        &self,
        id: &RequestId,
    ) -> Result<Option<InterventionRequest>, InterventionStoreError> {
        let guard = self.requests.lock().expect("request mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn update_request(&self, request: InterventionRequest) -> Result<(), InterventionStoreError> {
        let mut guard = self.requests.lock().expect("request mutex poisoned");
        if guard.contains_key(&request.id) {
            guard.insert(request.id.clone(), request);
            Ok(())
        } else {
            Err(InterventionStoreError::NotFound)
        }
    }

    fn insert_intervention(
        &self,
        intervention: Intervention,
    ) -> Result<Intervention, InterventionStoreError> {
        let mut guard = self.interventions.lock().expect("intervention mutex poisoned");
        guard.push(intervention.clone());
        Ok(intervention)
    }

    fn requests_for(
        &self,
        puskesmas: &InstitutionId,
        filter: &RequestFilter,
        page: PageRequest,
    ) -> Result<Page<InterventionRequest>, InterventionStoreError> {
        let guard = self.requests.lock().expect("request mutex poisoned");
        let mut matching: Vec<_> = guard
            .values()
            .filter(|request| &request.puskesmas == puskesmas && filter.matches(request))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.requested_on.cmp(&a.requested_on).then(b.id.cmp(&a.id)));

        let normalized = page.normalized();
        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(page.offset())
            .take(normalized.per_page as usize)
            .collect();

        Ok(Page {
            items,
            page: normalized.page,
            per_page: normalized.per_page,
            total,
        })
    }

    fn count_requests(
        &self,
        puskesmas: &InstitutionId,
        status: Option<RequestStatus>,
    ) -> Result<usize, InterventionStoreError> {
        let guard = self.requests.lock().expect("request mutex poisoned");
        Ok(guard
            .values()
            .filter(|request| {
                &request.puskesmas == puskesmas
                    && status.map_or(true, |status| request.status == status)
            })
            .count())
    }

    fn count_interventions(
        &self,
        puskesmas: &InstitutionId,
    ) -> Result<usize, InterventionStoreError> {
        let requests = self.requests.lock().expect("request mutex poisoned");
        let interventions = self.interventions.lock().expect("intervention mutex poisoned");
        Ok(interventions
            .iter()
            .filter(|intervention| {
                requests
                    .get(&intervention.request)
                    .map_or(false, |request| &request.puskesmas == puskesmas)
            })
            .count())
    }
}

pub(super) fn build_service() -> (
    InterventionService<MemoryInterventionStore, StaticDirectory>,
    Arc<MemoryInterventionStore>,
) {
    let store = Arc::new(MemoryInterventionStore::default());
    let service = InterventionService::new(store.clone(), Arc::new(StaticDirectory));
    (service, store)
}
