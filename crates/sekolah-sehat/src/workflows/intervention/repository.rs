use crate::directory::InstitutionId;

use super::domain::{
    Intervention, InterventionRequest, Page, PageRequest, RequestFilter, RequestId, RequestStatus,
};

/// Storage abstraction for requests and recorded interventions.
pub trait InterventionRepository: Send + Sync {
    fn insert_request(
        &self,
        request: InterventionRequest,
    ) -> Result<InterventionRequest, InterventionStoreError>;

    fn fetch_request(
        &self,
        id: &RequestId,
    ) -> Result<Option<InterventionRequest>, InterventionStoreError>;

    fn update_request(&self, request: InterventionRequest) -> Result<(), InterventionStoreError>;

    fn insert_intervention(
        &self,
        intervention: Intervention,
    ) -> Result<Intervention, InterventionStoreError>;

    /// Filtered, paginated listing ordered by request date descending.
    fn requests_for(
        &self,
        puskesmas: &InstitutionId,
        filter: &RequestFilter,
        page: PageRequest,
    ) -> Result<Page<InterventionRequest>, InterventionStoreError>;

    fn count_requests(
        &self,
        puskesmas: &InstitutionId,
        status: Option<RequestStatus>,
    ) -> Result<usize, InterventionStoreError>;

    fn count_interventions(
        &self,
        puskesmas: &InstitutionId,
    ) -> Result<usize, InterventionStoreError>;
}

/// Error enumeration for intervention store failures.
#[derive(Debug, thiserror::Error)]
pub enum InterventionStoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("intervention store unavailable: {0}")]
    Unavailable(String),
}
