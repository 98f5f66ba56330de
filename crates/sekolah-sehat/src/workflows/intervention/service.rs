use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::directory::{DirectoryError, InstitutionDirectory, InstitutionId, InstitutionKind};

use super::domain::{
    Intervention, InterventionId, InterventionOutcome, InterventionRequest, NewRequest, Page,
    PageRequest, PuskesmasSummary, RequestFilter, RequestId, RequestStatus,
};
use super::repository::{InterventionRepository, InterventionStoreError};

static REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static INTERVENTION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_request_id() -> RequestId {
    let id = REQUEST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RequestId(format!("req-{id:06}"))
}

fn next_intervention_id() -> InterventionId {
    let id = INTERVENTION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    InterventionId(format!("int-{id:06}"))
}

/// Service composing the institution directory and the request store. The
/// directory check keeps the two institution roles from swapping sides.
pub struct InterventionService<R, D> {
    repository: Arc<R>,
    directory: Arc<D>,
}

impl<R, D> InterventionService<R, D>
where
    R: InterventionRepository + 'static,
    D: InstitutionDirectory + 'static,
{
    pub fn new(repository: Arc<R>, directory: Arc<D>) -> Self {
        Self {
            repository,
            directory,
        }
    }

    /// Opens a pending request after validating that the origin is a school
    /// and the target is a puskesmas.
    pub fn request_intervention(
        &self,
        request: NewRequest,
    ) -> Result<InterventionRequest, InterventionServiceError> {
        self.require_kind(&request.school, InstitutionKind::School)?;
        self.require_kind(&request.puskesmas, InstitutionKind::Puskesmas)?;

        let stored = self.repository.insert_request(InterventionRequest {
            id: next_request_id(),
            school: request.school,
            puskesmas: request.puskesmas,
            member: request.member,
            complaint: request.complaint,
            requested_on: request.requested_on,
            status: RequestStatus::Pending,
        })?;
        Ok(stored)
    }

    /// Answers a pending request with a recommendation and program, moving
    /// it to Accepted. Handled requests are final.
    pub fn record_intervention(
        &self,
        request_id: &RequestId,
        outcome: InterventionOutcome,
    ) -> Result<Intervention, InterventionServiceError> {
        let mut request = self
            .repository
            .fetch_request(request_id)?
            .ok_or(InterventionStoreError::NotFound)?;

        if request.status != RequestStatus::Pending {
            return Err(InterventionServiceError::AlreadyHandled {
                request: request.id,
                status: request.status,
            });
        }

        let intervention = self.repository.insert_intervention(Intervention {
            id: next_intervention_id(),
            request: request.id.clone(),
            recommendation: outcome.recommendation,
            program: outcome.program,
            recorded_on: outcome.recorded_on,
        })?;

        request.status = RequestStatus::Accepted;
        self.repository.update_request(request)?;

        Ok(intervention)
    }

    /// Declines a pending request. Like acceptance, the transition is final.
    pub fn decline_request(
        &self,
        request_id: &RequestId,
    ) -> Result<InterventionRequest, InterventionServiceError> {
        let mut request = self
            .repository
            .fetch_request(request_id)?
            .ok_or(InterventionStoreError::NotFound)?;

        if request.status != RequestStatus::Pending {
            return Err(InterventionServiceError::AlreadyHandled {
                request: request.id,
                status: request.status,
            });
        }

        request.status = RequestStatus::Declined;
        self.repository.update_request(request.clone())?;
        Ok(request)
    }

    pub fn requests_for_puskesmas(
        &self,
        puskesmas: &InstitutionId,
        filter: &RequestFilter,
        page: PageRequest,
    ) -> Result<Page<InterventionRequest>, InterventionServiceError> {
        self.require_kind(puskesmas, InstitutionKind::Puskesmas)?;
        Ok(self.repository.requests_for(puskesmas, filter, page)?)
    }

    pub fn summary_for_puskesmas(
        &self,
        puskesmas: &InstitutionId,
    ) -> Result<PuskesmasSummary, InterventionServiceError> {
        self.require_kind(puskesmas, InstitutionKind::Puskesmas)?;

        Ok(PuskesmasSummary {
            puskesmas: puskesmas.clone(),
            total_requests: self.repository.count_requests(puskesmas, None)?,
            handled: self.repository.count_interventions(puskesmas)?,
            pending: self
                .repository
                .count_requests(puskesmas, Some(RequestStatus::Pending))?,
        })
    }

    fn require_kind(
        &self,
        id: &InstitutionId,
        expected: InstitutionKind,
    ) -> Result<(), InterventionServiceError> {
        let institution = self
            .directory
            .find(id)?
            .ok_or_else(|| InterventionServiceError::UnknownInstitution(id.clone()))?;

        if institution.kind != expected {
            return Err(match expected {
                InstitutionKind::School => InterventionServiceError::NotASchool(id.clone()),
                InstitutionKind::Puskesmas => InterventionServiceError::NotAPuskesmas(id.clone()),
            });
        }
        Ok(())
    }
}

/// Error raised by the intervention service.
#[derive(Debug, thiserror::Error)]
pub enum InterventionServiceError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Store(#[from] InterventionStoreError),
    #[error("institution {0:?} is not registered")]
    UnknownInstitution(InstitutionId),
    #[error("institution {0:?} is not a school")]
    NotASchool(InstitutionId),
    #[error("institution {0:?} is not a puskesmas")]
    NotAPuskesmas(InstitutionId),
    #[error("request {request:?} was already handled ({})", status.label())]
    AlreadyHandled {
        request: RequestId,
        status: RequestStatus,
    },
}
