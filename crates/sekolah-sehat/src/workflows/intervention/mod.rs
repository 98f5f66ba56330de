//! School to puskesmas intervention request workflow.

pub mod domain;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Intervention, InterventionId, InterventionOutcome, InterventionRequest, NewRequest, Page,
    PageRequest, PuskesmasSummary, RequestFilter, RequestId, RequestStatus,
};
pub use repository::{InterventionRepository, InterventionStoreError};
pub use service::{InterventionService, InterventionServiceError};
