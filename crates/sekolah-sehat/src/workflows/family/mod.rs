//! Family registry and member screening built on the scoring core.

pub mod domain;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Family, FamilyId, FamilyMember, FamilyRegistration, FamilyWageSummary, Gender, MemberId,
    MemberIntake, NutritionRecord, Relation,
};
pub use repository::{FamilyRepository, FamilyStoreError};
pub use service::{FamilyService, FamilyServiceError};
