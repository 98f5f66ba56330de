use super::domain::{Family, FamilyId, FamilyMember, MemberId};

/// Storage abstraction for the family registry so the service can be
/// exercised in isolation.
pub trait FamilyRepository: Send + Sync {
    fn insert_family(&self, family: Family) -> Result<Family, FamilyStoreError>;
    fn update_family(&self, family: Family) -> Result<(), FamilyStoreError>;
    fn find_family_by_head(&self, head_name: &str) -> Result<Option<Family>, FamilyStoreError>;
    fn fetch_family(&self, id: &FamilyId) -> Result<Option<Family>, FamilyStoreError>;
    fn insert_member(&self, member: FamilyMember) -> Result<FamilyMember, FamilyStoreError>;
    fn fetch_member(&self, id: &MemberId) -> Result<Option<FamilyMember>, FamilyStoreError>;
    fn members_of(&self, family: &FamilyId) -> Result<Vec<FamilyMember>, FamilyStoreError>;
}

/// Error enumeration for family store failures.
#[derive(Debug, thiserror::Error)]
pub enum FamilyStoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("family store unavailable: {0}")]
    Unavailable(String),
}
