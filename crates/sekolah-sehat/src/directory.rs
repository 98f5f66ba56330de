use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered institutions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstitutionId(pub String);

/// The two institution roles in the surveillance programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionKind {
    School,
    Puskesmas,
}

impl InstitutionKind {
    /// Identifier persisted by the surrounding stores.
    pub const fn kind_id(self) -> u8 {
        match self {
            Self::School => 1,
            Self::Puskesmas => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::School => "Sekolah",
            Self::Puskesmas => "Puskesmas",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    pub id: InstitutionId,
    pub name: String,
    pub kind: InstitutionKind,
}

/// Lookup seam for the institution registry; identity and persistence
/// belong to the external store, so implementations live with callers.
pub trait InstitutionDirectory: Send + Sync {
    fn find(&self, id: &InstitutionId) -> Result<Option<Institution>, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("institution directory unavailable: {0}")]
    Unavailable(String),
}
