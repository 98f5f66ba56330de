use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::directory::InstitutionId;
use crate::workflows::family::MemberId;

/// Identifier wrapper for intervention requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub String);

/// Identifier wrapper for recorded interventions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterventionId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Menunggu",
            Self::Accepted => "Ditangani",
            Self::Declined => "Ditolak",
        }
    }
}

/// A school's request for a puskesmas to intervene for one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionRequest {
    pub id: RequestId,
    pub school: InstitutionId,
    pub puskesmas: InstitutionId,
    pub member: MemberId,
    pub complaint: String,
    pub requested_on: NaiveDate,
    pub status: RequestStatus,
}

/// The puskesmas answer to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intervention {
    pub id: InterventionId,
    pub request: RequestId,
    pub recommendation: String,
    pub program: String,
    pub recorded_on: NaiveDate,
}

/// Intake payload for opening a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRequest {
    pub school: InstitutionId,
    pub puskesmas: InstitutionId,
    pub member: MemberId,
    pub complaint: String,
    pub requested_on: NaiveDate,
}

/// Intake payload for answering a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionOutcome {
    pub recommendation: String,
    pub program: String,
    pub recorded_on: NaiveDate,
}

/// Status and date window filter for request listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RequestFilter {
    pub fn matches(&self, request: &InterventionRequest) -> bool {
        if let Some(status) = self.status {
            if request.status != status {
                return false;
            }
        }
        if let Some(from) = self.from {
            if request.requested_on < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if request.requested_on > to {
                return false;
            }
        }
        true
    }
}

/// One-based pagination request. Out-of-range values are clamped rather
/// than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl PageRequest {
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.max(1),
        }
    }

    pub fn offset(self) -> usize {
        let normalized = self.normalized();
        (normalized.page as usize - 1) * normalized.per_page as usize
    }
}

/// One page of results with the total count behind the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.total + self.per_page as usize - 1) / self.per_page as usize
        }
    }
}

/// Workload counts for one puskesmas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuskesmasSummary {
    pub puskesmas: InstitutionId,
    pub total_requests: usize,
    pub handled: usize,
    pub pending: usize,
}
