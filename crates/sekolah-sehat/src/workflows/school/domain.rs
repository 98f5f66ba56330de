use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::directory::InstitutionId;

/// The four UKS service scopes a school is stratified on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceScope {
    HealthEducation,
    HealthService,
    SchoolEnvironment,
    UksManagement,
}

impl ServiceScope {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::HealthEducation,
            Self::HealthService,
            Self::SchoolEnvironment,
            Self::UksManagement,
        ]
    }

    /// Key persisted by the surrounding stores.
    pub const fn key(self) -> &'static str {
        match self {
            Self::HealthEducation => "HEALTH_EDUCATION",
            Self::HealthService => "HEALTH_SERVICE",
            Self::SchoolEnvironment => "SCHOOL_ENVIRONMENT",
            Self::UksManagement => "UKS_MANAGEMENT",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HealthEducation => "Pendidikan Kesehatan",
            Self::HealthService => "Pelayanan Kesehatan",
            Self::SchoolEnvironment => "Pembinaan Lingkungan Sekolah Sehat",
            Self::UksManagement => "Manajemen UKS",
        }
    }
}

/// Accreditation ladder: Minimal < Standar < Optimal < Paripurna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StratificationTier {
    Minimal,
    Standar,
    Optimal,
    Paripurna,
}

impl StratificationTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Minimal, Self::Standar, Self::Optimal, Self::Paripurna]
    }

    pub const fn rank(self) -> u8 {
        match self {
            Self::Minimal => 1,
            Self::Standar => 2,
            Self::Optimal => 3,
            Self::Paripurna => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Standar => "Standar",
            Self::Optimal => "Optimal",
            Self::Paripurna => "Paripurna",
        }
    }
}

/// Identifier wrapper for survey indicators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

/// One boolean indicator of the stratification instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub id: QuestionId,
    pub indicator: String,
}

/// The configured indicators for one (scope, tier) cell of the instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub scope: ServiceScope,
    pub tier: StratificationTier,
    pub questions: Vec<SurveyQuestion>,
}

/// A school's submitted answers for one (scope, tier) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub institution: InstitutionId,
    pub scope: ServiceScope,
    pub tier: StratificationTier,
    pub answers: BTreeMap<QuestionId, bool>,
}

/// One tier of a scope survey as seen by the engine: the configured
/// questions plus the submitted answers, if any were submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSurvey {
    pub tier: StratificationTier,
    pub questions: Vec<SurveyQuestion>,
    pub answers: Option<BTreeMap<QuestionId, bool>>,
}

/// Everything the engine needs to stratify one scope of one school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSurvey {
    pub institution: InstitutionId,
    pub scope: ServiceScope,
    pub tiers: Vec<TierSurvey>,
}

impl ScopeSurvey {
    pub fn tier(&self, tier: StratificationTier) -> Option<&TierSurvey> {
        self.tiers.iter().find(|entry| entry.tier == tier)
    }
}

/// Raw answer counts for one tier, kept alongside every result so callers
/// can see why a tier was or was not satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub tier: StratificationTier,
    pub defined: usize,
    pub answered: usize,
    pub affirmative: usize,
    pub satisfied: bool,
}

/// Outcome of stratifying one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StratificationResult {
    pub scope: ServiceScope,
    pub score: u32,
    pub score_category: StratificationTier,
    pub tier_achieved: StratificationTier,
    pub breakdown: Vec<TierBreakdown>,
}

/// Outcome of the strict single-tier qualification check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierQualification {
    pub tier: StratificationTier,
    pub qualified: bool,
    pub breakdown: Vec<TierBreakdown>,
}

/// Whole-school stratification across the four scopes. The overall tier is
/// the minimum achieved tier, so one lagging scope caps the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolStratification {
    pub institution: InstitutionId,
    pub scopes: Vec<StratificationResult>,
    pub overall_tier: StratificationTier,
}
