use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::directory::InstitutionId;
use crate::scoring::{BehaviourResponses, NutritionAssessment, WageCategory};

/// Identifier wrapper for registered families.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FamilyId(pub String);

/// Identifier wrapper for family members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Laki-laki",
            Self::Female => "Perempuan",
        }
    }
}

/// Relation of a member to the head of household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Head,
    Spouse,
    Child,
    Other,
}

impl Relation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Head => "Kepala Keluarga",
            Self::Spouse => "Istri/Suami",
            Self::Child => "Anak",
            Self::Other => "Lainnya",
        }
    }

    pub const fn is_child(self) -> bool {
        matches!(self, Self::Child)
    }
}

/// A registered household, keyed by its head of household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub id: FamilyId,
    pub head_name: String,
    pub contact: String,
    pub registered_on: NaiveDate,
}

/// Measurement snapshot taken at enrolment, stored with the member so the
/// classification can be re-read without re-measuring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub assessment: NutritionAssessment,
    pub recorded_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: MemberId,
    pub family: FamilyId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub relation: Relation,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub monthly_income: f64,
    pub school: Option<InstitutionId>,
    pub birth_weight_kg: Option<f64>,
    pub nutrition: NutritionRecord,
    pub behaviour: Option<BehaviourResponses>,
}

/// Intake payload for registering a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRegistration {
    pub head_name: String,
    pub contact: String,
    pub registered_on: NaiveDate,
}

/// Intake payload for enrolling one member, including the measurements the
/// nutrition snapshot is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberIntake {
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub relation: Relation,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub monthly_income: f64,
    pub school: Option<InstitutionId>,
    pub birth_weight_kg: Option<f64>,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub measured_on: NaiveDate,
    pub behaviour: Option<BehaviourResponses>,
}

/// Household income figures with the wage category they map to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyWageSummary {
    pub family: FamilyId,
    pub household_size: u32,
    pub total_income: f64,
    pub income_per_capita: f64,
    pub category: WageCategory,
}
