use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::scoring::{
    aggregate_child_risk, categorize_wage, classify_nutrition, ChildRiskProfile, ScoringConfig,
    ScoringError, WageCategory,
};

use super::domain::{
    Family, FamilyId, FamilyMember, FamilyRegistration, FamilyWageSummary, MemberId, MemberIntake,
    NutritionRecord,
};
use super::repository::{FamilyRepository, FamilyStoreError};

static FAMILY_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static MEMBER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_family_id() -> FamilyId {
    let id = FAMILY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    FamilyId(format!("fam-{id:06}"))
}

fn next_member_id() -> MemberId {
    let id = MEMBER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    MemberId(format!("mem-{id:06}"))
}

/// Service composing the family store and the scoring core: enrolment
/// computes the nutrition snapshot, wage and risk lookups re-read it.
pub struct FamilyService<R> {
    repository: Arc<R>,
    scoring: ScoringConfig,
}

impl<R> FamilyService<R>
where
    R: FamilyRepository + 'static,
{
    pub fn new(repository: Arc<R>, scoring: ScoringConfig) -> Self {
        Self {
            repository,
            scoring,
        }
    }

    /// Upserts a family by head-of-household name: re-registering an
    /// existing head updates the contact and keeps the id.
    pub fn register_family(
        &self,
        registration: FamilyRegistration,
    ) -> Result<Family, FamilyServiceError> {
        if let Some(mut existing) = self
            .repository
            .find_family_by_head(&registration.head_name)?
        {
            existing.contact = registration.contact;
            self.repository.update_family(existing.clone())?;
            return Ok(existing);
        }

        let family = Family {
            id: next_family_id(),
            head_name: registration.head_name,
            contact: registration.contact,
            registered_on: registration.registered_on,
        };
        let stored = self.repository.insert_family(family)?;
        Ok(stored)
    }

    /// Enrolls a member, computing the BMI and nutrition snapshot from the
    /// intake measurements before anything is persisted.
    pub fn enroll_member(
        &self,
        family: &FamilyId,
        intake: MemberIntake,
    ) -> Result<FamilyMember, FamilyServiceError> {
        self.repository
            .fetch_family(family)?
            .ok_or(FamilyStoreError::NotFound)?;

        let assessment =
            classify_nutrition(&self.scoring.bmi, intake.height_cm, intake.weight_kg)?;

        let member = FamilyMember {
            id: next_member_id(),
            family: family.clone(),
            name: intake.name,
            birth_date: intake.birth_date,
            gender: intake.gender,
            relation: intake.relation,
            education: intake.education,
            occupation: intake.occupation,
            monthly_income: intake.monthly_income,
            school: intake.school,
            birth_weight_kg: intake.birth_weight_kg,
            nutrition: NutritionRecord {
                height_cm: intake.height_cm,
                weight_kg: intake.weight_kg,
                assessment,
                recorded_on: intake.measured_on,
            },
            behaviour: intake.behaviour,
        };

        let stored = self.repository.insert_member(member)?;
        Ok(stored)
    }

    /// Wage category for one member's income, divided across their current
    /// household.
    pub fn member_wage_category(
        &self,
        member: &MemberId,
        regional_minimum_wage: f64,
    ) -> Result<WageCategory, FamilyServiceError> {
        let member = self
            .repository
            .fetch_member(member)?
            .ok_or(FamilyStoreError::NotFound)?;
        let household = self.repository.members_of(&member.family)?;

        let category = categorize_wage(
            &self.scoring.wage,
            member.monthly_income,
            household.len() as u32,
            regional_minimum_wage,
        )?;
        Ok(category)
    }

    /// Summed household income against the regional minimum wage.
    pub fn family_wage_summary(
        &self,
        family: &FamilyId,
        regional_minimum_wage: f64,
    ) -> Result<FamilyWageSummary, FamilyServiceError> {
        self.repository
            .fetch_family(family)?
            .ok_or(FamilyStoreError::NotFound)?;
        let members = self.repository.members_of(family)?;

        let household_size = members.len() as u32;
        let total_income: f64 = members.iter().map(|member| member.monthly_income).sum();
        let category = categorize_wage(
            &self.scoring.wage,
            total_income,
            household_size,
            regional_minimum_wage,
        )?;

        Ok(FamilyWageSummary {
            family: family.clone(),
            household_size,
            total_income,
            income_per_capita: total_income / f64::from(household_size),
            category,
        })
    }

    /// Child-risk aggregation for an enrolled member. Requires the birth
    /// weight and behaviour survey recorded at enrolment.
    pub fn member_risk_profile(
        &self,
        member: &MemberId,
    ) -> Result<ChildRiskProfile, FamilyServiceError> {
        let member = self
            .repository
            .fetch_member(member)?
            .ok_or(FamilyStoreError::NotFound)?;

        let birth_weight = member
            .birth_weight_kg
            .ok_or_else(|| FamilyServiceError::BirthWeightMissing(member.id.clone()))?;
        let behaviour = member
            .behaviour
            .as_ref()
            .ok_or_else(|| FamilyServiceError::BehaviourSurveyMissing(member.id.clone()))?;

        let profile = aggregate_child_risk(
            &self.scoring,
            birth_weight,
            behaviour,
            member.nutrition.assessment.status,
        )?;
        Ok(profile)
    }
}

/// Error raised by the family service.
#[derive(Debug, thiserror::Error)]
pub enum FamilyServiceError {
    #[error(transparent)]
    Store(#[from] FamilyStoreError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error("family member {0:?} has no recorded behaviour survey")]
    BehaviourSurveyMissing(MemberId),
    #[error("family member {0:?} has no recorded birth weight")]
    BirthWeightMissing(MemberId),
}
