use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use super::common::*;
use crate::scoring::ScoringConfig;
use crate::workflows::school::domain::{
    AnswerSet, QuestionId, ServiceScope, StratificationTier,
};
use crate::workflows::school::engine::SurveyError;
use crate::workflows::school::repository::SurveyStoreError;
use crate::workflows::school::service::{SchoolServiceError, SchoolStratificationService};

fn computed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date")
}

#[test]
fn submit_rejects_missing_and_unknown_answers() {
    let (service, store) = build_service();
    let school = school();

    let mut incomplete = uniform_answers(
        &store,
        &school,
        ServiceScope::HealthEducation,
        StratificationTier::Minimal,
        true,
    );
    let removed = incomplete.answers.keys().next().cloned().expect("non-empty");
    incomplete.answers.remove(&removed);
    match service.submit_answers(incomplete) {
        Err(SchoolServiceError::Survey(SurveyError::UnansweredQuestion { question, .. })) => {
            assert_eq!(question, removed);
        }
        other => panic!("expected unanswered question, got {other:?}"),
    }

    let mut foreign = uniform_answers(
        &store,
        &school,
        ServiceScope::HealthEducation,
        StratificationTier::Minimal,
        true,
    );
    foreign
        .answers
        .insert(QuestionId("XX-MIN-9".to_string()), true);
    match service.submit_answers(foreign) {
        Err(SchoolServiceError::Survey(SurveyError::UnknownQuestion { question, .. })) => {
            assert_eq!(question.0, "XX-MIN-9");
        }
        other => panic!("expected unknown question, got {other:?}"),
    }
}

#[test]
fn submit_rejects_unconfigured_cells() {
    let store = Arc::new(MemorySurveyStore::default());
    let service = SchoolStratificationService::new(store, &ScoringConfig::default());

    let err = service
        .submit_answers(AnswerSet {
            institution: school(),
            scope: ServiceScope::HealthService,
            tier: StratificationTier::Minimal,
            answers: BTreeMap::new(),
        })
        .expect_err("instrument not configured");
    assert!(matches!(
        err,
        SchoolServiceError::Survey(SurveyError::QuestionSetMissing { .. })
    ));
}

#[test]
fn stratify_scope_persists_the_result() {
    let (service, store) = build_service();
    let school = school();
    answer_scope(&service, &store, &school, ServiceScope::UksManagement, true);

    let result = service
        .stratify_scope(&school, ServiceScope::UksManagement, computed_on())
        .expect("scope stratifies");
    assert_eq!(result.score, 7);
    assert_eq!(result.tier_achieved, StratificationTier::Paripurna);

    let stored = service
        .latest_result(&school, ServiceScope::UksManagement)
        .expect("store available")
        .expect("result persisted");
    assert_eq!(stored.result, result);
    assert_eq!(stored.computed_on, computed_on());
}

#[test]
fn school_report_overall_tier_is_the_weakest_scope() {
    let (service, store) = build_service();
    let school = school();
    for scope in ServiceScope::ordered() {
        answer_scope(&service, &store, &school, scope, true);
    }

    // Break HealthService at Standar: Minimal stays affirmative.
    let standar = uniform_answers(
        &store,
        &school,
        ServiceScope::HealthService,
        StratificationTier::Standar,
        false,
    );
    service.submit_answers(standar).expect("resubmission valid");

    let report = service
        .school_stratification(&school, computed_on())
        .expect("all scopes configured");
    assert_eq!(report.scopes.len(), 4);
    assert_eq!(report.overall_tier, StratificationTier::Minimal);

    let health_service = report
        .scopes
        .iter()
        .find(|result| result.scope == ServiceScope::HealthService)
        .expect("scope present");
    assert_eq!(health_service.tier_achieved, StratificationTier::Minimal);
}

#[test]
fn check_tier_surfaces_missing_answers_as_errors() {
    let (service, store) = build_service();
    let school = school();

    // Only Minimal answered; claiming Standar must fail loudly.
    service
        .submit_answers(uniform_answers(
            &store,
            &school,
            ServiceScope::SchoolEnvironment,
            StratificationTier::Minimal,
            true,
        ))
        .expect("submission valid");

    let err = service
        .check_tier(&school, ServiceScope::SchoolEnvironment, StratificationTier::Standar)
        .expect_err("standar answers missing");
    assert!(matches!(
        err,
        SchoolServiceError::Survey(SurveyError::AnswersMissing {
            tier: StratificationTier::Standar,
            ..
        })
    ));

    let qualification = service
        .check_tier(&school, ServiceScope::SchoolEnvironment, StratificationTier::Minimal)
        .expect("minimal answers complete");
    assert!(qualification.qualified);
}

#[test]
fn store_failures_propagate() {
    let service = SchoolStratificationService::new(
        Arc::new(UnavailableSurveyStore),
        &ScoringConfig::default(),
    );

    let err = service
        .stratify_scope(&school(), ServiceScope::HealthEducation, computed_on())
        .expect_err("store offline");
    assert!(matches!(
        err,
        SchoolServiceError::Store(SurveyStoreError::Unavailable(_))
    ));
}
