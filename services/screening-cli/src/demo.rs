use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Args;

use sekolah_sehat::config::AppConfig;
use sekolah_sehat::directory::InstitutionId;
use sekolah_sehat::error::AppError;
use sekolah_sehat::scoring::BehaviourResponses;
use sekolah_sehat::workflows::family::{
    FamilyRegistration, FamilyService, Gender, MemberIntake, Relation,
};
use sekolah_sehat::workflows::penjaringan::PenjaringanImporter;
use sekolah_sehat::workflows::school::{
    AnswerSet, SchoolStratificationService, SchoolStratificationView, ServiceScope,
    StratificationTier, SurveyCatalog, SurveyRepository,
};

use crate::infra::{InMemoryFamilyStore, InMemorySurveyStore};
use crate::screen::{render_cohort, render_risk_profile};

#[derive(Args, Debug)]
pub(crate) struct StratifyArgs {
    /// School name shown in the report header
    #[arg(long, default_value = "SDN 1 Demo")]
    pub(crate) school: String,
    /// Seed affirmative answers up to this tier for every scope
    #[arg(long, default_value = "paripurna", value_parser = crate::infra::parse_tier)]
    pub(crate) up_to: StratificationTier,
    /// Stratification date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Reporting date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Optional penjaringan CSV to score instead of the built-in sample
    #[arg(long)]
    pub(crate) sheet: Option<PathBuf>,
    /// Regional minimum wage (UMR) in rupiah
    #[arg(long, default_value_t = 2_000_000.0)]
    pub(crate) umr: f64,
    /// Skip the family intake portion of the demo
    #[arg(long)]
    pub(crate) skip_family: bool,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            today: None,
            sheet: None,
            umr: 2_000_000.0,
            skip_family: false,
        }
    }
}

const SAMPLE_SHEET: &str = "\
Nama,Kelas,Tinggi (cm),Berat (kg),Berat Lahir (kg)
Siti Santoso,4A,128,26,\"4,5\"
Andi Wijaya,4A,140,33,3.1
Rina Putri,4B,\"132,5\",\"29,8\",
Joko Susilo,5A,150,52,3.4
,5A,141,35,
Dewi Lestari,6A,155,48,2.9
";

pub(crate) fn run_stratify(args: StratifyArgs, config: &AppConfig) -> Result<(), AppError> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let repository = Arc::new(InMemorySurveyStore::seeded());
    let service = SchoolStratificationService::new(repository, &config.scoring);
    let institution = InstitutionId("sch-demo-001".to_string());

    for scope in ServiceScope::ordered() {
        seed_uniform_answers(&service, &institution, scope, args.up_to)?;
    }

    let report = service.school_stratification(&institution, date)?;
    let view = SchoolStratificationView::from(&report);

    if args.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("report serialization failed: {err}"),
        }
        return Ok(());
    }

    render_school_report(&args.school, &view);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    println!("Sekolah Sehat screening demo ({today})");

    if !args.skip_family {
        println!("\nFamily intake");
        run_family_segment(config, args.umr, today)?;
    }

    println!("\nPenjaringan cohort screening");
    let cohort = match &args.sheet {
        Some(path) => {
            println!("Data source: {}", path.display());
            PenjaringanImporter::from_path(path, &config.scoring)?
        }
        None => {
            println!("Data source: built-in sample sheet");
            PenjaringanImporter::from_reader(Cursor::new(SAMPLE_SHEET), &config.scoring)?
        }
    };
    render_cohort(&cohort, false);

    println!("\nSchool service stratification");
    let repository = Arc::new(InMemorySurveyStore::seeded());
    let service = SchoolStratificationService::new(repository, &config.scoring);
    let institution = InstitutionId("sch-demo-001".to_string());

    // Mixed seeding so the chain walk is visible in the output: the
    // weakest scope caps the school.
    let seeding = [
        (ServiceScope::HealthEducation, StratificationTier::Paripurna),
        (ServiceScope::HealthService, StratificationTier::Optimal),
        (ServiceScope::SchoolEnvironment, StratificationTier::Standar),
        (ServiceScope::UksManagement, StratificationTier::Paripurna),
    ];
    for (scope, up_to) in seeding {
        seed_uniform_answers(&service, &institution, scope, up_to)?;
    }

    let report = service.school_stratification(&institution, today)?;
    render_school_report("SDN 1 Demo", &SchoolStratificationView::from(&report));

    Ok(())
}

fn run_family_segment(config: &AppConfig, umr: f64, today: NaiveDate) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryFamilyStore::default());
    let service = FamilyService::new(repository, config.scoring.clone());

    let family = service.register_family(FamilyRegistration {
        head_name: "Budi Santoso".to_string(),
        contact: "0812-1111-2222".to_string(),
        registered_on: today,
    })?;
    println!("- Registered family {} (head {})", family.id.0, family.head_name);

    let intakes = [
        MemberIntake {
            name: "Budi Santoso".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1988, 4, 12).unwrap_or(today),
            gender: Gender::Male,
            relation: Relation::Head,
            education: Some("SMA".to_string()),
            occupation: Some("Buruh pabrik".to_string()),
            monthly_income: 2_500_000.0,
            school: None,
            birth_weight_kg: None,
            height_cm: 170.0,
            weight_kg: 70.0,
            measured_on: today,
            behaviour: None,
        },
        MemberIntake {
            name: "Sari Santoso".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 9, 3).unwrap_or(today),
            gender: Gender::Female,
            relation: Relation::Spouse,
            education: Some("SMA".to_string()),
            occupation: Some("Pedagang".to_string()),
            monthly_income: 1_500_000.0,
            school: None,
            birth_weight_kg: None,
            height_cm: 158.0,
            weight_kg: 52.0,
            measured_on: today,
            behaviour: None,
        },
        MemberIntake {
            name: "Siti Santoso".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2016, 2, 21).unwrap_or(today),
            gender: Gender::Female,
            relation: Relation::Child,
            education: None,
            occupation: None,
            monthly_income: 0.0,
            school: Some(InstitutionId("sch-demo-001".to_string())),
            birth_weight_kg: Some(4.5),
            height_cm: 128.0,
            weight_kg: 26.0,
            measured_on: today,
            behaviour: Some(BehaviourResponses {
                eat_frequency: 2,
                drink_frequency: 1,
                physical_activity: 1,
                sleep_quality: 3,
                hygiene_practice: 4,
            }),
        },
    ];

    let mut child = None;
    for intake in intakes {
        let member = service.enroll_member(&family.id, intake)?;
        println!(
            "- Enrolled {} ({}): IMT {:.1}, {}",
            member.name,
            member.relation.label(),
            member.nutrition.assessment.bmi,
            member.nutrition.assessment.status.label()
        );
        if member.relation.is_child() {
            child = Some(member);
        }
    }

    let summary = service.family_wage_summary(&family.id, umr)?;
    println!(
        "- Household income Rp{:.0} across {} members (Rp{:.0} per capita) -> {}",
        summary.total_income,
        summary.household_size,
        summary.income_per_capita,
        summary.category.label()
    );

    if let Some(child) = child {
        let profile = service.member_risk_profile(&child.id)?;
        render_risk_profile(&profile);
    }

    Ok(())
}

/// Seeds every configured cell of one scope: affirmative answers through
/// `up_to`, negative above it.
fn seed_uniform_answers<R>(
    service: &SchoolStratificationService<R>,
    institution: &InstitutionId,
    scope: ServiceScope,
    up_to: StratificationTier,
) -> Result<(), AppError>
where
    R: SurveyRepository + 'static,
{
    let catalog = SurveyCatalog::standard();
    for tier in StratificationTier::ordered() {
        let Some(set) = catalog.question_set(scope, tier) else {
            continue;
        };
        let answers = set
            .questions
            .iter()
            .map(|question| (question.id.clone(), tier <= up_to))
            .collect();
        service.submit_answers(AnswerSet {
            institution: institution.clone(),
            scope,
            tier,
            answers,
        })?;
    }
    Ok(())
}

pub(crate) fn render_school_report(school: &str, view: &SchoolStratificationView) {
    println!("Stratification report for {school}");
    println!("Overall tier: {}", view.overall_tier);

    for scope in &view.scopes {
        println!("\n{}", scope.scope_label);
        println!("- score {} -> category {}", scope.score, scope.score_category);
        println!("- tier achieved: {}", scope.tier_achieved);
        for tier in &scope.tiers {
            let note = if tier.satisfied { "" } else { " [not satisfied]" };
            println!(
                "  - {}: {}/{} affirmative, {} answered{}",
                tier.tier, tier.affirmative, tier.defined, tier.answered, note
            );
        }
    }
}
