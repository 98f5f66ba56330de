use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use sekolah_sehat::config::AppConfig;
use sekolah_sehat::error::AppError;
use sekolah_sehat::scoring::{
    aggregate_child_risk, classify_nutrition, nutrition_severity, BehaviourResponses,
    ChildRiskProfile, NutritionAssessment,
};
use sekolah_sehat::workflows::penjaringan::{
    CohortScreening, CohortSummary, PenjaringanImporter, ScreenedChild, SkippedRow,
};

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Penjaringan sheet to score (CSV with Indonesian headers)
    pub(crate) sheet: PathBuf,
    /// Only list children flagged for follow-up
    #[arg(long)]
    pub(crate) flagged_only: bool,
    /// Emit the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct NutritionArgs {
    /// Height in centimetres
    #[arg(long)]
    pub(crate) height_cm: f64,
    /// Weight in kilograms
    #[arg(long)]
    pub(crate) weight_kg: f64,
    /// Birth weight in kilograms; together with the behaviour answers this
    /// enables the risk profile
    #[arg(long)]
    pub(crate) birth_weight_kg: Option<f64>,
    /// Behaviour survey answer: how often the child eats per day
    #[arg(long)]
    pub(crate) eat_frequency: Option<u8>,
    /// Behaviour survey answer: how often the child drinks per day
    #[arg(long)]
    pub(crate) drink_frequency: Option<u8>,
    /// Behaviour survey answer: physical activity
    #[arg(long)]
    pub(crate) physical_activity: Option<u8>,
    /// Behaviour survey answer: sleep quality
    #[arg(long)]
    pub(crate) sleep_quality: Option<u8>,
    /// Behaviour survey answer: hygiene practice
    #[arg(long)]
    pub(crate) hygiene_practice: Option<u8>,
    /// Emit the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Serialize)]
struct ScreenReport<'a> {
    summary: CohortSummary,
    screened: &'a [ScreenedChild],
    skipped: &'a [SkippedRow],
}

#[derive(Serialize)]
struct NutritionReport {
    assessment: NutritionAssessment,
    group: &'static str,
    nutrition_severity: u8,
    risk: Option<ChildRiskProfile>,
}

pub(crate) fn run_screen(args: ScreenArgs, config: &AppConfig) -> Result<(), AppError> {
    let cohort = PenjaringanImporter::from_path(&args.sheet, &config.scoring)?;
    tracing::info!(
        sheet = %args.sheet.display(),
        screened = cohort.screened.len(),
        skipped = cohort.skipped.len(),
        "penjaringan sheet scored"
    );

    if args.json {
        let report = ScreenReport {
            summary: cohort.summary(),
            screened: &cohort.screened,
            skipped: &cohort.skipped,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("report serialization failed: {err}"),
        }
        return Ok(());
    }

    render_cohort(&cohort, args.flagged_only);
    Ok(())
}

pub(crate) fn run_nutrition(args: NutritionArgs, config: &AppConfig) -> Result<(), AppError> {
    let assessment = classify_nutrition(&config.scoring.bmi, args.height_cm, args.weight_kg)?;
    let severity = nutrition_severity(assessment.status);

    let responses = match (
        args.eat_frequency,
        args.drink_frequency,
        args.physical_activity,
        args.sleep_quality,
        args.hygiene_practice,
    ) {
        (Some(eat), Some(drink), Some(activity), Some(sleep), Some(hygiene)) => {
            Some(BehaviourResponses {
                eat_frequency: eat,
                drink_frequency: drink,
                physical_activity: activity,
                sleep_quality: sleep,
                hygiene_practice: hygiene,
            })
        }
        _ => None,
    };

    let risk = match (args.birth_weight_kg, responses.as_ref()) {
        (Some(birth_weight_kg), Some(responses)) => Some(aggregate_child_risk(
            &config.scoring,
            birth_weight_kg,
            responses,
            assessment.status,
        )?),
        _ => None,
    };

    if args.json {
        let report = NutritionReport {
            assessment,
            group: assessment.status.group(),
            nutrition_severity: severity,
            risk,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("report serialization failed: {err}"),
        }
        return Ok(());
    }

    println!(
        "IMT {:.1} -> {} ({})",
        assessment.bmi,
        assessment.status.label(),
        assessment.status.group()
    );
    println!("Nutrition severity: {severity} of 3");

    match risk {
        Some(profile) => render_risk_profile(&profile),
        None => {
            if args.birth_weight_kg.is_some() || responses.is_some() {
                println!(
                    "Risk profile needs the birth weight and all five behaviour answers; skipped."
                );
            }
        }
    }
    Ok(())
}

pub(crate) fn render_cohort(cohort: &CohortScreening, flagged_only: bool) {
    let summary = cohort.summary();
    println!(
        "Sheet rows: {} ({} screened, {} skipped)",
        summary.total_rows, summary.screened, summary.skipped
    );
    println!("Flagged for follow-up: {}", summary.flagged);

    println!("\nStatus distribution");
    for entry in &summary.statuses {
        println!("- {}: {} ({:.0}%)", entry.label, entry.count, entry.share * 100.0);
    }

    if !cohort.skipped.is_empty() {
        println!("\nSkipped rows");
        for row in &cohort.skipped {
            match &row.name {
                Some(name) => println!("- line {} ({}): {}", row.line, name, row.reason.describe()),
                None => println!("- line {}: {}", row.line, row.reason.describe()),
            }
        }
    }

    println!("\nScreened children");
    for child in &cohort.screened {
        if flagged_only && !child.flagged {
            continue;
        }
        let marker = if child.flagged { " [follow-up]" } else { "" };
        println!(
            "- {} ({}) | IMT {:.1} | {} | {}{}",
            child.name,
            child.class,
            child.assessment.bmi,
            child.assessment.status.group(),
            child.assessment.status.label(),
            marker
        );
    }
}

pub(crate) fn render_risk_profile(profile: &ChildRiskProfile) {
    println!("\nChild risk profile");
    println!(
        "- Birth weight: {} (score {})",
        profile.birth_weight.label(),
        profile.birth_weight.score()
    );
    println!("- Diet: {}", profile.behaviour.diet.label());
    println!("- Physical activity: {}", profile.behaviour.physical_activity.label());
    println!("- Sleep quality: {}", profile.behaviour.sleep_quality.label());
    println!("- Hygiene practice: {}", profile.behaviour.hygiene_practice.label());
    println!(
        "- Nutrition: {} (severity {} of 3)",
        profile.nutrition_status.label(),
        profile.nutrition_severity
    );
    println!(
        "- Needs follow-up: {}",
        if profile.at_risk { "yes" } else { "no" }
    );
}
