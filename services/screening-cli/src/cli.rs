use clap::{Parser, Subcommand};
use sekolah_sehat::config::AppConfig;
use sekolah_sehat::error::AppError;
use sekolah_sehat::telemetry;

use crate::demo::{run_demo, run_stratify, DemoArgs, StratifyArgs};
use crate::screen::{run_nutrition, run_screen, NutritionArgs, ScreenArgs};

#[derive(Parser, Debug)]
#[command(
    name = "Sekolah Sehat Screening",
    about = "Score school health screenings and stratify UKS services from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a penjaringan cohort CSV and render the summary
    Screen(ScreenArgs),
    /// Classify one child's measurements, optionally with a full risk profile
    Nutrition(NutritionArgs),
    /// Run the demo survey store through the stratification engine
    Stratify(StratifyArgs),
    /// Run an end-to-end demo covering every screening workflow (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Screen(args) => run_screen(args, &config),
        Command::Nutrition(args) => run_nutrition(args, &config),
        Command::Stratify(args) => run_stratify(args, &config),
        Command::Demo(args) => run_demo(args, &config),
    }
}
