mod cli;
mod demo;
mod infra;
mod screen;

use sekolah_sehat::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
