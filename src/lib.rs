//! daykit: scaffold per-day puzzle directories with source, build and resource stubs.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::{AppContext, commands::create_day};
use ports::DayTemplateStore;
use services::{EmbeddedDayTemplateStore, FilesystemDayStore};

pub use app::commands::create_day::DayOutcome;
pub use domain::{AppError, DayFile, DayFileContent, DayNumber};

/// Scaffold `dayNN/` in the current directory.
///
/// Prints a confirmation line when the directory is created; an existing
/// directory is left untouched and reported as [`DayOutcome::AlreadyExists`].
pub fn create_day(day: impl Into<DayNumber>) -> Result<DayOutcome, AppError> {
    let store = FilesystemDayStore::current()?;
    let outcome = run_create_day(store, day.into())?;
    announce(&outcome);
    Ok(outcome)
}

/// Scaffold `dayNN/` under `root` without printing.
///
/// Missing ancestors of `root` are created.
pub fn create_day_in(root: &Path, day: impl Into<DayNumber>) -> Result<DayOutcome, AppError> {
    let store = FilesystemDayStore::new(root.to_path_buf());
    run_create_day(store, day.into())
}

/// Render every artifact of a day without touching the filesystem.
pub fn render_day(day: impl Into<DayNumber>) -> Result<Vec<DayFile>, AppError> {
    EmbeddedDayTemplateStore::new().render_day(day.into())
}

/// Print the confirmation line for a newly created day.
pub(crate) fn announce(outcome: &DayOutcome) {
    if outcome.is_created() {
        println!("Created directory: {}", outcome.dir_name());
    }
}

fn run_create_day(store: FilesystemDayStore, day: DayNumber) -> Result<DayOutcome, AppError> {
    let ctx = AppContext::new(store, EmbeddedDayTemplateStore::new());
    create_day::execute(&ctx, day)
}
