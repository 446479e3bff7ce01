use std::path::{Path, PathBuf};

use log::info;

use crate::app::AppContext;
use crate::domain::{AppError, DayNumber};
use crate::ports::{DayStore, DayTemplateStore};

/// Result of scaffolding a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayOutcome {
    /// The directory was created and populated.
    Created { dir_name: String, path: PathBuf },
    /// An entry with the day's name already existed; nothing was written.
    AlreadyExists { dir_name: String, path: PathBuf },
}

impl DayOutcome {
    /// Directory name, e.g. `day07`.
    pub fn dir_name(&self) -> &str {
        match self {
            DayOutcome::Created { dir_name, .. } | DayOutcome::AlreadyExists { dir_name, .. } => {
                dir_name
            }
        }
    }

    /// Full path of the day directory.
    pub fn path(&self) -> &Path {
        match self {
            DayOutcome::Created { path, .. } | DayOutcome::AlreadyExists { path, .. } => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, DayOutcome::Created { .. })
    }
}

/// Execute the create-day command.
///
/// Renders every artifact first, then claims the directory atomically and
/// writes the files. An existing entry short-circuits without writes.
pub fn execute<S, T>(ctx: &AppContext<S, T>, day: DayNumber) -> Result<DayOutcome, AppError>
where
    S: DayStore,
    T: DayTemplateStore,
{
    let dir_name = day.dir_name();
    let path = ctx.store().day_path(day);

    if ctx.store().day_exists(day) {
        info!("{} already exists, skipping", path.display());
        return Ok(DayOutcome::AlreadyExists { dir_name, path });
    }

    let files = ctx.templates().render_day(day)?;

    // Lost a race with another invocation after the existence check.
    if !ctx.store().create_day_dir(day)? {
        info!("{} was created concurrently, skipping", path.display());
        return Ok(DayOutcome::AlreadyExists { dir_name, path });
    }

    ctx.store().write_files(day, &files)?;

    Ok(DayOutcome::Created { dir_name, path })
}
