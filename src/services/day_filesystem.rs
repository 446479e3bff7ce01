use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::{AppError, DayFile, DayFileContent, DayNumber};
use crate::ports::DayStore;

/// Filesystem-based day store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemDayStore {
    root: PathBuf,
}

impl FilesystemDayStore {
    /// Create a day store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a day store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl DayStore for FilesystemDayStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn day_exists(&self, day: DayNumber) -> bool {
        // symlink_metadata so that a dangling link still counts as occupied
        fs::symlink_metadata(self.day_path(day)).is_ok()
    }

    fn create_day_dir(&self, day: DayNumber) -> Result<bool, AppError> {
        fs::create_dir_all(&self.root)?;

        match fs::create_dir(self.day_path(day)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn write_files(&self, day: DayNumber, files: &[DayFile]) -> Result<(), AppError> {
        let day_dir = self.day_path(day);

        for file in files {
            let path = day_dir.join(&file.name);
            match &file.content {
                DayFileContent::Placeholder => {
                    // Append mode creates the file but never truncates it.
                    OpenOptions::new().create(true).append(true).open(&path)?;
                }
                DayFileContent::Text(text) => fs::write(&path, text)?,
            }
            debug!("wrote {}", path.display());
        }

        Ok(())
    }
}
