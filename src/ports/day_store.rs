//! Filesystem operations on day directories.
//!
//! Directory naming is owned by `domain::day`; this port owns only the I/O.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, DayFile, DayNumber};

/// Port for reading and creating day directories under a root.
pub trait DayStore {
    /// Directory under which day directories are created.
    fn root(&self) -> &Path;

    /// Absolute path of the directory for `day`.
    fn day_path(&self, day: DayNumber) -> PathBuf {
        self.root().join(day.dir_name())
    }

    /// Check whether any filesystem entry already occupies the day's name.
    fn day_exists(&self, day: DayNumber) -> bool;

    /// Atomically create the day directory.
    ///
    /// Returns `Ok(false)` when an entry with that name already exists.
    /// Missing ancestors of the root are created.
    fn create_day_dir(&self, day: DayNumber) -> Result<bool, AppError>;

    /// Write generated files into an existing day directory.
    fn write_files(&self, day: DayNumber, files: &[DayFile]) -> Result<(), AppError>;
}
