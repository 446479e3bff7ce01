//! Shared testing harness for `daykit` integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use std::fs;
use std::path::{Path, PathBuf};

/// Byte-exact artifacts for day 7.
pub const DAY07_SOURCE: &str = include_str!("../fixtures/day07/day07.cpp");
pub const DAY07_BUILD: &str = include_str!("../fixtures/day07/CMakeLists.txt");
pub const RESOURCES: &str = include_str!("../fixtures/day07/resources.qrc");

/// Testing harness providing an isolated environment for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Temporary directory owning every path of this context.
    pub fn temp(&self) -> &TempDir {
        &self.root
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `daykit` binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `daykit` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("daykit").expect("Failed to locate daykit binary");
        cmd.current_dir(dir.as_ref()).env_remove("DAYKIT_ROOT").env_remove("RUST_LOG");
        cmd
    }

    /// Path to a day directory in the work directory.
    pub fn day_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Read a file inside a day directory.
    pub fn read_day_file(&self, day: &str, file: &str) -> String {
        fs::read_to_string(self.day_path(day).join(file))
            .unwrap_or_else(|e| panic!("Failed to read {day}/{file}: {e}"))
    }

    /// Sorted file names inside a day directory.
    pub fn day_entries(&self, day: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.day_path(day))
            .expect("Failed to read day directory")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Assert that a day directory contains exactly the five generated files.
    pub fn assert_day_scaffolded(&self, day: &str) {
        let mut expected = vec![
            "CMakeLists.txt".to_string(),
            format!("{day}.cpp"),
            "input.txt".to_string(),
            "input_example.txt".to_string(),
            "resources.qrc".to_string(),
        ];
        expected.sort();
        assert_eq!(self.day_entries(day), expected, "{day} should hold the generated files");
    }
}
