use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Name of the empty primary puzzle input file.
pub const INPUT_FILE: &str = "input.txt";
/// Name of the empty example puzzle input file.
pub const INPUT_EXAMPLE_FILE: &str = "input_example.txt";
/// Name of the generated build descriptor.
pub const BUILD_FILE: &str = "CMakeLists.txt";
/// Name of the generated resource manifest.
pub const RESOURCE_FILE: &str = "resources.qrc";

/// Identifier of a scaffolded day.
///
/// Formats as a two-digit, zero-padded label (`7` -> `07`). Values of 100
/// and above widen instead of being truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayNumber(u32);

impl DayNumber {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Zero-padded label substituted into names and templates.
    pub fn label(&self) -> String {
        format!("{:02}", self.0)
    }

    /// Directory name, e.g. `day07`.
    pub fn dir_name(&self) -> String {
        format!("day{}", self.label())
    }

    /// Source stub file name, e.g. `day07.cpp`.
    pub fn source_file_name(&self) -> String {
        format!("{}.cpp", self.dir_name())
    }
}

impl From<u32> for DayNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for DayNumber {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // `u32::from_str` accepts a leading '+'; day numbers are plain digits.
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidDayNumber(trimmed.to_string()));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| AppError::InvalidDayNumber(trimmed.to_string()))
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Content of a single generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayFileContent {
    /// Empty file, created if absent and never truncated.
    Placeholder,
    /// Fully rendered text, written as-is.
    Text(String),
}

/// A file generated inside a day directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFile {
    /// File name relative to the day directory.
    pub name: String,
    pub content: DayFileContent,
}

impl DayFile {
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self { name: name.into(), content: DayFileContent::Placeholder }
    }

    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name: name.into(), content: DayFileContent::Text(content.into()) }
    }

    /// Text content, or `None` for placeholders.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            DayFileContent::Text(text) => Some(text),
            DayFileContent::Placeholder => None,
        }
    }
}
