use crate::domain::{AppError, DayFile, DayNumber};
use crate::ports::DayTemplateStore;

/// Mock template store returning canned files or a canned failure.
pub struct MockDayTemplateStore {
    files: Vec<DayFile>,
    failure: Option<String>,
}

impl MockDayTemplateStore {
    pub fn with_files(files: Vec<DayFile>) -> Self {
        Self { files, failure: None }
    }

    pub fn failing(reason: &str) -> Self {
        Self { files: Vec::new(), failure: Some(reason.to_string()) }
    }
}

impl DayTemplateStore for MockDayTemplateStore {
    fn render_day(&self, day: DayNumber) -> Result<Vec<DayFile>, AppError> {
        match &self.failure {
            Some(reason) => Err(AppError::TemplateRender {
                template: day.source_file_name(),
                reason: reason.clone(),
            }),
            None => Ok(self.files.clone()),
        }
    }
}
