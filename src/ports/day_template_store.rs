use crate::domain::{AppError, DayFile, DayNumber};

/// Port for producing the artifacts of a day directory.
pub trait DayTemplateStore {
    /// Render every artifact for `day`, in creation order.
    fn render_day(&self, day: DayNumber) -> Result<Vec<DayFile>, AppError>;
}
