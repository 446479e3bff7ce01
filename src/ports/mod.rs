mod day_store;
mod day_template_store;

pub use day_store::DayStore;
pub use day_template_store::DayTemplateStore;
