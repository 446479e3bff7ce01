mod mock_day_template_store;

pub use mock_day_store::MockDayStore;
pub use mock_day_template_store::MockDayTemplateStore;
