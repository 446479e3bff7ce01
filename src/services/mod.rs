mod day_filesystem;
mod embedded_day_template_store;

pub use day_filesystem::FilesystemDayStore;
pub use embedded_day_template_store::EmbeddedDayTemplateStore;
