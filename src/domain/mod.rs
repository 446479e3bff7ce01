pub mod day;
pub mod error;

pub use day::{
    BUILD_FILE, DayFile, DayFileContent, DayNumber, INPUT_EXAMPLE_FILE, INPUT_FILE, RESOURCE_FILE,
};
pub use error::AppError;
