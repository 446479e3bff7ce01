pub mod create_day;
