pub mod clock;
pub mod grading;
pub mod parser;
pub mod uploads;
