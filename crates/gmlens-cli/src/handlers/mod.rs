pub mod analyze;
pub mod demo;
pub mod report;
