pub mod catalog;
pub mod ics;
pub mod log;
pub mod plan;
