pub mod chart;
pub mod dashboard;
pub mod entry;
pub mod table;
