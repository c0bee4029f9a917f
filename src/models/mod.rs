pub mod chart;
pub mod dashboard;
pub mod entry;
pub mod table;

pub use chart::*;
pub use dashboard::*;
pub use entry::*;
pub use table::*;
