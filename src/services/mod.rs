pub mod chart_engine;
pub mod summary;
pub mod table_engine;
