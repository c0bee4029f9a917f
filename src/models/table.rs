use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub user_name: String,
    pub workout_type: String,
    pub workout_minutes: f64,
    pub workout_count: usize,
    pub total_minutes: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
}
