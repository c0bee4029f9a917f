use serde::{Deserialize, Serialize};

use crate::models::table::TableView;

/// Full view snapshot returned by every command that touches state. The
/// webview replaces its table, user list and selection from this in one go.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub table: TableView,
    pub users: Vec<String>,
    pub selected_user: Option<String>,
}
