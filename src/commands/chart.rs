use tauri::{AppHandle, State};

use crate::commands::dashboard::build_dashboard_view;
use crate::models::DashboardView;
use crate::services::chart_engine;
use crate::state::AppState;

#[tauri::command]
pub async fn select_user(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    user_name: String,
) -> Result<DashboardView, String> {
    let mut tracker = state.tracker.lock().map_err(|e| e.to_string())?;

    tracker.selected_user = Some(user_name);
    chart_engine::sync_chart(&app_handle, &mut tracker);

    Ok(build_dashboard_view(&tracker))
}
