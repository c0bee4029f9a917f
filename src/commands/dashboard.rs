use tauri::{AppHandle, State};

use crate::models::DashboardView;
use crate::services::{chart_engine, summary, table_engine};
use crate::state::{AppState, TrackerState};

#[tauri::command]
pub async fn get_dashboard(
    app_handle: AppHandle,
    state: State<'_, AppState>,
) -> Result<DashboardView, String> {
    let mut tracker = state.tracker.lock().map_err(|e| e.to_string())?;

    // A freshly loaded webview has no chart; re-render for any held selection.
    tracker.chart_live = false;
    chart_engine::sync_chart(&app_handle, &mut tracker);

    Ok(build_dashboard_view(&tracker))
}

/// The explicit recompute-and-redraw step: every mutating command finishes by
/// returning this snapshot, and the webview replaces what it shows.
pub(crate) fn build_dashboard_view(tracker: &TrackerState) -> DashboardView {
    DashboardView {
        table: table_engine::build_table_view(
            &tracker.entries,
            &tracker.search_term,
            &tracker.filter_type,
            tracker.current_page,
            tracker.items_per_page,
        ),
        users: summary::unique_users(&tracker.entries),
        selected_user: tracker.selected_user.clone(),
    }
}
