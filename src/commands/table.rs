use tauri::State;

use crate::commands::dashboard::build_dashboard_view;
use crate::models::DashboardView;
use crate::services::table_engine;
use crate::state::AppState;

#[tauri::command]
pub async fn set_search_term(
    state: State<'_, AppState>,
    search_term: String,
) -> Result<DashboardView, String> {
    let mut tracker = state.tracker.lock().map_err(|e| e.to_string())?;

    tracker.set_search_term(search_term);

    Ok(build_dashboard_view(&tracker))
}

/// Empty string means all workout types.
#[tauri::command]
pub async fn set_filter_type(
    state: State<'_, AppState>,
    filter_type: String,
) -> Result<DashboardView, String> {
    let mut tracker = state.tracker.lock().map_err(|e| e.to_string())?;

    tracker.set_filter_type(filter_type);

    Ok(build_dashboard_view(&tracker))
}

#[tauri::command]
pub async fn set_items_per_page(
    state: State<'_, AppState>,
    items_per_page: usize,
) -> Result<DashboardView, String> {
    if items_per_page == 0 {
        return Err("items per page must be positive".to_string());
    }

    let mut tracker = state.tracker.lock().map_err(|e| e.to_string())?;

    tracker.set_items_per_page(items_per_page);

    Ok(build_dashboard_view(&tracker))
}

/// Pager step. The pager buttons are disabled at the boundaries; a target
/// outside [1, total_pages] leaves the page unchanged.
#[tauri::command]
pub async fn change_page(
    state: State<'_, AppState>,
    delta: i64,
) -> Result<DashboardView, String> {
    let mut tracker = state.tracker.lock().map_err(|e| e.to_string())?;

    let filtered = table_engine::filter_entries(
        &tracker.entries,
        &tracker.search_term,
        &tracker.filter_type,
    );
    let total_pages = table_engine::total_pages(filtered.len(), tracker.items_per_page);

    let target = tracker.current_page as i64 + delta;
    if target >= 1 && target as usize <= total_pages {
        tracker.current_page = target as usize;
    }

    Ok(build_dashboard_view(&tracker))
}
