use tauri::{AppHandle, State};

use crate::commands::dashboard::build_dashboard_view;
use crate::models::{DashboardView, WorkoutEntry, WORKOUT_TYPES};
use crate::services::chart_engine;
use crate::state::AppState;

/// Appends a new entry and persists the full sequence. Field presence is
/// enforced by the form before this is invoked; values themselves are not
/// validated. The submitting user becomes the chart selection.
#[tauri::command]
pub async fn submit_workout(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    user_name: String,
    workout_type: String,
    workout_minutes: f64,
) -> Result<DashboardView, String> {
    let mut tracker = state.tracker.lock().map_err(|e| e.to_string())?;

    tracker.entries.push(WorkoutEntry {
        user_name: user_name.clone(),
        workout_type,
        workout_minutes,
    });

    let conn = rusqlite::Connection::open(&state.db_path).map_err(|e| e.to_string())?;
    crate::database::queries::save_entries(&conn, &tracker.entries).map_err(|e| e.to_string())?;

    tracker.current_page = 1;
    tracker.selected_user = Some(user_name);
    chart_engine::sync_chart(&app_handle, &mut tracker);

    Ok(build_dashboard_view(&tracker))
}

#[tauri::command]
pub async fn get_workout_types() -> Result<Vec<String>, String> {
    Ok(WORKOUT_TYPES.iter().map(|t| t.to_string()).collect())
}
