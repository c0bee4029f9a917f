// Prevents additional console window on Windows (silent launch).
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod commands;
mod database;
mod models;
mod services;
mod state;
mod utils;

use std::sync::Mutex;
use tauri::Manager;

fn main() {
    utils::config::load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .setup(|app| {
            let app_handle = app.handle();
            let data_dir = match utils::config::data_dir_override() {
                Some(dir) => dir,
                None => app_handle
                    .path()
                    .app_data_dir()
                    .expect("Failed to get app data dir"),
            };

            // Create data directory if it doesn't exist
            std::fs::create_dir_all(&data_dir).expect("Failed to create data directory");

            // Initialize database and rehydrate the entry store
            let db_path = data_dir.join("fittrack.db");
            let conn = database::init_database(&db_path).expect("Failed to initialize database");
            let entries = database::queries::load_or_seed_entries(&conn)
                .expect("Failed to load workout entries");
            log::info!("loaded {} workout entries from {}", entries.len(), db_path.display());

            app.manage(state::AppState {
                db_path,
                tracker: Mutex::new(state::TrackerState::new(entries)),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Dashboard commands
            commands::dashboard::get_dashboard,
            // Entry commands
            commands::entry::submit_workout,
            commands::entry::get_workout_types,
            // Table commands
            commands::table::set_search_term,
            commands::table::set_filter_type,
            commands::table::set_items_per_page,
            commands::table::change_page,
            // Chart commands
            commands::chart::select_user,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
