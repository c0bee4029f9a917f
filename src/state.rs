use std::path::PathBuf;
use std::sync::Mutex;

use crate::models::WorkoutEntry;

/// Managed application state. Commands lock the tracker, run to completion
/// synchronously and release; nothing is held across an await.
pub struct AppState {
    pub db_path: PathBuf,
    pub tracker: Mutex<TrackerState>,
}

/// Entry store plus the view state the filter pipeline runs over.
pub struct TrackerState {
    pub entries: Vec<WorkoutEntry>,
    pub search_term: String,
    pub filter_type: String,
    pub current_page: usize,
    pub items_per_page: usize,
    pub selected_user: Option<String>,
    // True while the webview holds a rendered chart instance. It must be
    // torn down before the next render.
    pub chart_live: bool,
}

impl TrackerState {
    pub fn new(entries: Vec<WorkoutEntry>) -> Self {
        Self {
            entries,
            search_term: String::new(),
            filter_type: String::new(),
            current_page: 1,
            items_per_page: 5,
            selected_user: None,
            chart_live: false,
        }
    }

    // Changing any filter criterion restarts browsing from page 1.

    pub fn set_search_term(&mut self, search_term: String) {
        self.search_term = search_term;
        self.current_page = 1;
    }

    pub fn set_filter_type(&mut self, filter_type: String) {
        self.filter_type = filter_type;
        self.current_page = 1;
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page;
        self.current_page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::table_engine;

    fn numbered_entries(n: usize) -> Vec<WorkoutEntry> {
        (0..n)
            .map(|i| WorkoutEntry {
                user_name: format!("User {}", i),
                workout_type: "Running".to_string(),
                workout_minutes: i as f64,
            })
            .collect()
    }

    #[test]
    fn page_size_change_mid_browse_resets_to_page_one() {
        // 12 entries at 5 per page, browsing page 2.
        let mut tracker = TrackerState::new(numbered_entries(12));
        tracker.current_page = 2;

        tracker.set_items_per_page(10);
        assert_eq!(tracker.current_page, 1);
        assert_eq!(tracker.items_per_page, 10);

        let view = table_engine::build_table_view(
            &tracker.entries,
            &tracker.search_term,
            &tracker.filter_type,
            tracker.current_page,
            tracker.items_per_page,
        );
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.rows[0].user_name, "User 0");
    }

    #[test]
    fn search_term_change_resets_to_page_one() {
        let mut tracker = TrackerState::new(numbered_entries(12));
        tracker.current_page = 3;

        tracker.set_search_term("user 1".to_string());
        assert_eq!(tracker.current_page, 1);
        assert_eq!(tracker.search_term, "user 1");
    }

    #[test]
    fn filter_type_change_resets_to_page_one() {
        let mut tracker = TrackerState::new(numbered_entries(12));
        tracker.current_page = 2;

        tracker.set_filter_type("Running".to_string());
        assert_eq!(tracker.current_page, 1);
        assert_eq!(tracker.filter_type, "Running");
    }
}
