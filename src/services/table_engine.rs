use crate::models::{TableRow, TableView, WorkoutEntry};
use crate::services::summary;

/// Entries whose user name contains `search_term` (case-folded) and, when
/// `filter_type` is non-empty, whose type matches it exactly. Original order
/// is preserved; no sort is ever applied.
pub fn filter_entries(
    entries: &[WorkoutEntry],
    search_term: &str,
    filter_type: &str,
) -> Vec<WorkoutEntry> {
    let needle = search_term.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            let name_match = e.user_name.to_lowercase().contains(&needle);
            let type_match = filter_type.is_empty() || e.workout_type == filter_type;
            name_match && type_match
        })
        .cloned()
        .collect()
}

/// Never 0: an empty filtered set still shows "Page 1 of 1".
pub fn total_pages(filtered_len: usize, items_per_page: usize) -> usize {
    filtered_len.div_ceil(items_per_page).max(1)
}

/// One contiguous page of the filtered set. Slicing past the end yields an
/// empty page; page numbers themselves are kept in range by the command guard.
pub fn paginate(
    filtered: &[WorkoutEntry],
    current_page: usize,
    items_per_page: usize,
) -> Vec<WorkoutEntry> {
    let start = current_page.saturating_sub(1) * items_per_page;
    filtered
        .iter()
        .skip(start)
        .take(items_per_page)
        .cloned()
        .collect()
}

/// Runs the filter pipeline and decorates each row with its user's count and
/// total minutes, both computed over the full entry sequence.
pub fn build_table_view(
    entries: &[WorkoutEntry],
    search_term: &str,
    filter_type: &str,
    current_page: usize,
    items_per_page: usize,
) -> TableView {
    let filtered = filter_entries(entries, search_term, filter_type);
    let total_pages = total_pages(filtered.len(), items_per_page);

    let rows = paginate(&filtered, current_page, items_per_page)
        .into_iter()
        .map(|e| TableRow {
            workout_count: summary::workouts_for_user(entries, &e.user_name),
            total_minutes: summary::total_minutes_for_user(entries, &e.user_name),
            user_name: e.user_name,
            workout_type: e.workout_type,
            workout_minutes: e.workout_minutes,
        })
        .collect();

    TableView {
        rows,
        current_page,
        total_pages,
        items_per_page,
    }
}
