use std::collections::HashSet;

use crate::models::WorkoutEntry;

/// Number of entries belonging to `user_name`. Exact match, recomputed on
/// every view build.
pub fn workouts_for_user(entries: &[WorkoutEntry], user_name: &str) -> usize {
    entries.iter().filter(|e| e.user_name == user_name).count()
}

/// Summed minutes across all of `user_name`'s entries; 0 for an unknown user.
pub fn total_minutes_for_user(entries: &[WorkoutEntry], user_name: &str) -> f64 {
    entries
        .iter()
        .filter(|e| e.user_name == user_name)
        .map(|e| e.workout_minutes)
        .sum()
}

/// Distinct user names in first-occurrence order.
pub fn unique_users(entries: &[WorkoutEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(|e| e.user_name.clone())
        .filter(|u| seen.insert(u.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(user: &str, kind: &str, minutes: f64) -> WorkoutEntry {
        WorkoutEntry {
            user_name: user.to_string(),
            workout_type: kind.to_string(),
            workout_minutes: minutes,
        }
    }

    #[test]
    fn counts_and_totals_match_manual_sums() {
        let entries = vec![
            entry("Jane Smith", "Swimming", 60.0),
            entry("John Doe", "Running", 30.0),
            entry("Jane Smith", "Running", 20.0),
        ];

        assert_eq!(workouts_for_user(&entries, "Jane Smith"), 2);
        assert_eq!(total_minutes_for_user(&entries, "Jane Smith"), 80.0);
        assert_eq!(workouts_for_user(&entries, "John Doe"), 1);
        assert_eq!(total_minutes_for_user(&entries, "John Doe"), 30.0);
    }

    #[test]
    fn unknown_user_is_zero() {
        let entries = vec![entry("John Doe", "Running", 30.0)];
        assert_eq!(workouts_for_user(&entries, "Nobody"), 0);
        assert_eq!(total_minutes_for_user(&entries, "Nobody"), 0.0);
    }

    #[test]
    fn unique_users_keep_first_occurrence_order() {
        let entries = vec![
            entry("John Doe", "Running", 30.0),
            entry("Jane Smith", "Swimming", 60.0),
            entry("John Doe", "Cycling", 45.0),
            entry("Mike Johnson", "Yoga", 50.0),
        ];

        assert_eq!(
            unique_users(&entries),
            vec!["John Doe", "Jane Smith", "Mike Johnson"]
        );
    }

    #[test]
    fn empty_store_has_no_users() {
        assert!(unique_users(&[]).is_empty());
    }
}
