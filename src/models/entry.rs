use serde::{Deserialize, Serialize};

// Field names stay camelCase through serde: this struct is both the persisted
// value under the "workoutEntries" key and the IPC payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    pub user_name: String,
    pub workout_type: String,
    pub workout_minutes: f64,
}

/// Activity catalog offered in the form and filter selects. Entries are not
/// validated against it; a free-text type round-trips untouched.
pub const WORKOUT_TYPES: [&str; 10] = [
    "Running",
    "Walking",
    "Cycling",
    "Swimming",
    "Weightlifting",
    "Yoga",
    "Pilates",
    "HIIT",
    "Dance",
    "Martial Arts",
];

/// Sample data written to a fresh store on first launch.
pub fn get_seed_entries() -> Vec<WorkoutEntry> {
    vec![
        WorkoutEntry {
            user_name: "John Doe".to_string(),
            workout_type: "Running".to_string(),
            workout_minutes: 30.0,
        },
        WorkoutEntry {
            user_name: "John Doe".to_string(),
            workout_type: "Cycling".to_string(),
            workout_minutes: 45.0,
        },
        WorkoutEntry {
            user_name: "Jane Smith".to_string(),
            workout_type: "Swimming".to_string(),
            workout_minutes: 60.0,
        },
        WorkoutEntry {
            user_name: "Jane Smith".to_string(),
            workout_type: "Running".to_string(),
            workout_minutes: 20.0,
        },
        WorkoutEntry {
            user_name: "Mike Johnson".to_string(),
            workout_type: "Yoga".to_string(),
            workout_minutes: 50.0,
        },
        WorkoutEntry {
            user_name: "Mike Johnson".to_string(),
            workout_type: "Cycling".to_string(),
            workout_minutes: 40.0,
        },
    ]
}
