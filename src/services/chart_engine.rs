use tauri::{AppHandle, Emitter, Manager};

use crate::models::{ChartData, ChartDataset, WorkoutEntry};
use crate::state::TrackerState;

/// Sums one user's minutes per workout type. Labels keep the first-seen
/// order of the user's entries; values stay in lock-step with labels.
pub fn aggregate_user_minutes(entries: &[WorkoutEntry], user_name: &str) -> (Vec<String>, Vec<f64>) {
    let mut labels: Vec<String> = Vec::new();
    let mut values: Vec<f64> = Vec::new();

    for entry in entries.iter().filter(|e| e.user_name == user_name) {
        match labels.iter().position(|l| *l == entry.workout_type) {
            Some(i) => values[i] += entry.workout_minutes,
            None => {
                labels.push(entry.workout_type.clone());
                values.push(entry.workout_minutes);
            }
        }
    }

    (labels, values)
}

pub fn build_chart_data(labels: Vec<String>, values: Vec<f64>) -> ChartData {
    ChartData {
        labels,
        datasets: vec![ChartDataset {
            label: "Workout Minutes".to_string(),
            data: values,
            background_color: "rgba(54, 162, 235, 0.5)".to_string(),
            border_color: "rgba(54, 162, 235, 1)".to_string(),
            border_width: 1,
        }],
    }
}

/// Events to emit to move the webview chart from its current state to the
/// current selection. A live chart is always torn down before anything else;
/// a render only happens for a selected user.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartTransition {
    pub teardown: bool,
    pub render: bool,
}

pub fn plan_chart_transition(chart_live: bool, has_selection: bool) -> ChartTransition {
    ChartTransition {
        teardown: chart_live,
        render: has_selection,
    }
}

/// Brings the webview chart in line with the current selection. Absent window
/// means no rendering surface, so this silently no-ops.
pub fn sync_chart(app_handle: &AppHandle, tracker: &mut TrackerState) {
    let Some(window) = app_handle.get_webview_window("main") else {
        return;
    };

    let plan = plan_chart_transition(tracker.chart_live, tracker.selected_user.is_some());

    if plan.teardown {
        if let Err(e) = window.emit("chart:teardown", ()) {
            log::warn!("Failed to emit chart teardown: {}", e);
        }
        tracker.chart_live = false;
    }

    if plan.render {
        let Some(user) = tracker.selected_user.clone() else {
            return;
        };
        let (labels, values) = aggregate_user_minutes(&tracker.entries, &user);
        let data = build_chart_data(labels, values);
        match window.emit("chart:render", &data) {
            Ok(()) => tracker.chart_live = true,
            Err(e) => log::warn!("Failed to emit chart render: {}", e),
        }
    }
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
    fn sums_per_type_in_first_seen_order() {
        let entries = vec![
            entry("A", "Run", 10.0),
            entry("A", "Run", 20.0),
            entry("A", "Swim", 5.0),
        ];

        let (labels, values) = aggregate_user_minutes(&entries, "A");
        assert_eq!(labels, vec!["Run", "Swim"]);
        assert_eq!(values, vec![30.0, 5.0]);
    }

    #[test]
    fn only_the_selected_users_entries_count() {
        let entries = vec![
            entry("A", "Run", 10.0),
            entry("B", "Run", 99.0),
            entry("A", "Yoga", 40.0),
        ];

        let (labels, values) = aggregate_user_minutes(&entries, "A");
        assert_eq!(labels, vec!["Run", "Yoga"]);
        assert_eq!(values, vec![10.0, 40.0]);
    }

    #[test]
    fn unknown_user_yields_an_empty_series() {
        let entries = vec![entry("A", "Run", 10.0)];
        let (labels, values) = aggregate_user_minutes(&entries, "Z");
        assert!(labels.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn live_chart_is_torn_down_before_a_replacement_render() {
        let plan = plan_chart_transition(true, true);
        assert_eq!(
            plan,
            ChartTransition {
                teardown: true,
                render: true,
            }
        );
    }

    #[test]
    fn deselection_tears_down_without_rendering() {
        let plan = plan_chart_transition(true, false);
        assert_eq!(
            plan,
            ChartTransition {
                teardown: true,
                render: false,
            }
        );
    }

    #[test]
    fn no_chart_and_no_selection_emits_nothing() {
        let plan = plan_chart_transition(false, false);
        assert_eq!(
            plan,
            ChartTransition {
                teardown: false,
                render: false,
            }
        );
    }

    #[test]
    fn first_selection_renders_without_teardown() {
        let plan = plan_chart_transition(false, true);
        assert_eq!(
            plan,
            ChartTransition {
                teardown: false,
                render: true,
            }
        );
    }

    #[test]
    fn chart_payload_uses_bar_display_constants() {
        let data = build_chart_data(vec!["Run".to_string()], vec![30.0]);
        assert_eq!(data.datasets.len(), 1);

        let dataset = &data.datasets[0];
        assert_eq!(dataset.label, "Workout Minutes");
        assert_eq!(dataset.data, vec![30.0]);
        assert_eq!(dataset.background_color, "rgba(54, 162, 235, 0.5)");
        assert_eq!(dataset.border_color, "rgba(54, 162, 235, 1)");
        assert_eq!(dataset.border_width, 1);
    }
}
