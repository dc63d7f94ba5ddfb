//! Selection of recently completed tasks

use chrono::{DateTime, Duration, Utc};

use crate::Task;

/// Keep the tasks that were completed in the `days` days before `now`, most recent first.
///
/// Both ends of the window are inclusive. Tasks that are not completed, or that are "completed in the future", are dropped.
/// Tasks that have the same completion date keep their relative order.
pub fn filter_tasks_completed_within_days(tasks: &[Task], days: u32, now: DateTime<Utc>) -> Vec<Task> {
    let window = Duration::days(i64::from(days));

    let mut recent: Vec<Task> = tasks.iter()
        .filter(|task| match task.completed_at() {
            None => false,
            Some(completed_at) => {
                let age = now.signed_duration_since(*completed_at);
                age >= Duration::zero() && age <= window
            },
        })
        .cloned()
        .collect();

    // sort_by is stable
    recent.sort_by(|a, b| b.completed_at().cmp(&a.completed_at()));
    recent
}
