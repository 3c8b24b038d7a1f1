//! Task views: upcoming, overdue, status filters and priority display.
//!
//! Due dates are `YYYY-MM-DD` text and are compared lexicographically
//! against today's date, which orders them chronologically.

use super::format::iso_date;
use crate::model::task::{Priority, Task};
use crate::search::text::search_tasks;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Default number of upcoming tasks shown on the dashboard.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Status filter offered by the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
    Overdue,
}

impl TaskFilter {
    /// Parses the lowercase filter names used by the task list.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

/// Calendar dot for one due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMark {
    pub completed: bool,
    pub dot_color: &'static str,
}

/// Task totals used by list headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub overdue: usize,
}

/// Incomplete tasks due today or later, earliest first, at most `limit`.
///
/// Tasks sharing a due date keep their collection order.
pub fn upcoming_tasks(tasks: &[Task], today: NaiveDate, limit: usize) -> Vec<Task> {
    let today = iso_date(today);
    let mut upcoming = tasks
        .iter()
        .filter(|task| !task.completed && task.due_date.as_str() >= today.as_str())
        .cloned()
        .collect::<Vec<_>>();
    upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    upcoming.truncate(limit);
    upcoming
}

/// Incomplete tasks due strictly before today, in collection order.
pub fn overdue_tasks(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    let today = iso_date(today);
    tasks
        .iter()
        .filter(|task| is_overdue(task, &today))
        .cloned()
        .collect()
}

pub fn filter_tasks(tasks: &[Task], filter: TaskFilter, today: NaiveDate) -> Vec<Task> {
    let today = iso_date(today);
    tasks
        .iter()
        .filter(|task| match filter {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
            TaskFilter::Overdue => is_overdue(task, &today),
        })
        .cloned()
        .collect()
}

/// Task list view: text search first, then the status filter.
///
/// An empty `query` skips the search step.
pub fn search_filter_tasks(
    tasks: &[Task],
    query: &str,
    filter: TaskFilter,
    today: NaiveDate,
) -> Vec<Task> {
    if query.is_empty() {
        return filter_tasks(tasks, filter, today);
    }
    filter_tasks(&search_tasks(tasks, query), filter, today)
}

/// One mark per due date, keyed by `YYYY-MM-DD`.
///
/// When several tasks share a date, the one latest in collection order sets
/// the mark.
pub fn calendar_marks(tasks: &[Task]) -> BTreeMap<String, CalendarMark> {
    tasks
        .iter()
        .map(|task| {
            let mark = CalendarMark {
                completed: task.completed,
                dot_color: if task.completed { "#10b981" } else { "#f59e0b" },
            };
            (task.due_date.clone(), mark)
        })
        .collect()
}

pub fn task_counts(tasks: &[Task], today: NaiveDate) -> TaskCounts {
    let today = iso_date(today);
    tasks.iter().fold(
        TaskCounts {
            total: tasks.len(),
            ..TaskCounts::default()
        },
        |mut counts, task| {
            if task.completed {
                counts.completed += 1;
            } else {
                counts.pending += 1;
            }
            if is_overdue(task, &today) {
                counts.overdue += 1;
            }
            counts
        },
    )
}

pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "#ef4444",
        Priority::Medium => "#f59e0b",
        Priority::Low => "#10b981",
    }
}

pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

fn is_overdue(task: &Task, today: &str) -> bool {
    !task.completed && task.due_date.as_str() < today
}
