//! Core planner logic for Skedyul.
//! This crate is the single source of truth for planner data and invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::grade::Grade;
pub use model::profile::Profile;
pub use model::settings::{NotificationSettings, Settings, Theme, ThemeColors};
pub use model::subject::{Subject, Term};
pub use model::task::{Priority, Task};
pub use model::teacher::Teacher;
pub use model::{generate_id, ModelValidationError, Record, RecordId, Singleton};
pub use query::format::{
    current_time_string, format_date, format_full_date, format_time, today, today_string,
};
pub use query::grades::{calculate_grade_percentage, grade_color, grade_letter};
pub use query::schedule::{
    day_of_week, random_subject_color, short_day_of_week, sort_by_start_time, today_subjects,
};
pub use query::tasks::{
    calendar_marks, filter_tasks, overdue_tasks, priority_color, priority_label,
    search_filter_tasks, task_counts, upcoming_tasks, CalendarMark, TaskCounts, TaskFilter,
};
pub use repo::collection_repo::{
    CollectionRepository, GradeRepository, KvCollectionRepository, SubjectRepository,
    TaskRepository, TeacherRepository,
};
pub use repo::singleton_repo::{ProfileRepository, SettingsRepository, SingletonRepository};
pub use search::text::{search_subjects, search_tasks, search_teachers};
pub use service::backup::{BackupError, PlannerSnapshot};
pub use service::planner_service::{Dashboard, PlannerService};
pub use store::{KeyValueStore, SqliteKeyValueStore, StoreError, StoreKey, StoreResult};
pub use validate::{is_valid_date, is_valid_email, is_valid_time};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
