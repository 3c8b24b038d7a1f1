//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose planner CRUD, singleton, backup and derivation calls to Dart
//!   via FRB.
//! - Exchange records as JSON text using the stored field names, so the UI
//!   shares one schema with the persisted data.
//! - Derivation calls are pure: they take record lists as JSON arrays and
//!   never open the database.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are returned inside [`PlannerResponse`], never thrown.
//! - Every call opens the configured database; there is no cached state
//!   besides the database path.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use skedyul_core::db::open_db;
use skedyul_core::query::format::parse_iso_date;
use skedyul_core::query::tasks::DEFAULT_UPCOMING_LIMIT;
use skedyul_core::{
    calculate_grade_percentage, core_version as core_version_inner, grade_color, grade_letter,
    init_logging as init_logging_inner, ping as ping_inner, CollectionRepository, Grade,
    PlannerService, Priority, Profile, Record, Settings, SqliteKeyValueStore, Subject, Task,
    TaskFilter, Teacher,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "skedyul.sqlite3";
const DB_PATH_ENV: &str = "SKEDYUL_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

type Service<'s> = PlannerService<'s, SqliteKeyValueStore<'s>>;

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Pins the database file used by every later call.
///
/// Must run before the first data call; later calls with the same path are
/// accepted, a different path is rejected. Returns an empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_db_path(path: String) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "db path cannot be empty".to_string();
    }
    let requested = PathBuf::from(trimmed);
    let active = DB_PATH.get_or_init(|| requested.clone());
    if *active == requested {
        String::new()
    } else {
        format!(
            "db path already set to `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        )
    }
}

/// Generic response envelope for planner calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// JSON payload (record list, record, snapshot) when the call returns data.
    pub payload_json: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl PlannerResponse {
    fn data(payload_json: String) -> Self {
        Self {
            ok: true,
            payload_json: Some(payload_json),
            message: String::new(),
        }
    }

    fn done(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            payload_json: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            payload_json: None,
            message: message.into(),
        }
    }

    fn from_result(call: &str, result: Result<Self, String>) -> Self {
        result.unwrap_or_else(|err| {
            log::warn!("event=ffi_call module=ffi status=error call={call}");
            Self::failure(format!("{call} failed: {err}"))
        })
    }
}

/// Score summary for one grade entry.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeSummary {
    pub percentage: f64,
    pub letter: String,
    pub color: String,
}

/// Collection names accepted by the `collection_*` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectionKind {
    Subjects,
    Teachers,
    Tasks,
    Grades,
}

impl CollectionKind {
    fn parse(value: &str) -> Result<Self, String> {
        match value.trim() {
            "subjects" => Ok(Self::Subjects),
            "teachers" => Ok(Self::Teachers),
            "tasks" => Ok(Self::Tasks),
            "grades" => Ok(Self::Grades),
            other => Err(format!(
                "unknown collection `{other}`; expected subjects|teachers|tasks|grades"
            )),
        }
    }
}

/// Lists one collection as a JSON array.
#[flutter_rust_bridge::frb(sync)]
pub fn collection_list(kind: String) -> PlannerResponse {
    let result = CollectionKind::parse(&kind).and_then(|kind| {
        with_service(|service| match kind {
            CollectionKind::Subjects => list_json(&service.subjects()),
            CollectionKind::Teachers => list_json(&service.teachers()),
            CollectionKind::Tasks => list_json(&service.tasks()),
            CollectionKind::Grades => list_json(&service.grades()),
        })
    });
    PlannerResponse::from_result("collection_list", result.map(PlannerResponse::data))
}

/// Validates and appends one record given as JSON.
///
/// The record must carry its id and `createdAt`; use [`new_record_id`] to
/// obtain an id.
#[flutter_rust_bridge::frb(sync)]
pub fn collection_add(kind: String, record_json: String) -> PlannerResponse {
    let result = CollectionKind::parse(&kind).and_then(|kind| {
        with_service(|service| match kind {
            CollectionKind::Subjects => add_json::<Subject>(&service.subjects(), &record_json),
            CollectionKind::Teachers => add_json::<Teacher>(&service.teachers(), &record_json),
            CollectionKind::Tasks => add_json::<Task>(&service.tasks(), &record_json),
            CollectionKind::Grades => add_json::<Grade>(&service.grades(), &record_json),
        })
    });
    PlannerResponse::from_result(
        "collection_add",
        result.map(|()| PlannerResponse::done("Record added.")),
    )
}

/// Replaces one record by id. Unknown ids succeed with a "not found" message.
#[flutter_rust_bridge::frb(sync)]
pub fn collection_update(kind: String, record_json: String) -> PlannerResponse {
    let result = CollectionKind::parse(&kind).and_then(|kind| {
        with_service(|service| match kind {
            CollectionKind::Subjects => update_json::<Subject>(&service.subjects(), &record_json),
            CollectionKind::Teachers => update_json::<Teacher>(&service.teachers(), &record_json),
            CollectionKind::Tasks => update_json::<Task>(&service.tasks(), &record_json),
            CollectionKind::Grades => update_json::<Grade>(&service.grades(), &record_json),
        })
    });
    PlannerResponse::from_result("collection_update", result.map(changed_response))
}

/// Deletes one record by id. Unknown ids succeed with a "not found" message.
#[flutter_rust_bridge::frb(sync)]
pub fn collection_delete(kind: String, id: String) -> PlannerResponse {
    let result = CollectionKind::parse(&kind).and_then(|kind| {
        with_service(|service| {
            let deleted = match kind {
                CollectionKind::Subjects => service.subjects().delete(&id),
                CollectionKind::Teachers => service.teachers().delete(&id),
                CollectionKind::Tasks => service.tasks().delete(&id),
                CollectionKind::Grades => service.grades().delete(&id),
            };
            deleted.map_err(|err| err.to_string())
        })
    });
    PlannerResponse::from_result("collection_delete", result.map(changed_response))
}

/// Toggles a task's completion flag.
#[flutter_rust_bridge::frb(sync)]
pub fn task_set_completed(id: String, completed: bool) -> PlannerResponse {
    let result = with_service(|service| {
        service
            .set_task_completed(&id, completed)
            .map_err(|err| err.to_string())
    });
    PlannerResponse::from_result("task_set_completed", result.map(changed_response))
}

#[flutter_rust_bridge::frb(sync)]
pub fn profile_get() -> PlannerResponse {
    let result = with_service(|service| to_json(&service.profile().get()));
    PlannerResponse::from_result("profile_get", result.map(PlannerResponse::data))
}

#[flutter_rust_bridge::frb(sync)]
pub fn profile_put(profile_json: String) -> PlannerResponse {
    let result = from_json::<Profile>(&profile_json).and_then(|profile| {
        with_service(|service| service.profile().put(&profile).map_err(|err| err.to_string()))
    });
    PlannerResponse::from_result(
        "profile_put",
        result.map(|()| PlannerResponse::done("Profile saved.")),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn settings_get() -> PlannerResponse {
    let result = with_service(|service| to_json(&service.settings().get()));
    PlannerResponse::from_result("settings_get", result.map(PlannerResponse::data))
}

#[flutter_rust_bridge::frb(sync)]
pub fn settings_put(settings_json: String) -> PlannerResponse {
    let result = from_json::<Settings>(&settings_json).and_then(|settings| {
        with_service(|service| {
            service
                .settings()
                .put(&settings)
                .map_err(|err| err.to_string())
        })
    });
    PlannerResponse::from_result(
        "settings_put",
        result.map(|()| PlannerResponse::done("Settings saved.")),
    )
}

/// Exports the whole planner as one JSON bundle.
#[flutter_rust_bridge::frb(sync)]
pub fn backup_export() -> PlannerResponse {
    let result = with_service(|service| service.backup_json().map_err(|err| err.to_string()));
    PlannerResponse::from_result("backup_export", result.map(PlannerResponse::data))
}

/// Overwrites the planner with a JSON bundle from [`backup_export`].
#[flutter_rust_bridge::frb(sync)]
pub fn backup_restore(bundle_json: String) -> PlannerResponse {
    let result = with_service(|service| {
        service
            .restore_json(&bundle_json)
            .map_err(|err| err.to_string())
    });
    PlannerResponse::from_result(
        "backup_restore",
        result.map(|()| PlannerResponse::done("Backup restored.")),
    )
}

/// Deletes all planner data.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_all() -> PlannerResponse {
    let result = with_service(|service| service.reset_all().map_err(|err| err.to_string()));
    PlannerResponse::from_result(
        "reset_all",
        result.map(|()| PlannerResponse::done("All data cleared.")),
    )
}

/// Home-screen read model for `today` (`YYYY-MM-DD`, device date when absent).
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard(today: Option<String>, upcoming_limit: Option<u32>) -> PlannerResponse {
    let limit = upcoming_limit.map_or(DEFAULT_UPCOMING_LIMIT, |value| value as usize);
    let result = resolve_today(today)
        .and_then(|today| with_service(|service| to_json(&service.dashboard(today, limit))));
    PlannerResponse::from_result("dashboard", result.map(PlannerResponse::data))
}

/// Returns a fresh record id for create flows.
#[flutter_rust_bridge::frb(sync)]
pub fn new_record_id() -> String {
    skedyul_core::generate_id()
}

/// Converts `HH:MM` to `H:MM AM|PM`.
#[flutter_rust_bridge::frb(sync)]
pub fn format_time(time: String) -> String {
    skedyul_core::format_time(&time)
}

#[flutter_rust_bridge::frb(sync)]
pub fn grade_summary(score: f64, max_score: f64) -> GradeSummary {
    let percentage = calculate_grade_percentage(score, max_score);
    GradeSummary {
        percentage,
        letter: grade_letter(percentage).to_string(),
        color: grade_color(percentage).to_string(),
    }
}

/// Subjects whose `name`, `room` or `notes` contain `query`, ignoring case.
///
/// `subjects_json` is a JSON array as returned by `collection_list`.
#[flutter_rust_bridge::frb(sync)]
pub fn search_subjects(subjects_json: String, query: String) -> PlannerResponse {
    let result = from_json::<Vec<Subject>>(&subjects_json)
        .and_then(|subjects| to_json(&skedyul_core::search_subjects(&subjects, &query)));
    PlannerResponse::from_result("search_subjects", result.map(PlannerResponse::data))
}

#[flutter_rust_bridge::frb(sync)]
pub fn search_teachers(teachers_json: String, query: String) -> PlannerResponse {
    let result = from_json::<Vec<Teacher>>(&teachers_json)
        .and_then(|teachers| to_json(&skedyul_core::search_teachers(&teachers, &query)));
    PlannerResponse::from_result("search_teachers", result.map(PlannerResponse::data))
}

#[flutter_rust_bridge::frb(sync)]
pub fn search_tasks(tasks_json: String, query: String) -> PlannerResponse {
    let result = from_json::<Vec<Task>>(&tasks_json)
        .and_then(|tasks| to_json(&skedyul_core::search_tasks(&tasks, &query)));
    PlannerResponse::from_result("search_tasks", result.map(PlannerResponse::data))
}

/// Task list view: search by `query`, then keep tasks matching `filter`
/// (`all`, `pending`, `completed` or `overdue`).
#[flutter_rust_bridge::frb(sync)]
pub fn filter_tasks(
    tasks_json: String,
    query: String,
    filter: String,
    today: Option<String>,
) -> PlannerResponse {
    let result = parse_filter(&filter).and_then(|filter| {
        let today = resolve_today(today)?;
        let tasks = from_json::<Vec<Task>>(&tasks_json)?;
        to_json(&skedyul_core::search_filter_tasks(&tasks, &query, filter, today))
    });
    PlannerResponse::from_result("filter_tasks", result.map(PlannerResponse::data))
}

#[flutter_rust_bridge::frb(sync)]
pub fn upcoming_tasks(
    tasks_json: String,
    today: Option<String>,
    limit: Option<u32>,
) -> PlannerResponse {
    let limit = limit.map_or(DEFAULT_UPCOMING_LIMIT, |value| value as usize);
    let result = resolve_today(today).and_then(|today| {
        let tasks = from_json::<Vec<Task>>(&tasks_json)?;
        to_json(&skedyul_core::upcoming_tasks(&tasks, today, limit))
    });
    PlannerResponse::from_result("upcoming_tasks", result.map(PlannerResponse::data))
}

#[flutter_rust_bridge::frb(sync)]
pub fn overdue_tasks(tasks_json: String, today: Option<String>) -> PlannerResponse {
    let result = resolve_today(today).and_then(|today| {
        let tasks = from_json::<Vec<Task>>(&tasks_json)?;
        to_json(&skedyul_core::overdue_tasks(&tasks, today))
    });
    PlannerResponse::from_result("overdue_tasks", result.map(PlannerResponse::data))
}

/// Due-date marks as a JSON object: `{"YYYY-MM-DD": {"completed", "dotColor"}}`.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_marks(tasks_json: String) -> PlannerResponse {
    let result = from_json::<Vec<Task>>(&tasks_json)
        .and_then(|tasks| to_json(&skedyul_core::calendar_marks(&tasks)));
    PlannerResponse::from_result("calendar_marks", result.map(PlannerResponse::data))
}

/// Subjects meeting on `today`, ordered by start time.
#[flutter_rust_bridge::frb(sync)]
pub fn today_subjects(subjects_json: String, today: Option<String>) -> PlannerResponse {
    let result = resolve_today(today).and_then(|today| {
        let subjects = from_json::<Vec<Subject>>(&subjects_json)?;
        let mut todays = skedyul_core::today_subjects(&subjects, today);
        skedyul_core::sort_by_start_time(&mut todays);
        to_json(&todays)
    });
    PlannerResponse::from_result("today_subjects", result.map(PlannerResponse::data))
}

/// Full weekday name for a `YYYY-MM-DD` date, `None` when the date is invalid.
#[flutter_rust_bridge::frb(sync)]
pub fn day_of_week(date: String) -> Option<String> {
    parse_iso_date(&date).map(|date| skedyul_core::day_of_week(date).to_string())
}

#[flutter_rust_bridge::frb(sync)]
pub fn short_day_of_week(date: String) -> Option<String> {
    parse_iso_date(&date).map(|date| skedyul_core::short_day_of_week(date).to_string())
}

/// Formats `YYYY-MM-DD` as e.g. `Mon, Jun 3`.
#[flutter_rust_bridge::frb(sync)]
pub fn format_date(date: String) -> Option<String> {
    skedyul_core::format_date(&date)
}

/// Formats `YYYY-MM-DD` as e.g. `Monday, June 3, 2024`.
#[flutter_rust_bridge::frb(sync)]
pub fn format_full_date(date: String) -> Option<String> {
    skedyul_core::format_full_date(&date)
}

#[flutter_rust_bridge::frb(sync)]
pub fn today_string() -> String {
    skedyul_core::today_string()
}

#[flutter_rust_bridge::frb(sync)]
pub fn current_time_string() -> String {
    skedyul_core::current_time_string()
}

#[flutter_rust_bridge::frb(sync)]
pub fn is_valid_time(time: String) -> bool {
    skedyul_core::is_valid_time(&time)
}

#[flutter_rust_bridge::frb(sync)]
pub fn is_valid_date(date: String) -> bool {
    skedyul_core::is_valid_date(&date)
}

#[flutter_rust_bridge::frb(sync)]
pub fn is_valid_email(email: String) -> bool {
    skedyul_core::is_valid_email(&email)
}

/// Display label for `low`/`medium`/`high`; `None` for other values.
#[flutter_rust_bridge::frb(sync)]
pub fn priority_label(priority: String) -> Option<String> {
    parse_priority(&priority).map(|priority| skedyul_core::priority_label(priority).to_string())
}

#[flutter_rust_bridge::frb(sync)]
pub fn priority_color(priority: String) -> Option<String> {
    parse_priority(&priority).map(|priority| skedyul_core::priority_color(priority).to_string())
}

/// Picks a palette color for a new subject.
#[flutter_rust_bridge::frb(sync)]
pub fn random_subject_color() -> String {
    skedyul_core::random_subject_color().to_string()
}

fn resolve_today(today: Option<String>) -> Result<NaiveDate, String> {
    match today.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => parse_iso_date(value).ok_or_else(|| format!("invalid date `{value}`")),
        None => Ok(skedyul_core::today()),
    }
}

fn parse_filter(value: &str) -> Result<TaskFilter, String> {
    TaskFilter::parse(value.trim()).ok_or_else(|| {
        format!("unknown filter `{value}`; expected all|pending|completed|overdue")
    })
}

fn parse_priority(value: &str) -> Option<Priority> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_string())).ok()
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_service<T>(f: impl FnOnce(&Service<'_>) -> Result<T, String>) -> Result<T, String> {
    let conn = open_db(resolve_db_path()).map_err(|err| format!("DB open failed: {err}"))?;
    let store =
        SqliteKeyValueStore::try_new(&conn).map_err(|err| format!("store init failed: {err}"))?;
    let service = PlannerService::new(&store);
    f(&service)
}

fn list_json<T: Record>(repo: &impl CollectionRepository<T>) -> Result<String, String> {
    to_json(&repo.list())
}

fn add_json<T: Record>(repo: &impl CollectionRepository<T>, json: &str) -> Result<(), String> {
    let record = from_json::<T>(json)?;
    record.validate().map_err(|err| err.to_string())?;
    repo.add(&record).map_err(|err| err.to_string())
}

fn update_json<T: Record>(repo: &impl CollectionRepository<T>, json: &str) -> Result<bool, String> {
    let record = from_json::<T>(json)?;
    record.validate().map_err(|err| err.to_string())?;
    repo.update(&record).map_err(|err| err.to_string())
}

fn changed_response(changed: bool) -> PlannerResponse {
    if changed {
        PlannerResponse::done("Saved.")
    } else {
        PlannerResponse::done("Record not found; nothing changed.")
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|err| format!("encode failed: {err}"))
}

fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|err| format!("invalid record JSON: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{
        backup_export, calendar_marks, collection_add, collection_delete, collection_list,
        collection_update, core_version, current_time_string, dashboard, day_of_week,
        filter_tasks, format_date, format_full_date, format_time, grade_summary, init_logging,
        is_valid_date, is_valid_email, is_valid_time, new_record_id, overdue_tasks, ping,
        priority_color, priority_label, profile_get, random_subject_color, search_subjects,
        search_tasks, search_teachers, short_day_of_week, task_set_completed, today_string,
        today_subjects, upcoming_tasks,
    };
    use std::sync::Mutex;

    // Tests share one database file; serialize their read-modify-write calls.
    static DB_LOCK: Mutex<()> = Mutex::new(());

    fn task_json(id: &str, title: &str, due: &str) -> String {
        serde_json::json!({
            "id": id,
            "title": title,
            "description": "",
            "subjectId": null,
            "dueDate": due,
            "priority": "medium",
            "completed": false,
            "createdAt": 1_717_200_000_000_i64
        })
        .to_string()
    }

    fn task_value(id: &str, title: &str, due: &str) -> serde_json::Value {
        serde_json::from_str(&task_json(id, title, due)).unwrap()
    }

    fn listed_ids(kind: &str) -> Vec<String> {
        let response = collection_list(kind.to_string());
        assert!(response.ok, "{}", response.message);
        let items: Vec<serde_json::Value> =
            serde_json::from_str(&response.payload_json.expect("list payload")).unwrap();
        items
            .iter()
            .filter_map(|item| item["id"].as_str().map(str::to_string))
            .collect()
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn task_add_update_delete_roundtrip() {
        let _guard = DB_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = new_record_id();

        let added = collection_add("tasks".to_string(), task_json(&id, "Essay", "2099-01-01"));
        assert!(added.ok, "{}", added.message);
        assert!(listed_ids("tasks").contains(&id));

        let updated = collection_update(
            "tasks".to_string(),
            task_json(&id, "Essay draft", "2099-01-02"),
        );
        assert!(updated.ok, "{}", updated.message);
        assert_eq!(updated.message, "Saved.");

        let toggled = task_set_completed(id.clone(), true);
        assert!(toggled.ok, "{}", toggled.message);

        let deleted = collection_delete("tasks".to_string(), id.clone());
        assert!(deleted.ok, "{}", deleted.message);
        assert!(!listed_ids("tasks").contains(&id));

        let again = collection_delete("tasks".to_string(), id);
        assert!(again.ok);
        assert!(again.message.contains("not found"));
    }

    #[test]
    fn add_rejects_invalid_records_and_unknown_collections() {
        let _guard = DB_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let bad_date = collection_add(
            "tasks".to_string(),
            task_json(&new_record_id(), "Essay", "tomorrow"),
        );
        assert!(!bad_date.ok);
        assert!(bad_date.message.contains("dueDate"));

        let bad_json = collection_add("tasks".to_string(), "{".to_string());
        assert!(!bad_json.ok);

        let unknown = collection_list("homework".to_string());
        assert!(!unknown.ok);
        assert!(unknown.message.contains("unknown collection"));
    }

    #[test]
    fn reads_always_return_payloads() {
        let _guard = DB_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let profile = profile_get();
        assert!(profile.ok, "{}", profile.message);
        let value: serde_json::Value = serde_json::from_str(&profile.payload_json.unwrap()).unwrap();
        assert!(value.get("profilePicture").is_some());

        let backup = backup_export();
        assert!(backup.ok, "{}", backup.message);
        assert!(backup.payload_json.unwrap().contains("\"settings\""));

        let home = dashboard(Some("2024-06-03".to_string()), Some(3));
        assert!(home.ok, "{}", home.message);
        assert!(home.payload_json.unwrap().contains("todaySubjects"));
    }

    #[test]
    fn dashboard_rejects_malformed_date() {
        let response = dashboard(Some("03/06/2024".to_string()), None);
        assert!(!response.ok);
        assert!(response.message.contains("invalid date"));
    }

    #[test]
    fn pure_helpers_match_core() {
        assert_eq!(format_time("13:05".to_string()), "1:05 PM");
        let summary = grade_summary(46.0, 50.0);
        assert_eq!(summary.percentage, 92.0);
        assert_eq!(summary.letter, "A-");
        assert_eq!(summary.color, "#10b981");

        assert!(is_valid_time("7:05".to_string()));
        assert!(!is_valid_time("24:00".to_string()));
        assert!(is_valid_date("2024-02-29".to_string()));
        assert!(!is_valid_date("2023-02-29".to_string()));
        assert!(is_valid_email("ana@school.edu".to_string()));
        assert!(!is_valid_email("ana@".to_string()));

        assert_eq!(format_date("2024-06-03".to_string()).as_deref(), Some("Mon, Jun 3"));
        assert_eq!(
            format_full_date("2024-06-03".to_string()).as_deref(),
            Some("Monday, June 3, 2024")
        );
        assert_eq!(format_date("June 3".to_string()), None);
        assert_eq!(today_string().len(), 10);
        assert!(current_time_string().contains(':'));

        assert_eq!(day_of_week("2024-06-03".to_string()).as_deref(), Some("Monday"));
        assert_eq!(short_day_of_week("2024-06-01".to_string()).as_deref(), Some("Sat"));
        assert_eq!(day_of_week("nope".to_string()), None);

        assert_eq!(priority_label("high".to_string()).as_deref(), Some("High"));
        assert_eq!(priority_color("low".to_string()).as_deref(), Some("#10b981"));
        assert_eq!(priority_label("urgent".to_string()), None);
        assert!(random_subject_color().starts_with('#'));
    }

    fn payload(response: super::PlannerResponse) -> serde_json::Value {
        assert!(response.ok, "{}", response.message);
        serde_json::from_str(&response.payload_json.expect("payload")).unwrap()
    }

    fn payload_ids(response: super::PlannerResponse) -> Vec<String> {
        payload(response)
            .as_array()
            .expect("array payload")
            .iter()
            .filter_map(|item| item["id"].as_str().map(str::to_string))
            .collect()
    }

    #[test]
    fn task_views_accept_caller_date_and_limit() {
        let mut done = task_value("done", "Lab", "2024-06-03");
        done["completed"] = serde_json::Value::Bool(true);
        let tasks = serde_json::json!([
            task_value("late", "History essay", "2024-05-20"),
            task_value("soon", "Essay outline", "2024-06-04"),
            task_value("later", "Poster", "2024-06-09"),
            done,
        ])
        .to_string();
        let today = Some("2024-06-01".to_string());

        assert_eq!(
            payload_ids(upcoming_tasks(tasks.clone(), today.clone(), Some(1))),
            vec!["soon"]
        );
        assert_eq!(payload_ids(overdue_tasks(tasks.clone(), today.clone())), vec!["late"]);
        assert_eq!(
            payload_ids(filter_tasks(
                tasks.clone(),
                "essay".to_string(),
                "pending".to_string(),
                today.clone()
            )),
            vec!["late", "soon"]
        );
        assert_eq!(
            payload_ids(search_tasks(tasks.clone(), "POSTER".to_string())),
            vec!["later"]
        );

        let marks = payload(calendar_marks(tasks.clone()));
        assert_eq!(marks["2024-06-03"]["completed"], true);
        assert_eq!(marks["2024-06-09"]["dotColor"], "#f59e0b");

        let bad_filter = filter_tasks(tasks.clone(), String::new(), "soon".to_string(), None);
        assert!(!bad_filter.ok);
        assert!(bad_filter.message.contains("unknown filter"));
        let bad_date = overdue_tasks(tasks, Some("01/06/2024".to_string()));
        assert!(!bad_date.ok);
        assert!(bad_date.message.contains("invalid date"));
        assert!(!search_tasks("{".to_string(), "x".to_string()).ok);
    }

    #[test]
    fn subject_and_teacher_views() {
        let subjects = serde_json::json!([
            {
                "id": "bio", "name": "Biology", "color": "#22c55e", "room": "Lab 2",
                "teacherId": null, "term": "1st", "notes": "", "daysOfWeek": ["Monday"],
                "startTime": "13:30", "endTime": "14:30", "createdAt": 0
            },
            {
                "id": "math", "name": "Math", "color": "#6366f1", "room": "A1",
                "teacherId": "", "term": "2nd", "notes": "bring lab calculator",
                "daysOfWeek": ["Monday", "Friday"],
                "startTime": "7:05", "endTime": "08:00", "createdAt": 0
            }
        ])
        .to_string();

        assert_eq!(
            payload_ids(today_subjects(subjects.clone(), Some("2024-06-03".to_string()))),
            vec!["math", "bio"]
        );
        let tuesday = today_subjects(subjects.clone(), Some("2024-06-04".to_string()));
        assert!(payload_ids(tuesday).is_empty());
        assert_eq!(
            payload_ids(search_subjects(subjects, "LAB".to_string())),
            vec!["bio", "math"]
        );

        let teachers = serde_json::json!([
            {
                "id": "p1", "name": "Ms. Reyes", "subjectSpecialization": "Chemistry",
                "contactInfo": "reyes@school.edu",
                "createdAt": 0
            }
        ])
        .to_string();
        assert_eq!(
            payload_ids(search_teachers(teachers.clone(), "chem".to_string())),
            vec!["p1"]
        );
        assert!(payload_ids(search_teachers(teachers, "math".to_string())).is_empty());
    }
}
