//! Planner façade over one key-value store.
//!
//! # Responsibility
//! - Hand out per-entity repositories sharing the same store.
//! - Implement backup/restore/reset and the dashboard read model.
//! - Resolve id references between records as optional lookups.
//!
//! # Invariants
//! - Restore overwrites every store key unconditionally, in
//!   [`StoreKey::ALL`] order, and stops at the first failed write.
//! - No cascade: deleting a subject or teacher leaves references dangling.

use crate::model::grade::Grade;
use crate::model::profile::Profile;
use crate::model::subject::Subject;
use crate::model::task::Task;
use crate::model::teacher::Teacher;
use crate::query::schedule::{sort_by_start_time, today_subjects};
use crate::query::tasks::{overdue_tasks, task_counts, upcoming_tasks, TaskCounts};
use crate::repo::collection_repo::{
    CollectionRepository, GradeRepository, SubjectRepository, TaskRepository, TeacherRepository,
};
use crate::repo::singleton_repo::{ProfileRepository, SettingsRepository};
use crate::service::backup::{BackupError, PlannerSnapshot};
use crate::store::{self, KeyValueStore, StoreKey, StoreResult};
use chrono::NaiveDate;
use log::{error, info};
use serde::Serialize;

/// Read model for the home screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub profile: Profile,
    /// Today's classes ordered by start time.
    pub today_subjects: Vec<Subject>,
    pub upcoming_tasks: Vec<Task>,
    pub overdue_tasks: Vec<Task>,
    pub task_counts: TaskCounts,
}

/// Use-case service bundling every planner repository.
pub struct PlannerService<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: KeyValueStore + ?Sized> PlannerService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn subjects(&self) -> SubjectRepository<&'s S> {
        SubjectRepository::new(self.store)
    }

    pub fn teachers(&self) -> TeacherRepository<&'s S> {
        TeacherRepository::new(self.store)
    }

    pub fn tasks(&self) -> TaskRepository<&'s S> {
        TaskRepository::new(self.store)
    }

    pub fn grades(&self) -> GradeRepository<&'s S> {
        GradeRepository::new(self.store)
    }

    pub fn profile(&self) -> ProfileRepository<&'s S> {
        ProfileRepository::new(self.store)
    }

    pub fn settings(&self) -> SettingsRepository<&'s S> {
        SettingsRepository::new(self.store)
    }

    /// Reads every store key into one bundle.
    pub fn backup(&self) -> PlannerSnapshot {
        let snapshot = PlannerSnapshot {
            subjects: self.subjects().list(),
            teachers: self.teachers().list(),
            tasks: self.tasks().list(),
            grades: self.grades().list(),
            profile: self.profile().get(),
            settings: self.settings().get(),
        };
        info!(
            "event=backup module=service status=ok record_count={}",
            snapshot.record_count()
        );
        snapshot
    }

    pub fn backup_json(&self) -> Result<String, BackupError> {
        self.backup().to_json()
    }

    /// Overwrites every store key with the bundle's values.
    pub fn restore(&self, snapshot: &PlannerSnapshot) -> StoreResult<()> {
        let result = self.write_snapshot(snapshot);
        match &result {
            Ok(()) => info!(
                "event=restore module=service status=ok record_count={}",
                snapshot.record_count()
            ),
            Err(err) => error!("event=restore module=service status=error error={err}"),
        }
        result
    }

    /// Parses a JSON bundle and restores it. Nothing is written when the
    /// bundle is malformed.
    pub fn restore_json(&self, text: &str) -> Result<(), BackupError> {
        let snapshot = PlannerSnapshot::from_json(text)?;
        self.restore(&snapshot)?;
        Ok(())
    }

    /// Deletes every store key; later reads fall back to empty collections
    /// and default singletons.
    pub fn reset_all(&self) -> StoreResult<()> {
        store::remove_keys(self.store, &StoreKey::ALL)?;
        info!("event=reset_all module=service status=ok");
        Ok(())
    }

    /// Sets a task's completion flag through a full-record update.
    ///
    /// Returns `Ok(false)` when the task does not exist.
    pub fn set_task_completed(&self, task_id: &str, completed: bool) -> StoreResult<bool> {
        let tasks = self.tasks();
        let Some(mut task) = tasks.find(task_id) else {
            return Ok(false);
        };
        task.completed = completed;
        tasks.update(&task)
    }

    pub fn subject_teacher(&self, subject: &Subject) -> Option<Teacher> {
        subject
            .teacher_id
            .as_deref()
            .and_then(|teacher_id| self.teachers().find(teacher_id))
    }

    pub fn task_subject(&self, task: &Task) -> Option<Subject> {
        task.subject_id
            .as_deref()
            .and_then(|subject_id| self.subjects().find(subject_id))
    }

    pub fn grade_subject(&self, grade: &Grade) -> Option<Subject> {
        self.subjects().find(&grade.subject_id)
    }

    pub fn dashboard(&self, today: NaiveDate, upcoming_limit: usize) -> Dashboard {
        let mut subjects = today_subjects(&self.subjects().list(), today);
        sort_by_start_time(&mut subjects);
        let tasks = self.tasks().list();

        Dashboard {
            profile: self.profile().get(),
            today_subjects: subjects,
            upcoming_tasks: upcoming_tasks(&tasks, today, upcoming_limit),
            overdue_tasks: overdue_tasks(&tasks, today),
            task_counts: task_counts(&tasks, today),
        }
    }

    fn write_snapshot(&self, snapshot: &PlannerSnapshot) -> StoreResult<()> {
        store::put(self.store, StoreKey::Subjects, &snapshot.subjects)?;
        store::put(self.store, StoreKey::Teachers, &snapshot.teachers)?;
        store::put(self.store, StoreKey::Tasks, &snapshot.tasks)?;
        store::put(self.store, StoreKey::Grades, &snapshot.grades)?;
        store::put(self.store, StoreKey::Profile, &snapshot.profile)?;
        store::put(self.store, StoreKey::Settings, &snapshot.settings)?;
        Ok(())
    }
}
