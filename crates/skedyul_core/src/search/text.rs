//! Case-insensitive substring search.
//!
//! # Invariants
//! - Matching uses Unicode lowercase on both sides; no trimming is applied.
//! - An empty query matches every record.
//! - Results keep collection order.

use crate::model::subject::Subject;
use crate::model::task::Task;
use crate::model::teacher::Teacher;

/// Matches subject `name`, `room` and `notes`.
pub fn search_subjects(subjects: &[Subject], query: &str) -> Vec<Subject> {
    search_by(subjects, query, |subject| {
        [
            subject.name.as_str(),
            subject.room.as_str(),
            subject.notes.as_str(),
        ]
    })
}

/// Matches task `title` and `description`.
pub fn search_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    search_by(tasks, query, |task| {
        [task.title.as_str(), task.description.as_str()]
    })
}

/// Matches teacher `name`, `subjectSpecialization` and `contactInfo`.
pub fn search_teachers(teachers: &[Teacher], query: &str) -> Vec<Teacher> {
    search_by(teachers, query, |teacher| {
        [
            teacher.name.as_str(),
            teacher.subject_specialization.as_str(),
            teacher.contact_info.as_str(),
        ]
    })
}

fn search_by<'a, T, const N: usize>(
    records: &'a [T],
    query: &str,
    fields: impl Fn(&'a T) -> [&'a str; N],
) -> Vec<T>
where
    T: Clone,
{
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|&record| {
            fields(record)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
