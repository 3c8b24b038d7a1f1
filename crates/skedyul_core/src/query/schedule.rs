//! Weekly schedule helpers and subject palette.

use crate::model::subject::Subject;
use chrono::{Datelike, NaiveDate, NaiveTime};
use uuid::Uuid;

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const SHORT_WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Colors offered for new subjects.
pub const SUBJECT_COLORS: [&str; 20] = [
    "#6366f1", "#8b5cf6", "#ec4899", "#ef4444", "#f97316", "#eab308", "#84cc16", "#22c55e",
    "#06b6d4", "#3b82f6", "#a855f7", "#f43f5e", "#fb7185", "#fbbf24", "#fde047", "#86efac",
    "#5eead4", "#67e8f9", "#93c5fd", "#c4b5fd",
];

/// Full English weekday name (`Sunday`..`Saturday`).
pub fn day_of_week(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Three-letter weekday name (`Sun`..`Sat`).
pub fn short_day_of_week(date: NaiveDate) -> &'static str {
    SHORT_WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Subjects that meet on `today`'s weekday, in collection order.
pub fn today_subjects(subjects: &[Subject], today: NaiveDate) -> Vec<Subject> {
    let weekday = day_of_week(today);
    subjects
        .iter()
        .filter(|subject| subject.meets_on(weekday))
        .cloned()
        .collect()
}

/// Stable sort by `startTime` as a clock time, so `7:05` precedes `13:30`.
///
/// Times that do not parse as `H:MM`/`HH:MM` sort after all valid ones, by text.
pub fn sort_by_start_time(subjects: &mut [Subject]) {
    subjects.sort_by(|a, b| start_key(&a.start_time).cmp(&start_key(&b.start_time)));
}

fn start_key(time: &str) -> (bool, Option<NaiveTime>, &str) {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M").ok();
    (parsed.is_none(), parsed, time)
}

pub fn random_subject_color() -> &'static str {
    let index = Uuid::new_v4().as_u128() % SUBJECT_COLORS.len() as u128;
    SUBJECT_COLORS[index as usize]
}

#[cfg(test)]
mod tests {
    use super::{
        day_of_week, random_subject_color, short_day_of_week, sort_by_start_time,
        today_subjects, SUBJECT_COLORS,
    };
    use crate::model::subject::Subject;
    use chrono::NaiveDate;

    fn subject(name: &str, days: &[&str], start: &str) -> Subject {
        let mut subject = Subject::with_id(name, name, start, "23:00");
        subject.days_of_week = days.iter().map(|day| day.to_string()).collect();
        subject
    }

    #[test]
    fn weekday_names_follow_the_calendar() {
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(day_of_week(saturday), "Saturday");
        assert_eq!(short_day_of_week(saturday), "Sat");

        let sunday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert_eq!(day_of_week(sunday), "Sunday");
    }

    #[test]
    fn today_subjects_keeps_only_matching_weekday() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let subjects = vec![
            subject("math", &["Monday", "Wednesday"], "08:00"),
            subject("art", &["Tuesday"], "09:00"),
        ];

        let result = today_subjects(&subjects, today);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "math");
    }

    #[test]
    fn sort_by_start_time_orders_ascending() {
        let mut subjects = vec![
            subject("late", &[], "13:30"),
            subject("early", &[], "07:45"),
        ];
        sort_by_start_time(&mut subjects);
        assert_eq!(subjects[0].id, "early");
    }

    #[test]
    fn sort_by_start_time_handles_unpadded_hours() {
        let mut subjects = vec![
            subject("afternoon", &[], "13:30"),
            subject("broken", &[], "soon"),
            subject("morning", &[], "7:05"),
            subject("nine", &[], "09:00"),
        ];
        sort_by_start_time(&mut subjects);
        let ids = subjects.iter().map(|subject| subject.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["morning", "nine", "afternoon", "broken"]);
    }

    #[test]
    fn random_color_comes_from_palette() {
        assert!(SUBJECT_COLORS.contains(&random_subject_color()));
    }
}
