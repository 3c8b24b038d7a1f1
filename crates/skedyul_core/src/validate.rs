//! Fixed-pattern validators for user-entered text.
//!
//! Pure boolean predicates; no normalization is applied to the input.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Accepts 24h `H:MM` / `HH:MM` wall-clock times.
pub fn is_valid_time(time: &str) -> bool {
    TIME_RE.is_match(time)
}

/// Accepts `YYYY-MM-DD` strings naming a real calendar date.
pub fn is_valid_date(date: &str) -> bool {
    DATE_RE.is_match(date) && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_date, is_valid_email, is_valid_time};

    #[test]
    fn time_accepts_single_digit_hours_and_rejects_out_of_range() {
        assert!(is_valid_time("7:05"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time(" 12:00"));
    }

    #[test]
    fn date_requires_pattern_and_real_day() {
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-2-9"));
        assert!(!is_valid_date("2024-13-01"));
    }

    #[test]
    fn email_needs_user_domain_and_tld() {
        assert!(is_valid_email("student@school.edu"));
        assert!(!is_valid_email("student@school"));
        assert!(!is_valid_email("student school@edu.org"));
    }
}
