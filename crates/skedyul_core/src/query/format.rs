//! Display formatting for times and dates.
//!
//! Dates are local wall-clock `YYYY-MM-DD` values; no timezone conversion is
//! ever applied.

use chrono::{Local, NaiveDate};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), ISO_DATE_FORMAT).ok()
}

/// Formats a date as `YYYY-MM-DD`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Today's date from the device clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today's date as `YYYY-MM-DD`.
pub fn today_string() -> String {
    iso_date(today())
}

/// Current local time as zero-padded `HH:MM`.
pub fn current_time_string() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Converts 24h `HH:MM` to 12h `H:MM AM|PM`.
///
/// Minutes are carried over verbatim. Input without a numeric hour before a
/// `:` is returned unchanged.
pub fn format_time(time: &str) -> String {
    let Some((hours, minutes)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = hours.trim().parse::<u32>() else {
        return time.to_string();
    };

    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{display_hour}:{minutes} {meridiem}")
}

/// Short display date, e.g. `Mon, Jan 1`.
pub fn format_date(date: &str) -> Option<String> {
    parse_iso_date(date).map(|parsed| parsed.format("%a, %b %-d").to_string())
}

/// Long display date, e.g. `Monday, January 1, 2024`.
pub fn format_full_date(date: &str) -> Option<String> {
    parse_iso_date(date).map(|parsed| parsed.format("%A, %B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_full_date, format_time, iso_date, parse_iso_date};

    #[test]
    fn format_time_converts_afternoon_and_midnight() {
        assert_eq!(format_time("13:05"), "1:05 PM");
        assert_eq!(format_time("00:30"), "12:30 AM");
        assert_eq!(format_time("12:00"), "12:00 PM");
        assert_eq!(format_time("9:15"), "9:15 AM");
    }

    #[test]
    fn format_time_returns_unparseable_input_unchanged() {
        assert_eq!(format_time("noon"), "noon");
        assert_eq!(format_time("ab:cd"), "ab:cd");
    }

    #[test]
    fn date_formats_use_us_english_names() {
        assert_eq!(format_date("2024-01-01").as_deref(), Some("Mon, Jan 1"));
        assert_eq!(
            format_full_date("2024-06-01").as_deref(),
            Some("Saturday, June 1, 2024")
        );
        assert_eq!(format_date("not a date"), None);
    }

    #[test]
    fn iso_date_roundtrips_through_parse() {
        let date = parse_iso_date("2099-12-31").unwrap();
        assert_eq!(iso_date(date), "2099-12-31");
    }
}
