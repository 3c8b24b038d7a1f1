//! Grade scoring: percentage, letter and color mapping.

use crate::model::grade::Grade;

const LETTER_THRESHOLDS: [(f64, &str); 11] = [
    (93.0, "A"),
    (90.0, "A-"),
    (87.0, "B+"),
    (83.0, "B"),
    (80.0, "B-"),
    (77.0, "C+"),
    (73.0, "C"),
    (70.0, "C-"),
    (67.0, "D+"),
    (63.0, "D"),
    (60.0, "D-"),
];

/// `round(100 * score / max_score)`, halves rounded toward positive infinity.
///
/// `max_score == 0` is not guarded: the result is infinite or NaN, and
/// [`grade_letter`] maps it like any other value.
pub fn calculate_grade_percentage(score: f64, max_score: f64) -> f64 {
    round_half_up(score / max_score * 100.0)
}

// `f64::round` breaks ties away from zero; only negative ties need moving up.
// Avoids `floor(x + 0.5)`, which rounds 0.49999999999999994 to 1.
fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

pub fn grade_letter(percentage: f64) -> &'static str {
    LETTER_THRESHOLDS
        .iter()
        .find(|(threshold, _)| percentage >= *threshold)
        .map_or("F", |(_, letter)| *letter)
}

pub fn grade_color(percentage: f64) -> &'static str {
    if percentage >= 90.0 {
        "#10b981"
    } else if percentage >= 80.0 {
        "#3b82f6"
    } else if percentage >= 70.0 {
        "#f59e0b"
    } else {
        "#ef4444"
    }
}

/// Grades recorded for one subject, in collection order.
pub fn grades_for_subject(grades: &[Grade], subject_id: &str) -> Vec<Grade> {
    grades
        .iter()
        .filter(|grade| grade.subject_id == subject_id)
        .cloned()
        .collect()
}

/// Mean of the finite grade percentages, `None` when there are none.
pub fn average_percentage(grades: &[Grade]) -> Option<f64> {
    let finite = grades
        .iter()
        .map(Grade::percentage)
        .filter(|percentage| percentage.is_finite())
        .collect::<Vec<_>>();
    if finite.is_empty() {
        return None;
    }
    Some(finite.iter().sum::<f64>() / finite.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::{
        average_percentage, calculate_grade_percentage, grade_color, grade_letter,
        grades_for_subject, round_half_up,
    };
    use crate::model::grade::Grade;

    #[test]
    fn percentage_rounds_to_whole_number() {
        assert_eq!(calculate_grade_percentage(46.0, 50.0), 92.0);
        assert_eq!(calculate_grade_percentage(2.0, 3.0), 67.0);
        assert_eq!(calculate_grade_percentage(1.0, 8.0), 13.0);
    }

    #[test]
    fn ties_round_toward_positive_infinity() {
        assert_eq!(calculate_grade_percentage(18.5, 20.0), 93.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
    }

    #[test]
    fn zero_max_score_is_not_finite() {
        assert!(!calculate_grade_percentage(5.0, 0.0).is_finite());
        assert!(calculate_grade_percentage(0.0, 0.0).is_nan());
        assert_eq!(grade_letter(calculate_grade_percentage(0.0, 0.0)), "F");
    }

    #[test]
    fn letters_follow_threshold_table() {
        assert_eq!(grade_letter(100.0), "A");
        assert_eq!(grade_letter(93.0), "A");
        assert_eq!(grade_letter(92.0), "A-");
        assert_eq!(grade_letter(87.0), "B+");
        assert_eq!(grade_letter(72.0), "C-");
        assert_eq!(grade_letter(60.0), "D-");
        assert_eq!(grade_letter(59.0), "F");
    }

    #[test]
    fn colors_follow_threshold_table() {
        assert_eq!(grade_color(95.0), "#10b981");
        assert_eq!(grade_color(85.0), "#3b82f6");
        assert_eq!(grade_color(70.0), "#f59e0b");
        assert_eq!(grade_color(12.0), "#ef4444");
    }

    #[test]
    fn average_skips_non_finite_and_filters_by_subject() {
        let grades = vec![
            Grade::with_id("g1", "math", "quiz", 9.0, 10.0),
            Grade::with_id("g2", "math", "broken", 3.0, 0.0),
            Grade::with_id("g3", "art", "sketch", 7.0, 10.0),
        ];

        let math = grades_for_subject(&grades, "math");
        assert_eq!(math.len(), 2);
        assert_eq!(average_percentage(&math), Some(90.0));
        assert_eq!(average_percentage(&[]), None);
    }
}
