use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::model::Grade;

pub const EXCELLENT_GPA: f64 = 3.5;
pub const EXCELLENT_ATTENDANCE: f64 = 90.0;
pub const WARNING_GPA: f64 = 2.0;
pub const WARNING_ATTENDANCE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performance {
    Excellent,
    Satisfactory,
    Warning,
}

impl Performance {
    /// First matching band wins: Excellent, then Warning, then Satisfactory.
    pub fn classify(gpa: f64, attendance: f64) -> Self {
        if gpa >= EXCELLENT_GPA && attendance >= EXCELLENT_ATTENDANCE {
            Performance::Excellent
        } else if gpa < WARNING_GPA || attendance < WARNING_ATTENDANCE {
            Performance::Warning
        } else {
            Performance::Satisfactory
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent",
            Performance::Satisfactory => "Satisfactory",
            Performance::Warning => "Warning: Poor performance",
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mean grade points over graded courses, rounded to two decimals.
pub fn grade_point_average<'a>(grades: impl IntoIterator<Item = &'a Grade>) -> f64 {
    let (total, count) = grades
        .into_iter()
        .fold((0u32, 0u32), |(total, count), grade| {
            (total + u32::from(grade.points()), count + 1)
        });

    if count == 0 {
        return 0.0;
    }
    round_to_hundredths(f64::from(total) / f64::from(count))
}

pub fn attendance_percentage(attendance: &BTreeMap<String, Vec<bool>>) -> f64 {
    let attended: usize = attendance
        .values()
        .map(|marks| marks.iter().filter(|present| **present).count())
        .sum();
    let possible: usize = attendance.values().map(Vec::len).sum();

    if possible == 0 {
        return 0.0;
    }
    attended as f64 / possible as f64 * 100.0
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(code: &str, values: &[bool]) -> BTreeMap<String, Vec<bool>> {
        let mut map = BTreeMap::new();
        map.insert(code.to_string(), values.to_vec());
        map
    }

    #[test]
    fn test_gpa_empty_is_zero() {
        assert_eq!(grade_point_average(std::iter::empty::<&Grade>()), 0.0);
    }

    #[test]
    fn test_gpa_rounds_to_two_decimals() {
        let grades = [Grade::A, Grade::B, Grade::B];
        assert_eq!(grade_point_average(grades.iter()), 3.33);
    }

    #[test]
    fn test_attendance_from_marks() {
        assert_eq!(attendance_percentage(&marks("CS101", &[true, true, false, true])), 75.0);
        assert_eq!(attendance_percentage(&marks("CS101", &[true, false, true, false])), 50.0);
    }

    #[test]
    fn test_attendance_with_only_empty_sequences() {
        assert_eq!(attendance_percentage(&marks("CS101", &[])), 0.0);
        assert_eq!(attendance_percentage(&BTreeMap::new()), 0.0);
    }

    #[test]
    fn test_classification_bands() {
        assert_eq!(Performance::classify(3.5, 90.0), Performance::Excellent);
        assert_eq!(Performance::classify(4.0, 75.0), Performance::Satisfactory);
        assert_eq!(Performance::classify(1.99, 100.0), Performance::Warning);
        assert_eq!(Performance::classify(4.0, 59.9), Performance::Warning);
        assert_eq!(Performance::classify(2.0, 60.0), Performance::Satisfactory);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Performance::Warning.to_string(), "Warning: Poor performance");
        assert_eq!(Performance::Excellent.label(), "Excellent");
    }
}
