use serde::{Deserialize, Serialize};

use crate::domain::model::{Grade, Member};
use crate::domain::student::Student;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    code: String,
    title: String,
    credit_hours: u32,
    lecturer: Option<String>,
    students: Vec<String>,
}

impl Course {
    pub fn new(code: impl Into<String>, title: impl Into<String>, credit_hours: u32) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credit_hours,
            lecturer: None,
            students: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn credit_hours(&self) -> u32 {
        self.credit_hours
    }

    /// Staff id of the assigned lecturer, if any.
    pub fn lecturer(&self) -> Option<&str> {
        self.lecturer.as_deref()
    }

    /// Enrolled student ids in enrollment order.
    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn is_enrolled(&self, student_id: &str) -> bool {
        self.students.iter().any(|id| id == student_id)
    }

    pub(crate) fn set_lecturer(&mut self, lecturer_id: impl Into<String>) {
        self.lecturer = Some(lecturer_id.into());
    }

    /// Adds the student to the roster and registers the course on the student.
    /// Returns `false` without touching either side if already enrolled.
    pub fn enroll_student(&mut self, student: &mut Student) -> bool {
        if self.is_enrolled(student.id()) {
            return false;
        }

        self.students.push(student.id().to_string());
        student.register_course(self);
        tracing::info!("{} added to {}", student.name(), self.title);
        true
    }

    /// Gives every enrolled student `grade` for this course, overwriting any
    /// earlier grade. Each roster id resolves to the first record in
    /// `students` with that id; ids with no record are skipped. Returns the
    /// number of grade entries written.
    pub fn assign_grades(&self, grade: &Grade, students: &mut [Student]) -> usize {
        let mut assigned = 0;
        for student_id in &self.students {
            let Some(student) = students.iter_mut().find(|s| s.id() == student_id.as_str()) else {
                tracing::debug!("No record for {} enrolled in {}", student_id, self.code);
                continue;
            };
            student.record_grade(self.code.clone(), grade.clone());
            tracing::info!(
                "Assigned grade {} to {} for {}",
                grade,
                student.name(),
                self.code
            );
            assigned += 1;
        }
        assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enroll_keeps_both_sides_in_sync() {
        let mut course = Course::new("CS101", "Intro to Programming", 3);
        let mut alice = Student::new("S001", "Alice", "alice@uni.com", None);

        assert!(course.enroll_student(&mut alice));
        assert!(!course.enroll_student(&mut alice));

        assert_eq!(course.students(), ["S001".to_string()]);
        assert_eq!(alice.courses(), ["CS101".to_string()]);
    }

    #[test]
    fn test_assign_grades_touches_roster_only() {
        let mut course = Course::new("CS101", "Intro to Programming", 3);
        let mut students = vec![
            Student::new("S001", "Alice", "alice@uni.com", None),
            Student::new("S002", "Bob", "bob@uni.com", None),
            Student::new("S003", "Carol", "carol@uni.com", None),
        ];
        course.enroll_student(&mut students[0]);
        course.enroll_student(&mut students[1]);
        students[0].record_grade("CS101", Grade::C);

        let written = course.assign_grades(&Grade::A, &mut students);

        assert_eq!(written, 2);
        assert_eq!(students[0].grade("CS101"), Some(&Grade::A));
        assert_eq!(students[1].grade("CS101"), Some(&Grade::A));
        assert_eq!(students[2].grade("CS101"), None);
    }

    #[test]
    fn test_new_course_has_no_lecturer() {
        let course = Course::new("CS201", "Data Structures", 4);
        assert_eq!(course.lecturer(), None);
        assert_eq!(course.credit_hours(), 4);
        assert!(course.students().is_empty());
    }
}
