use serde::{Deserialize, Serialize};

use crate::domain::course::Course;
use crate::domain::model::{Member, Person, Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecturer {
    person: Person,
    department: String,
    courses: Vec<String>,
}

impl Lecturer {
    pub fn new(
        staff_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(staff_id, name, email, None, Role::Lecturer),
            department: department.into(),
            courses: Vec::new(),
        }
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Assigned course codes in assignment order.
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Takes over `course`. The course's lecturer is overwritten even when the
    /// course was already on this lecturer's list; the return value only says
    /// whether the list grew.
    pub fn assign_course(&mut self, course: &mut Course) -> bool {
        if let Some(previous) = course.lecturer() {
            if previous != self.id() {
                tracing::debug!("{} replaces {} on {}", self.name(), previous, course.code());
            }
        }
        course.set_lecturer(self.id());

        if self.courses.iter().any(|code| code == course.code()) {
            return false;
        }
        self.courses.push(course.code().to_string());
        tracing::info!("{} assigned to {}", self.name(), course.title());
        true
    }
}

impl Member for Lecturer {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_course_sets_back_reference() {
        let mut smith = Lecturer::new("L001", "Dr. Smith", "smith@uni.com", "CS");
        let mut course = Course::new("CS101", "Intro to Programming", 3);

        assert!(smith.assign_course(&mut course));
        assert!(!smith.assign_course(&mut course));

        assert_eq!(smith.courses(), ["CS101".to_string()]);
        assert_eq!(course.lecturer(), Some("L001"));
    }

    #[test]
    fn test_last_assignment_wins() {
        let mut smith = Lecturer::new("L001", "Dr. Smith", "smith@uni.com", "CS");
        let mut jones = Lecturer::new("L002", "Dr. Jones", "jones@uni.com", "CS");
        let mut course = Course::new("CS101", "Intro to Programming", 3);

        smith.assign_course(&mut course);
        jones.assign_course(&mut course);
        assert_eq!(course.lecturer(), Some("L002"));

        // 舊講師名單不會被清除
        assert_eq!(smith.courses(), ["CS101".to_string()]);

        smith.assign_course(&mut course);
        assert_eq!(course.lecturer(), Some("L001"));
    }

    #[test]
    fn test_lecturer_role() {
        let smith = Lecturer::new("L001", "Dr. Smith", "smith@uni.com", "CS");
        assert_eq!(smith.role(), Role::Lecturer);
        assert_eq!(smith.department(), "CS");
        assert_eq!(smith.person().phone, None);
    }
}
