use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::course::Course;
use crate::domain::metrics::{attendance_percentage, grade_point_average, Performance};
use crate::domain::model::{Grade, Member, PerformanceSummary, Person, Role};
use crate::domain::ports::ReportSink;
use crate::utils::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    person: Person,
    courses: Vec<String>,
    grades: BTreeMap<String, Grade>,
    attendance: BTreeMap<String, Vec<bool>>,
    last_login: DateTime<Utc>,
}

impl Student {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            person: Person::new(student_id, name, email, phone, Role::Student),
            courses: Vec::new(),
            grades: BTreeMap::new(),
            attendance: BTreeMap::new(),
            last_login: Utc::now(),
        }
    }

    /// Registered course codes in registration order.
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn grades(&self) -> &BTreeMap<String, Grade> {
        &self.grades
    }

    pub fn grade(&self, course_code: &str) -> Option<&Grade> {
        self.grades.get(course_code)
    }

    pub fn attendance(&self) -> &BTreeMap<String, Vec<bool>> {
        &self.attendance
    }

    pub fn last_login(&self) -> DateTime<Utc> {
        self.last_login
    }

    pub fn record_login(&mut self) {
        self.last_login = Utc::now();
    }

    pub fn is_registered(&self, course_code: &str) -> bool {
        self.courses.iter().any(|code| code == course_code)
    }

    /// Adds the course unless one with the same code is already registered.
    /// Prefer [`Course::enroll_student`], which keeps the roster in sync.
    pub fn register_course(&mut self, course: &Course) -> bool {
        if self.is_registered(course.code()) {
            tracing::debug!("{} already registered for {}", self.name(), course.title());
            return false;
        }

        self.courses.push(course.code().to_string());
        tracing::info!("{} registered for {}", self.name(), course.title());
        true
    }

    /// Grades are not checked against registrations.
    pub fn record_grade(&mut self, course_code: impl Into<String>, grade: Grade) {
        self.grades.insert(course_code.into(), grade);
    }

    pub fn record_attendance(&mut self, course_code: impl Into<String>, present: bool) {
        self.attendance
            .entry(course_code.into())
            .or_default()
            .push(present);
    }

    pub fn set_attendance(&mut self, course_code: impl Into<String>, marks: Vec<bool>) {
        self.attendance.insert(course_code.into(), marks);
    }

    pub fn calculate_gpa(&self) -> f64 {
        grade_point_average(self.grades.values())
    }

    pub fn calculate_attendance(&self) -> f64 {
        attendance_percentage(&self.attendance)
    }

    pub fn course_attendance(&self, course_code: &str) -> f64 {
        match self.attendance.get(course_code) {
            Some(marks) if !marks.is_empty() => {
                let attended = marks.iter().filter(|present| **present).count();
                attended as f64 / marks.len() as f64 * 100.0
            }
            _ => 0.0,
        }
    }

    pub fn summarize(&self) -> PerformanceSummary {
        let gpa = self.calculate_gpa();
        let attendance = self.calculate_attendance();
        PerformanceSummary {
            student_id: self.id().to_string(),
            name: self.name().to_string(),
            gpa,
            attendance,
            classification: Performance::classify(gpa, attendance),
        }
    }

    /// Renders GPA, attendance and classification to `sink` and returns the GPA.
    pub fn performance_summary(&self, sink: &mut dyn ReportSink) -> Result<f64> {
        let summary = self.summarize();
        sink.performance_summary(&summary)?;
        Ok(summary.gpa)
    }
}

impl Member for Student {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
