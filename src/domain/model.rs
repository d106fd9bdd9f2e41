use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::metrics::Performance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Lecturer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => f.write_str("Student"),
            Role::Lecturer => f.write_str("Lecturer"),
        }
    }
}

/// Identity shared by every member of the university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    person_id: String,
    name: String,
    pub email: String,
    pub phone: Option<String>,
    role: Role,
}

impl Person {
    pub fn new(
        person_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        role: Role,
    ) -> Self {
        Self {
            person_id: person_id.into(),
            name: name.into(),
            email: email.into(),
            phone,
            role,
        }
    }

    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn update_contact(&mut self, email: impl Into<String>, phone: Option<String>) {
        self.email = email.into();
        self.phone = phone;
        tracing::info!("{}'s contact updated", self.name);
    }

    pub fn display_info(&self) -> String {
        format!(
            "ID: {}, Name: {}, Email: {}, Phone: {}",
            self.person_id,
            self.name,
            self.email,
            self.phone.as_deref().unwrap_or("None")
        )
    }
}

/// Capabilities every role gets from its embedded [`Person`].
pub trait Member {
    fn person(&self) -> &Person;
    fn person_mut(&mut self) -> &mut Person;

    fn id(&self) -> &str {
        self.person().person_id()
    }

    fn name(&self) -> &str {
        self.person().name()
    }

    fn role(&self) -> Role {
        self.person().role()
    }

    fn update_contact(&mut self, email: impl Into<String>, phone: Option<String>)
    where
        Self: Sized,
    {
        self.person_mut().update_contact(email, phone);
    }

    fn display_info(&self) -> String {
        self.person().display_info()
    }
}

/// Letter grade. Symbols outside A–E are kept verbatim and score zero points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    Other(String),
}

impl Grade {
    pub fn points(&self) -> u8 {
        match self {
            Grade::A => 4,
            Grade::B => 3,
            Grade::C => 2,
            Grade::D => 1,
            Grade::E | Grade::Other(_) => 0,
        }
    }
}

impl From<&str> for Grade {
    fn from(symbol: &str) -> Self {
        match symbol {
            "A" => Grade::A,
            "B" => Grade::B,
            "C" => Grade::C,
            "D" => Grade::D,
            "E" => Grade::E,
            other => Grade::Other(other.to_string()),
        }
    }
}

impl From<String> for Grade {
    fn from(symbol: String) -> Self {
        Grade::from(symbol.as_str())
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::A => f.write_str("A"),
            Grade::B => f.write_str("B"),
            Grade::C => f.write_str("C"),
            Grade::D => f.write_str("D"),
            Grade::E => f.write_str("E"),
            Grade::Other(symbol) => f.write_str(symbol),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub code: String,
    pub title: String,
    pub credit_hours: u32,
    pub lecturer: String,
    pub students: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeachingLoad {
    pub title: String,
    pub enrolled: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeachingSummary {
    pub name: String,
    pub department: String,
    pub courses: Vec<TeachingLoad>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub student_id: String,
    pub name: String,
    pub gpa: f64,
    pub attendance: f64,
    pub classification: Performance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityReport {
    pub generated_at: DateTime<Utc>,
    pub courses: Vec<CourseDetails>,
    pub lecturers: Vec<TeachingSummary>,
    pub students: Vec<PerformanceSummary>,
}
