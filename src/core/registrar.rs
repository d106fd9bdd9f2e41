use crate::domain::course::Course;
use crate::domain::lecturer::Lecturer;
use crate::domain::model::{Grade, Member};
use crate::domain::student::Student;
use crate::utils::error::{RegistrarError, Result};

/// In-memory directory that owns every student, course and lecturer.
///
/// Collections are append-only and keep insertion order. Keys are not checked
/// for uniqueness; when a key is duplicated, lookups resolve to the first
/// entry.
#[derive(Debug, Default, Clone)]
pub struct Registrar {
    students: Vec<Student>,
    courses: Vec<Course>,
    lecturers: Vec<Lecturer>,
}

impl Registrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(&mut self, student: Student) {
        tracing::info!("Added student {}", student.name());
        self.students.push(student);
    }

    pub fn add_course(&mut self, course: Course) {
        tracing::debug!("Added course {}", course.code());
        self.courses.push(course);
    }

    pub fn add_lecturer(&mut self, lecturer: Lecturer) {
        tracing::debug!("Added lecturer {}", lecturer.name());
        self.lecturers.push(lecturer);
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn lecturers(&self) -> &[Lecturer] {
        &self.lecturers
    }

    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == student_id)
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code() == code)
    }

    pub fn lecturer(&self, staff_id: &str) -> Option<&Lecturer> {
        self.lecturers.iter().find(|l| l.id() == staff_id)
    }

    fn student_mut(&mut self, student_id: &str) -> Result<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.id() == student_id)
            .ok_or_else(|| RegistrarError::UnknownStudent {
                id: student_id.to_string(),
            })
    }

    fn lecturer_mut(&mut self, staff_id: &str) -> Result<&mut Lecturer> {
        self.lecturers
            .iter_mut()
            .find(|l| l.id() == staff_id)
            .ok_or_else(|| RegistrarError::UnknownLecturer {
                id: staff_id.to_string(),
            })
    }

    /// See [`Course::enroll_student`].
    pub fn enroll_student(&mut self, course_code: &str, student_id: &str) -> Result<bool> {
        // 分開借用兩個集合，避免同時可變借用 self
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.code() == course_code)
            .ok_or_else(|| RegistrarError::UnknownCourse {
                code: course_code.to_string(),
            })?;
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id() == student_id)
            .ok_or_else(|| RegistrarError::UnknownStudent {
                id: student_id.to_string(),
            })?;

        Ok(course.enroll_student(student))
    }

    /// See [`Lecturer::assign_course`].
    pub fn assign_course(&mut self, staff_id: &str, course_code: &str) -> Result<bool> {
        let lecturer = self
            .lecturers
            .iter_mut()
            .find(|l| l.id() == staff_id)
            .ok_or_else(|| RegistrarError::UnknownLecturer {
                id: staff_id.to_string(),
            })?;
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.code() == course_code)
            .ok_or_else(|| RegistrarError::UnknownCourse {
                code: course_code.to_string(),
            })?;

        Ok(lecturer.assign_course(course))
    }

    /// See [`Course::assign_grades`]. Returns the number of grades written.
    pub fn assign_grades(&mut self, course_code: &str, grade: impl Into<Grade>) -> Result<usize> {
        let grade = grade.into();
        let course = self
            .courses
            .iter()
            .find(|c| c.code() == course_code)
            .ok_or_else(|| RegistrarError::UnknownCourse {
                code: course_code.to_string(),
            })?;

        Ok(course.assign_grades(&grade, &mut self.students))
    }

    /// Appends one mark. The course code is taken as-is; it need not be a
    /// registered course.
    pub fn record_attendance(
        &mut self,
        student_id: &str,
        course_code: &str,
        present: bool,
    ) -> Result<()> {
        self.student_mut(student_id)?
            .record_attendance(course_code, present);
        Ok(())
    }

    pub fn set_attendance(
        &mut self,
        student_id: &str,
        course_code: &str,
        marks: Vec<bool>,
    ) -> Result<()> {
        self.student_mut(student_id)?.set_attendance(course_code, marks);
        Ok(())
    }

    /// Updates a student's or lecturer's contact details, students first.
    pub fn update_contact(
        &mut self,
        person_id: &str,
        email: &str,
        phone: Option<String>,
    ) -> Result<()> {
        if let Ok(student) = self.student_mut(person_id) {
            student.update_contact(email, phone);
            return Ok(());
        }
        if let Ok(lecturer) = self.lecturer_mut(person_id) {
            lecturer.update_contact(email, phone);
            return Ok(());
        }
        Err(RegistrarError::UnknownPerson {
            id: person_id.to_string(),
        })
    }
}
