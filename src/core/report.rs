use chrono::Utc;

use crate::core::registrar::Registrar;
use crate::domain::course::Course;
use crate::domain::lecturer::Lecturer;
use crate::domain::model::{CourseDetails, Member, TeachingLoad, TeachingSummary, UniversityReport};
use crate::domain::ports::{ReportSink, Section};
use crate::utils::error::Result;

pub const UNASSIGNED_LECTURER: &str = "TBA";

/// Read-only aggregation over a [`Registrar`].
pub struct Reporter;

impl Reporter {
    /// Walks courses, then lecturers, then students, each in registrar order,
    /// and hands every entry to `sink`.
    pub fn full_report(registrar: &Registrar, sink: &mut dyn ReportSink) -> Result<()> {
        tracing::debug!(
            "Generating report for {} courses, {} lecturers, {} students",
            registrar.courses().len(),
            registrar.lecturers().len(),
            registrar.students().len()
        );

        sink.begin_report()?;

        sink.begin_section(Section::Courses)?;
        for course in registrar.courses() {
            sink.course_details(&Self::course_details(registrar, course))?;
        }

        sink.begin_section(Section::Lecturers)?;
        for lecturer in registrar.lecturers() {
            sink.teaching_summary(&Self::teaching_summary(registrar, lecturer))?;
        }

        sink.begin_section(Section::Students)?;
        for student in registrar.students() {
            student.performance_summary(sink)?;
        }

        sink.finish()
    }

    pub fn build(registrar: &Registrar) -> UniversityReport {
        UniversityReport {
            generated_at: Utc::now(),
            courses: registrar
                .courses()
                .iter()
                .map(|course| Self::course_details(registrar, course))
                .collect(),
            lecturers: registrar
                .lecturers()
                .iter()
                .map(|lecturer| Self::teaching_summary(registrar, lecturer))
                .collect(),
            students: registrar.students().iter().map(|s| s.summarize()).collect(),
        }
    }

    /// Ids with no matching record are rendered as the raw id.
    pub fn course_details(registrar: &Registrar, course: &Course) -> CourseDetails {
        let lecturer = match course.lecturer() {
            Some(id) => registrar
                .lecturer(id)
                .map(|l| l.name().to_string())
                .unwrap_or_else(|| id.to_string()),
            None => UNASSIGNED_LECTURER.to_string(),
        };

        let students = course
            .students()
            .iter()
            .map(|id| {
                registrar
                    .student(id)
                    .map(|s| s.name().to_string())
                    .unwrap_or_else(|| id.clone())
            })
            .collect();

        CourseDetails {
            code: course.code().to_string(),
            title: course.title().to_string(),
            credit_hours: course.credit_hours(),
            lecturer,
            students,
        }
    }

    pub fn teaching_summary(registrar: &Registrar, lecturer: &Lecturer) -> TeachingSummary {
        let courses = lecturer
            .courses()
            .iter()
            .map(|code| match registrar.course(code) {
                Some(course) => TeachingLoad {
                    title: course.title().to_string(),
                    enrolled: course.students().len(),
                },
                None => TeachingLoad {
                    title: code.clone(),
                    enrolled: 0,
                },
            })
            .collect();

        TeachingSummary {
            name: lecturer.name().to_string(),
            department: lecturer.department().to_string(),
            courses,
        }
    }
}
