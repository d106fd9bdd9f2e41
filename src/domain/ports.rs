use crate::domain::model::{CourseDetails, PerformanceSummary, TeachingSummary};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Courses,
    Lecturers,
    Students,
}

impl Section {
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Courses => "Courses:",
            Section::Lecturers => "Lecturers:",
            Section::Students => "Students:",
        }
    }
}

/// Rendering collaborator. Entities and the reporter push what they have to
/// say here instead of printing.
pub trait ReportSink {
    fn begin_report(&mut self) -> Result<()> {
        Ok(())
    }

    fn begin_section(&mut self, _section: Section) -> Result<()> {
        Ok(())
    }

    fn course_details(&mut self, details: &CourseDetails) -> Result<()>;

    fn teaching_summary(&mut self, summary: &TeachingSummary) -> Result<()>;

    fn performance_summary(&mut self, summary: &PerformanceSummary) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
