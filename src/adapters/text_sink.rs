use std::io::Write;

use crate::domain::model::{CourseDetails, PerformanceSummary, TeachingSummary};
use crate::domain::ports::{ReportSink, Section};
use crate::utils::error::Result;

/// Plain-text layout for terminals.
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn begin_report(&mut self) -> Result<()> {
        writeln!(self.writer, "\n=== University Report ===\n")?;
        Ok(())
    }

    fn begin_section(&mut self, section: Section) -> Result<()> {
        writeln!(self.writer, "{}", section.heading())?;
        Ok(())
    }

    fn course_details(&mut self, details: &CourseDetails) -> Result<()> {
        writeln!(
            self.writer,
            "{}: {}, Credits: {}, Lecturer: {}",
            details.code, details.title, details.credit_hours, details.lecturer
        )?;
        writeln!(self.writer, "Enrolled students:")?;
        for name in &details.students {
            writeln!(self.writer, "- {}", name)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn teaching_summary(&mut self, summary: &TeachingSummary) -> Result<()> {
        writeln!(self.writer, "Lecturer: {} ({})", summary.name, summary.department)?;
        for load in &summary.courses {
            writeln!(self.writer, "Teaching: {} ({} students)", load.title, load.enrolled)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn performance_summary(&mut self, summary: &PerformanceSummary) -> Result<()> {
        writeln!(
            self.writer,
            "{} | GPA: {:.2} | Attendance: {:.1}%",
            summary.name, summary.gpa, summary.attendance
        )?;
        writeln!(self.writer, "Performance: {}", summary.classification)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::Performance;
    use crate::domain::model::TeachingLoad;

    #[test]
    fn test_course_block() {
        let mut sink = TextSink::new(Vec::new());
        sink.course_details(&CourseDetails {
            code: "CS101".to_string(),
            title: "Intro to Programming".to_string(),
            credit_hours: 3,
            lecturer: "TBA".to_string(),
            students: vec!["Alice".to_string(), "Bob".to_string()],
        })
        .unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "CS101: Intro to Programming, Credits: 3, Lecturer: TBA\n\
             Enrolled students:\n- Alice\n- Bob\n\n"
        );
    }

    #[test]
    fn test_lecturer_and_student_lines() {
        let mut sink = TextSink::new(Vec::new());
        sink.teaching_summary(&TeachingSummary {
            name: "Dr. Smith".to_string(),
            department: "CS".to_string(),
            courses: vec![TeachingLoad {
                title: "Intro to Programming".to_string(),
                enrolled: 2,
            }],
        })
        .unwrap();
        sink.performance_summary(&PerformanceSummary {
            student_id: "S001".to_string(),
            name: "Alice".to_string(),
            gpa: 4.0,
            attendance: 75.0,
            classification: Performance::Satisfactory,
        })
        .unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains(
            "Lecturer: Dr. Smith (CS)\nTeaching: Intro to Programming (2 students)\n"
        ));
        assert!(text.contains(
            "Alice | GPA: 4.00 | Attendance: 75.0%\nPerformance: Satisfactory\n"
        ));
    }
}
