use chrono::Utc;
use std::io::Write;

use crate::domain::model::{CourseDetails, PerformanceSummary, TeachingSummary, UniversityReport};
use crate::domain::ports::ReportSink;
use crate::utils::error::Result;

/// Buffers the whole report and writes it as one pretty-printed JSON document
/// on `finish`. `generated_at` is the time the sink was created.
pub struct JsonSink<W: Write> {
    writer: W,
    report: UniversityReport,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report: UniversityReport {
                generated_at: Utc::now(),
                courses: Vec::new(),
                lecturers: Vec::new(),
                students: Vec::new(),
            },
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn course_details(&mut self, details: &CourseDetails) -> Result<()> {
        self.report.courses.push(details.clone());
        Ok(())
    }

    fn teaching_summary(&mut self, summary: &TeachingSummary) -> Result<()> {
        self.report.lecturers.push(summary.clone());
        Ok(())
    }

    fn performance_summary(&mut self, summary: &PerformanceSummary) -> Result<()> {
        self.report.students.push(summary.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::Performance;

    #[test]
    fn test_finish_writes_collected_entries() {
        let before = Utc::now();
        let mut sink = JsonSink::new(Vec::new());
        sink.begin_report().unwrap();
        sink.performance_summary(&PerformanceSummary {
            student_id: "S002".to_string(),
            name: "Bob".to_string(),
            gpa: 4.0,
            attendance: 50.0,
            classification: Performance::Warning,
        })
        .unwrap();
        sink.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(value["students"][0]["name"], "Bob");
        assert_eq!(value["students"][0]["classification"], "Warning");
        assert!(value["courses"].as_array().unwrap().is_empty());

        let generated: chrono::DateTime<Utc> =
            serde_json::from_value(value["generated_at"].clone()).unwrap();
        assert!(generated >= before);
    }
}
