use serde::Serialize;
use std::io::Write;

use crate::domain::model::{CourseDetails, PerformanceSummary, TeachingSummary};
use crate::domain::ports::ReportSink;
use crate::utils::error::{RegistrarError, Result};

#[derive(Debug, Serialize)]
struct StudentRow<'a> {
    student_id: &'a str,
    name: &'a str,
    gpa: f64,
    attendance: String,
    classification: &'a str,
}

/// One CSV row per student. Course and lecturer sections have no tabular
/// form here and are skipped.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| RegistrarError::from(e.into_error()))
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    fn course_details(&mut self, _details: &CourseDetails) -> Result<()> {
        Ok(())
    }

    fn teaching_summary(&mut self, _summary: &TeachingSummary) -> Result<()> {
        Ok(())
    }

    fn performance_summary(&mut self, summary: &PerformanceSummary) -> Result<()> {
        self.writer.serialize(StudentRow {
            student_id: &summary.student_id,
            name: &summary.name,
            gpa: summary.gpa,
            attendance: format!("{:.1}", summary.attendance),
            classification: summary.classification.label(),
        })?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
