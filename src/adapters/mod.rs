// Adapters layer: concrete ReportSink implementations (text, json, csv).

pub mod csv_sink;
pub mod json_sink;
pub mod text_sink;

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::core::registrar::Registrar;
use crate::core::report::Reporter;
use crate::utils::error::Result;

pub use csv_sink::CsvSink;
pub use json_sink::JsonSink;
pub use text_sink::TextSink;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Runs the full report for `registrar` in the requested format.
pub fn render<W: Write>(registrar: &Registrar, format: OutputFormat, writer: W) -> Result<()> {
    tracing::debug!("Rendering report as {:?}", format);
    match format {
        OutputFormat::Text => Reporter::full_report(registrar, &mut TextSink::new(writer)),
        OutputFormat::Json => Reporter::full_report(registrar, &mut JsonSink::new(writer)),
        OutputFormat::Csv => Reporter::full_report(registrar, &mut CsvSink::new(writer)),
    }
}
