pub mod registrar;
pub mod report;

pub use crate::domain::ports::{ReportSink, Section};
pub use crate::utils::error::Result;
pub use registrar::Registrar;
pub use report::Reporter;
