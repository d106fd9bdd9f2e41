pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{render, OutputFormat};
pub use config::ScenarioConfig;
pub use core::{Registrar, Reporter};
pub use domain::course::Course;
pub use domain::lecturer::Lecturer;
pub use domain::model::{Grade, Member, Person, Role, UniversityReport};
pub use domain::student::Student;
pub use utils::error::{RegistrarError, Result};
