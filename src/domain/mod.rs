// Domain layer: entities, metrics and ports. No I/O here beyond tracing.

pub mod course;
pub mod lecturer;
pub mod metrics;
pub mod model;
pub mod ports;
pub mod student;
