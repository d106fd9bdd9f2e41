pub mod demo;

pub use demo::seed_demo;
