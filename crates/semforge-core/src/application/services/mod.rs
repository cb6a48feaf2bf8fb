//! Application services - orchestrate use cases.

pub mod generate_service;

pub use generate_service::{apply_write_steps, GenerateService};
