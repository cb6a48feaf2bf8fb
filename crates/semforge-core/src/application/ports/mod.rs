//! Application ports (traits) for external dependencies.
//!
//! Following hexagonal architecture, the application layer defines what it
//! needs from the outside world; the `semforge-adapters` crate supplies
//! the implementations.

pub mod output;

pub use output::{DescriptorSource, Filesystem, ProgressReporter};
