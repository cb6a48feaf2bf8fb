//! Application layer for semforge.
//!
//! This layer contains:
//! - **Services**: use case orchestration ([`GenerateService`])
//! - **Ports**: trait definitions for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! schema logic itself. All classification and rendering rules live in
//! [`crate::domain`].

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{apply_write_steps, GenerateService};

// Re-export port traits (for adapter implementation)
pub use ports::{DescriptorSource, Filesystem, ProgressReporter};

pub use error::ApplicationError;
