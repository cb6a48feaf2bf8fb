//! Infrastructure adapters for Semforge.
//!
//! This crate implements the ports defined in `semforge-core::application::ports`.
//! It contains all external dependencies and I/O operations: running tools
//! to capture their self-descriptions, parsing descriptor markup, and
//! materializing generated package trees on disk.

pub mod descriptor;
pub mod filesystem;
pub mod reporter;

// Re-export commonly used adapters
pub use descriptor::{apply_compat_rewrites, parse_descriptor, ShellDescriptorSource};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reporter::{ConsoleReporter, SilentReporter};
