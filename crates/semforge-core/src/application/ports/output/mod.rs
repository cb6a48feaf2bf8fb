//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! All are object-safe; services hold them behind `Box<dyn ...>`.

use std::path::Path;

use crate::domain::ToolDescriptor;
use crate::error::SemforgeResult;

/// Port for descriptor acquisition.
///
/// Implemented by:
/// - `ShellDescriptorSource` (production, runs the tool)
/// - canned sources in tests
pub trait DescriptorSource: Send + Sync {
    /// Queries one tool for its self-description.
    ///
    /// Failures are fatal for the whole batch: an unreachable tool or
    /// unparseable output stops generation, there is no retry here.
    fn fetch(&self, tool: &str) -> SemforgeResult<ToolDescriptor>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `LocalFilesystem` (production)
/// - `MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Appending is first-class: manifests grow line by line while a plan
///   executes.
/// - Removal is recursive; callers check `exists` first where removal of
///   an absent path would be an error.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SemforgeResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> SemforgeResult<()>;

    /// Append content to a file, creating it if absent.
    fn append_file(&self, path: &Path, content: &str) -> SemforgeResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all its contents.
    fn remove_dir_all(&self, path: &Path) -> SemforgeResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> SemforgeResult<()>;
}

/// Port for per-tool progress reporting.
///
/// Implemented by:
/// - `ConsoleReporter` (production)
/// - `SilentReporter` (testing, previews)
pub trait ProgressReporter: Send + Sync {
    /// Announces that generation for `tool` is starting. Called before
    /// acquisition, so a failing tool is identifiable in the output.
    fn tool_started(&self, tool: &str);
}
