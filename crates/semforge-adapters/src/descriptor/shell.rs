//! Shell-based descriptor acquisition.
//!
//! Tools describe themselves when invoked with `--xml`. The launcher
//! prefix and the tool identifier are joined into one shell command line,
//! so launcher entries may be arbitrary shell text (wrapper scripts,
//! environment prefixes). Capture is stdout only; tools routinely chatter
//! on stderr while still emitting a clean descriptor.

use std::process::Command;

use semforge_core::application::ApplicationError;
use semforge_core::prelude::*;

use super::compat::apply_compat_rewrites;
use super::xml::parse_descriptor;

/// [`DescriptorSource`] that runs `<launcher> <tool> --xml` through `sh`.
pub struct ShellDescriptorSource {
    launcher: Vec<String>,
    compat: bool,
}

impl ShellDescriptorSource {
    /// Creates a source with the given launcher prefix. `compat` enables
    /// the corrective rewrites for known non-conformant tool families.
    pub fn new(launcher: Vec<String>, compat: bool) -> Self {
        Self { launcher, compat }
    }

    /// Shell command line that queries one tool.
    fn command_line(&self, tool: &str) -> String {
        let mut parts = self.launcher.clone();
        parts.push(tool.to_string());
        parts.push("--xml".to_string());
        parts.join(" ")
    }
}

impl DescriptorSource for ShellDescriptorSource {
    fn fetch(&self, tool: &str) -> SemforgeResult<ToolDescriptor> {
        let command_line = self.command_line(tool);
        tracing::debug!(%tool, command = %command_line, "Querying tool for its self-description");

        let output = Command::new("sh")
            .arg("-c")
            .arg(&command_line)
            .output()
            .map_err(|err| ApplicationError::DescriptorFetch {
                tool: tool.to_string(),
                reason: err.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(%tool, "stderr: {}", stderr.trim());
            return Err(ApplicationError::DescriptorFetch {
                tool: tool.to_string(),
                reason: format!("exited with {}", output.status),
            }
            .into());
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        let text = if self.compat {
            apply_compat_rewrites(&raw)
        } else {
            raw.trim().to_string()
        };

        parse_descriptor(tool, &text).map_err(|err| {
            tracing::error!(%tool, "Captured text was not a parseable descriptor:\n{text}");
            err
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
