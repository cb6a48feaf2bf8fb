//! Progress reporting adapters.

use semforge_core::application::ports::ProgressReporter;

const BANNER_WIDTH: usize = 80;

/// Reporter that prints a banner per tool to stdout. Batch runs over many
/// tools produce long logs; the banner makes each tool's section easy to
/// find, and a crash mid-batch names its tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for ConsoleReporter {
    fn tool_started(&self, tool: &str) {
        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("Generating Definition for module {tool}");
        println!("{}", "^".repeat(BANNER_WIDTH));
    }
}

/// Reporter that says nothing. Used for quiet runs and previews, where
/// stdout carries the generated text itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl SilentReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for SilentReporter {
    fn tool_started(&self, _tool: &str) {}
}
