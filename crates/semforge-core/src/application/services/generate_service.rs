//! Generate service - the main application orchestrator.
//!
//! Coordinates the whole generation workflow:
//!
//! 1. Fetch each tool's descriptor, strictly in list order, fail-fast
//! 2. Classify and synthesise a spec per tool
//! 3. Plan the category tree and execute the plan
//!
//! The filesystem is untouched until every tool has synthesised cleanly;
//! a failure in step 1 or 2 leaves previous output intact.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::application::ports::{DescriptorSource, Filesystem, ProgressReporter};
use crate::domain::{synthesize, BatchOptions, PackageTree, ToolSpec, WriteStep};
use crate::error::SemforgeResult;

/// Main generation service.
pub struct GenerateService {
    source: Box<dyn DescriptorSource>,
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn ProgressReporter>,
}

impl GenerateService {
    pub fn new(
        source: Box<dyn DescriptorSource>,
        filesystem: Box<dyn Filesystem>,
        reporter: Box<dyn ProgressReporter>,
    ) -> Self {
        Self {
            source,
            filesystem,
            reporter,
        }
    }

    /// Generates wrapper modules for every tool in `tools`, materialising
    /// the category tree under `output_root`.
    #[instrument(skip_all, fields(tools = tools.len(), output = %output_root.display()))]
    pub fn generate(
        &self,
        tools: &[String],
        options: &BatchOptions,
        output_root: &Path,
    ) -> SemforgeResult<()> {
        info!("Generating definitions for {} tools", tools.len());

        let mut tree = PackageTree::new();
        for tool in tools {
            self.reporter.tool_started(tool);
            let spec = self.synthesize_tool(tool, options)?;
            tree.insert(&spec);
        }

        // Each run starts from an empty root manifest. Subpackage
        // manifests are cleared only when their directory is rebuilt.
        let root_manifest = output_root.join("__init__.py");
        if self.filesystem.exists(&root_manifest) {
            self.filesystem.remove_file(&root_manifest)?;
        }

        let steps = tree.plan(output_root);
        debug!(steps = steps.len(), "Applying write plan");
        apply_write_steps(self.filesystem.as_ref(), &steps)?;

        info!("Generation completed successfully");
        Ok(())
    }

    /// Fetches and synthesises one tool without touching the filesystem.
    #[instrument(skip_all, fields(tool = %tool))]
    pub fn synthesize_tool(&self, tool: &str, options: &BatchOptions) -> SemforgeResult<ToolSpec> {
        let descriptor = self.source.fetch(tool)?;
        debug!(
            groups = descriptor.groups.len(),
            "Descriptor acquired"
        );
        Ok(synthesize(&descriptor, options)?)
    }

    /// Renders one tool's complete module text without writing anything.
    pub fn preview(&self, tool: &str, options: &BatchOptions) -> SemforgeResult<String> {
        let spec = self.synthesize_tool(tool, options)?;
        Ok(crate::domain::render_module_file(&[spec.render_definition()]))
    }
}

/// Executes a materialisation plan against a filesystem port.
///
/// Step order matters: directory removal precedes recreation, and
/// manifest appends accumulate in plan order.
pub fn apply_write_steps(filesystem: &dyn Filesystem, steps: &[WriteStep]) -> SemforgeResult<()> {
    for step in steps {
        match step {
            WriteStep::RemoveDir(path) => {
                if filesystem.exists(path) {
                    filesystem.remove_dir_all(path)?;
                }
            }
            WriteStep::EnsureDir(path) => filesystem.create_dir_all(path)?,
            WriteStep::WriteFile { path, content } => filesystem.write_file(path, content)?,
            WriteStep::AppendFile { path, content } => filesystem.append_file(path, content)?,
        }
    }
    Ok(())
}
