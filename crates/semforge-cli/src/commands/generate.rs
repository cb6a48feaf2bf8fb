//! Implementation of the `semforge generate` command.
//!
//! Responsibility: merge CLI arguments with configuration into a batch
//! request, wire the shell and filesystem adapters to the core generation
//! service, and display results. No classification logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument};

use semforge_adapters::{ConsoleReporter, LocalFilesystem, ShellDescriptorSource, SilentReporter};
use semforge_core::{
    application::{ports::ProgressReporter, GenerateService},
    domain::BatchOptions,
};

use crate::{
    cli::{global::GlobalArgs, GenerateArgs},
    commands::resolve_launcher,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `semforge generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the tool list (CLI arguments win over `batch.tools`)
/// 2. Merge flags with config into `BatchOptions`
/// 3. Wire adapters and run the whole batch through `GenerateService`
#[instrument(skip_all, fields(tools = args.tools.len()))]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve the tool list
    let tools = if args.tools.is_empty() {
        config.batch.tools.clone()
    } else {
        args.tools
    };

    if tools.is_empty() {
        output.warning("No tools to generate; pass tool names or configure batch.tools")?;
        return Ok(());
    }

    // 2. Merge flags with config
    let options = BatchOptions {
        launcher: resolve_launcher(args.launcher.as_deref(), &config),
        redirect_x: args.redirect_x || config.batch.redirect_x,
        compat: args.compat || config.batch.compat,
    };

    let output_root: PathBuf = args.output.unwrap_or_else(|| config.batch.output_dir.clone());

    // 3. Wire adapters and generate
    let source = Box::new(ShellDescriptorSource::new(
        options.launcher.clone(),
        options.compat,
    ));
    let filesystem = Box::new(LocalFilesystem::new());
    let reporter: Box<dyn ProgressReporter> = if output.is_quiet() {
        Box::new(SilentReporter::new())
    } else {
        Box::new(ConsoleReporter::new())
    };
    let service = GenerateService::new(source, filesystem, reporter);

    output.header(&format!("Generating wrappers for {} tools...", tools.len()))?;
    if !options.launcher.is_empty() {
        output.print(&format!("  Launcher: {}", options.launcher.join(" ")))?;
    }
    output.print(&format!("  Output:   {}", output_root.display()))?;
    output.print("")?;
    info!(output_root = %output_root.display(), "Generation started");

    service
        .generate(&tools, &options, &output_root)
        .map_err(CliError::Core)?;

    info!("Generation completed");

    output.success(&format!(
        "Generated {} wrappers under {}",
        tools.len(),
        output_root.display()
    ))?;

    Ok(())
}
