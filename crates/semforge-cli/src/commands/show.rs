//! Implementation of the `semforge show` command.
//!
//! Renders one tool's generated module text to stdout without touching the
//! filesystem.  With `--output-format json` the synthesised spec is emitted
//! as JSON instead, for scripting against the classification result.

use tracing::instrument;

use semforge_adapters::{LocalFilesystem, ShellDescriptorSource, SilentReporter};
use semforge_core::{application::GenerateService, domain::BatchOptions, error::SemforgeError};

use crate::{
    cli::{global::GlobalArgs, OutputFormat, ShowArgs},
    commands::resolve_launcher,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `semforge show` command.
#[instrument(skip_all, fields(tool = %args.tool))]
pub fn execute(
    args: ShowArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let options = BatchOptions {
        launcher: resolve_launcher(args.launcher.as_deref(), &config),
        redirect_x: args.redirect_x || config.batch.redirect_x,
        compat: args.compat || config.batch.compat,
    };

    let source = Box::new(ShellDescriptorSource::new(
        options.launcher.clone(),
        options.compat,
    ));
    let service = GenerateService::new(
        source,
        Box::new(LocalFilesystem::new()),
        Box::new(SilentReporter::new()),
    );

    match output.format() {
        OutputFormat::Json => {
            let spec = service
                .synthesize_tool(&args.tool, &options)
                .map_err(CliError::Core)?;
            let json = serde_json::to_string_pretty(&spec).map_err(|e| {
                CliError::Core(SemforgeError::Internal {
                    message: format!("Failed to serialise spec: {e}"),
                })
            })?;
            println!("{json}");
        }
        _ => {
            let text = service
                .preview(&args.tool, &options)
                .map_err(CliError::Core)?;
            print!("{text}");
        }
    }

    Ok(())
}
