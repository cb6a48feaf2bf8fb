//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "semforge",
    bin_name = "semforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2699} Typed wrapper generation for self-describing imaging tools",
    long_about = "Semforge queries command-line imaging tools for their XML \
                  self-descriptions and generates typed wrapper modules, \
                  organised into a package tree by tool category.",
    after_help = "EXAMPLES:\n\
        \x20 semforge generate BRAINSFit BRAINSResample -o generated\n\
        \x20 semforge generate --launcher \"/opt/Slicer3 --launch\" BRAINSFit\n\
        \x20 semforge show BRAINSFit\n\
        \x20 semforge completions bash > /usr/share/bash-completion/completions/semforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate wrapper modules for a batch of tools.
    #[command(
        visible_alias = "gen",
        about = "Generate wrapper modules",
        after_help = "EXAMPLES:\n\
            \x20 semforge generate BRAINSFit BRAINSResample\n\
            \x20 semforge generate --launcher \"/opt/Slicer3 --launch\" --output wrappers BRAINSFit\n\
            \x20 semforge generate --compat MedicAlgorithmSPECTRE2010\n\
            \x20 semforge generate          # tools from the configuration file"
    )]
    Generate(GenerateArgs),

    /// Render one tool's generated module to stdout.
    #[command(
        about = "Preview one tool's generated module",
        after_help = "EXAMPLES:\n\
            \x20 semforge show BRAINSFit\n\
            \x20 semforge show BRAINSFit --output-format json\n\
            \x20 semforge show --launcher \"/opt/Slicer3 --launch\" BRAINSResample"
    )]
    Show(ShowArgs),

    /// Initialise a Semforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 semforge init                      # default location\n\
            \x20 semforge init --path semforge.toml # explicit path\n\
            \x20 semforge init --force              # overwrite existing"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 semforge completions bash > ~/.local/share/bash-completion/completions/semforge\n\
            \x20 semforge completions zsh  > ~/.zfunc/_semforge\n\
            \x20 semforge completions fish > ~/.config/fish/completions/semforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `semforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Tools to wrap.  When empty, the configured `batch.tools` list is
    /// used instead.
    #[arg(value_name = "TOOL", help = "Tools to generate wrappers for")]
    pub tools: Vec<String>,

    /// Launcher prefix prepended to every tool invocation.  The value is
    /// shell text and may contain spaces.
    #[arg(
        short = 'l',
        long = "launcher",
        value_name = "PREFIX",
        help = "Launcher prefix for tool invocations (may contain spaces)"
    )]
    pub launcher: Option<String>,

    /// Root directory of the generated package tree.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory for the generated package tree"
    )]
    pub output: Option<PathBuf>,

    /// Enable corrective rewrites for the non-conformant tool family.
    #[arg(long = "compat", help = "Repair descriptors from known non-conformant tools")]
    pub compat: bool,

    /// Mark generated wrappers as needing an X display redirect.
    #[arg(long = "redirect-x", help = "Generated wrappers redirect the X display")]
    pub redirect_x: bool,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `semforge show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Tool to preview.
    #[arg(value_name = "TOOL", help = "Tool to query and render")]
    pub tool: String,

    /// Launcher prefix prepended to the tool invocation.
    #[arg(
        short = 'l',
        long = "launcher",
        value_name = "PREFIX",
        help = "Launcher prefix for the tool invocation (may contain spaces)"
    )]
    pub launcher: Option<String>,

    /// Enable corrective rewrites for the non-conformant tool family.
    #[arg(long = "compat", help = "Repair descriptors from known non-conformant tools")]
    pub compat: bool,

    /// Mark the generated wrapper as needing an X display redirect.
    #[arg(long = "redirect-x", help = "Generated wrapper redirects the X display")]
    pub redirect_x: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `semforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the configuration file.
    #[arg(
        long = "path",
        value_name = "FILE",
        help = "Configuration file location (default: platform config dir)"
    )]
    pub path: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `semforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
