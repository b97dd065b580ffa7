//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.
//!
//! Invoked with no subcommand, `seedling` runs the interactive wizard —
//! all project input is collected through prompts, never flags.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "seedling",
    bin_name = "seedling",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Interactive project provisioning",
    long_about = "Seedling provisions a new project from the remote template: \
                  it asks a few questions, fetches the template, stamps your \
                  answers into it, and sets up dependencies and git.",
    after_help = "EXAMPLES:\n\
        \x20 seedling                 # run the interactive wizard\n\
        \x20 seedling -v              # wizard with progress logging\n\
        \x20 seedling completions zsh > ~/.zfunc/_seedling",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Optional subcommand; none means "run the wizard".
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 seedling completions bash > ~/.local/share/bash-completion/completions/seedling\n\
            \x20 seedling completions zsh  > ~/.zfunc/_seedling\n\
            \x20 seedling completions fish > ~/.config/fish/completions/seedling.fish"
    )]
    Completions(CompletionsArgs),
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `seedling completions`.
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
