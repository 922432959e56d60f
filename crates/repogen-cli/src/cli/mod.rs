//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "repogen",
    bin_name = "repogen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Repository-pattern boilerplate for Laravel projects",
    long_about = "repogen generates the interface, repository, and base-class \
                  boilerplate of the repository pattern, and keeps the \
                  config/repositories.php binding table up to date.",
    after_help = "EXAMPLES:\n\
        \x20 repogen make --interface UserRepositoryInterface --repository UserRepository --model User\n\
        \x20 repogen make -i PostRepositoryInterface -r PostRepository -m Post --yes\n\
        \x20 repogen init\n\
        \x20 repogen completions bash > /usr/share/bash-completion/completions/repogen",
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
    /// Generate repository-pattern files.
    #[command(
        visible_alias = "mk",
        about = "Generate interface and repository boilerplate",
        after_help = "EXAMPLES:\n\
            \x20 repogen make -i UserRepositoryInterface -r UserRepository -m User\n\
            \x20 repogen make -i OrderRepositoryInterface -r OrderRepository -m Order --extends Shared/CachingRepository\n\
            \x20 repogen make -i UserRepositoryInterface -r UserRepository -m User --dry-run"
    )]
    Make(MakeArgs),

    /// Initialise a repogen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 repogen init           # repogen.toml in the current directory\n\
            \x20 repogen init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 repogen completions bash > ~/.local/share/bash-completion/completions/repogen\n\
            \x20 repogen completions zsh  > ~/.zfunc/_repogen\n\
            \x20 repogen completions fish > ~/.config/fish/completions/repogen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `repogen make`.
///
/// The three class options are intentionally *not* marked required: presence
/// is validated by the core in a fixed priority order so the error messages
/// stay consistent however the command is driven.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Interface to generate.
    #[arg(
        short = 'i',
        long = "interface",
        value_name = "CLASS",
        help = "Interface name, e.g. UserRepositoryInterface"
    )]
    pub interface: Option<String>,

    /// Repository implementation to generate.
    #[arg(
        short = 'r',
        long = "repository",
        value_name = "CLASS",
        help = "Repository class, e.g. UserRepository"
    )]
    pub repository: Option<String>,

    /// Backing Eloquent model.
    #[arg(
        short = 'm',
        long = "model",
        value_name = "CLASS",
        help = "Model class, e.g. User"
    )]
    pub model: Option<String>,

    /// Parent class the repository extends instead of BaseRepository.
    #[arg(
        long = "extends",
        value_name = "CLASS",
        help = "Parent class for the generated repository"
    )]
    pub extends: Option<String>,

    /// Skip confirmation prompts (assume yes).
    #[arg(short = 'y', long = "yes", help = "Answer yes to every prompt")]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `repogen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `repogen completions`.
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
