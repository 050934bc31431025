//! CLI argument parsing via `clap`.

use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "member-order",
    version,
    about = "Check and fix the declaration order of class members",
    long_about = "member-order — classifies class members (inject, input, input.required, output, other) from host-supplied member documents, reports members declared out of the configured order, and rewrites each class body into that order.\n\nConfiguration precedence: CLI > member-order.toml > defaults.",
    after_help = "Examples:\n  member-order lint\n  member-order lint src/app/foo.members.json --output json\n  member-order format --diff\n  member-order format --write --order input,input.required,output,inject,other",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current member-order version.")]
    Version,
    /// Report out-of-order members
    #[command(
        about = "Run member order checks",
        long_about = "Report every member declared after a category that should follow it. Error-level issues make the command exit non-zero.",
        after_help = "Examples:\n  member-order lint\n  member-order lint --level warn --output json"
    )]
    Lint {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Rewrite class bodies into the configured order
    #[command(
        about = "Reorder class members",
        long_about = "Replace each out-of-order class body with its members stably sorted by category. When --diff or --check is set, write is disabled.",
        after_help = "Examples:\n  member-order format --diff\n  member-order format --write"
    )]
    Format {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Write changes to source files")]
        write: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Show diffs for changed files (implies write=false)")]
        diff: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if changes would occur (implies write=false)")]
        check: bool,
    },
}

#[derive(Args)]
/// Options shared by `lint` and `format`.
pub struct CommonArgs {
    #[arg(help = "Member documents to process (default: configured patterns)")]
    pub paths: Vec<String>,
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Category order, comma separated (all of inject,input,input.required,output,other)"
    )]
    pub order: Option<Vec<String>>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Trace every member and verdict to stderr")]
    pub logging: bool,
    #[arg(long, help = "Severity of order issues: info|warn|error (default: error)")]
    pub level: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}

impl CommonArgs {
    /// CLI values as configuration overrides; unset flags defer to the file.
    pub fn overrides(self) -> Overrides {
        Overrides {
            repo_root: self.repo_root,
            order: self.order,
            logging: self.logging.then_some(true),
            level: self.level,
            output: self.output,
            paths: self.paths,
            ..Overrides::default()
        }
    }
}
