mod check;
mod completions;
mod generate;
mod init;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

/// Manifest errors exit through a miette report instead of bubbling into
/// eyre, keeping the span-annotated source snippet.
pub(crate) trait OrExit<T> {
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for konfigen_manifest::Result<T> {
    fn or_exit(self) -> T {
        self.unwrap_or_else(|e| {
            eprintln!("{:?}", miette::Report::new(*e));
            std::process::exit(1)
        })
    }
}

#[derive(Parser)]
#[command(
    name = "konfigen",
    version,
    about = "Generate Kotlin BuildConfig files from TOML manifests"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter konfigen.toml
    Init(InitCommand),

    /// Generate BuildConfig.kt from konfigen.toml
    Generate(GenerateCommand),

    /// Validate konfigen.toml and summarize it
    Check(CheckCommand),

    /// Emit shell completion definitions
    Completions(CompletionsCommand),
}
