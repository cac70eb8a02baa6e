use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use konfigen_core::file::GeneratedFile;
use konfigen_kotlin::BuildConfigKt;
use konfigen_manifest::Manifest;

use super::OrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to konfigen.toml (defaults to ./konfigen.toml)
    #[arg(short, long, default_value = "konfigen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).or_exit();
        let file = BuildConfigKt::new(manifest, chrono::Local::now().naive_local());
        let target = file.path(&self.output);

        if self.dry_run {
            println!("── {} ──", target.display());
            print!("{}", file.render());
            return Ok(());
        }

        file.write(&self.output)
            .wrap_err("failed to write BuildConfig.kt")?;
        println!("Generated: {}", target.display());

        Ok(())
    }
}
