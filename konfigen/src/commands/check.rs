use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use konfigen_manifest::Manifest;

use super::OrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to konfigen.toml (defaults to ./konfigen.toml)
    #[arg(short, long, default_value = "konfigen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).or_exit();

        println!("✓ {} is valid\n", self.config.display());
        print_summary(&manifest);

        Ok(())
    }
}

fn print_summary(manifest: &Manifest) {
    let app = &manifest.application;
    println!("  {} v{}", app.id, app.version);
    match manifest.environment() {
        Some(env) => println!("  environment: {} ({})", env.name(), env.short_form()),
        None => println!("  environment: {} (custom)", app.environment),
    }
    if app.comprehensive_version {
        println!("  comprehensive version names: enabled");
    }

    println!();
    println!(
        "  distributable: {} v{}",
        manifest.desktop.package_name,
        manifest.package_version()
    );

    if manifest.fields.is_empty() {
        return;
    }
    let plural = if manifest.fields.len() == 1 { "" } else { "s" };
    println!("\n  {} custom field{plural}:", manifest.fields.len());
    for (name, value) in &manifest.fields {
        println!("    {name}: {}", value.type_name());
    }
}
