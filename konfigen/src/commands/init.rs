use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use konfigen_core::file::{File, GeneratedFile, Overwrite, WriteResult};

const STARTER: &str = r#"[application]
id = "com.example.app"
environment = "development"
version = "0.1.0"
comprehensive-version = false

[desktop]
main-class = "com.example.app.MainKt"
package-name = "Example App"

[fields]
# Plain values pick their own type:
# api_endpoint = "https://api.example.com"
# debug = true
# An explicit type widens or narrows:
# max_cache_bytes = { type = "long", value = 1048576 }
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to place konfigen.toml in (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let starter = File::new("konfigen.toml", STARTER).with_overwrite(Overwrite::IfMissing);

        if starter.write(&self.output)? == WriteResult::Skipped {
            println!(
                "konfigen.toml already exists in {}, leaving it untouched",
                self.output.display()
            );
            return Ok(());
        }

        println!("Created konfigen.toml in {}", self.output.display());
        println!();
        println!("Next steps:");
        if self.output != Path::new(".") {
            println!("  cd {}", self.output.display());
        }
        println!("  konfigen check");
        println!("  konfigen generate");

        Ok(())
    }
}
