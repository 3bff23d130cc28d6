//! Generate command - Write the module file to disk.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use modgen_templates::{FsFileWriter, ModuleFileGenerator};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the module configuration (yaml, json or toml)
    #[arg(short, long)]
    config: PathBuf,

    /// Output root, overriding `rootPath` from the configuration
    #[arg(short, long)]
    root: Option<PathBuf>,
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    let config = super::load_config(&args.config, args.root.as_deref())?;
    info!(
        "Generating module file for {} in {}",
        config.canonical_name(),
        config.root_path().display()
    );

    let generator = ModuleFileGenerator::new(Arc::new(FsFileWriter));
    let warnings = generator.generate(&config).await?;

    for warning in &warnings {
        println!("⚠️  {}", warning);
    }
    if warnings.is_empty() {
        println!("✅ Module file generated");
    } else {
        println!("✅ Module file generated with {} warning(s)", warnings.len());
    }

    Ok(())
}
