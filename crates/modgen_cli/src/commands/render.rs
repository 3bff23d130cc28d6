//! Render command - Print the module file without writing it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::{info, warn};

use modgen_templates::{ModuleFileGenerator, SchemaNamespaceTemplate};

#[derive(Args)]
pub struct RenderArgs {
    /// Path to the module configuration (yaml, json or toml)
    #[arg(short, long)]
    config: PathBuf,
}

pub async fn execute(args: RenderArgs) -> Result<()> {
    let config = super::load_config(&args.config, None)?;
    match ModuleFileGenerator::render_file(&config, &SchemaNamespaceTemplate) {
        Some(file) => {
            info!("Rendered {}", file.path.display());
            for warning in &file.result.warnings {
                warn!("{}", warning);
            }
            print!("{}", file.result.text);
        }
        None => {
            info!(
                "Module type for {} needs no module file",
                config.schema_namespace()
            );
        }
    }

    Ok(())
}
