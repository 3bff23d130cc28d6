//! CLI command definitions.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use modgen_config::{ConfigLoader, ModuleConfiguration};

pub mod generate;
pub mod render;

/// modgen - schema module file generator
#[derive(Parser)]
#[command(name = "modgen")]
#[command(version, about = "Generate the module file for a GraphQL schema module")]
#[command(long_about = r#"
modgen renders the module-level file of a generated GraphQL schema module:
a Package.swift for Swift packages, or a namespace file for schema types
embedded in an existing target.

COMMANDS:
  render    → Print the rendered module file
  generate  → Write the module file under the configured root

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or configuration
  4 - Template or write error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the rendered module file to stdout
    Render(render::RenderArgs),

    /// Write the module file to disk
    Generate(generate::GenerateArgs),
}

/// Load a configuration file and apply an optional root override.
pub(crate) fn load_config(path: &Path, root: Option<&Path>) -> Result<ModuleConfiguration> {
    let config = ConfigLoader::load(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    Ok(match root {
        Some(root) => config.with_root_path(root),
        None => config,
    })
}
