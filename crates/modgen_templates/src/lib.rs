//! # modgen_templates
//!
//! Templates for the module-level file of a generated GraphQL schema module.
//!
//! The centerpiece is [`PackageManifestTemplate`], which renders a
//! `Package.swift` for the schema module from a [`ModuleConfiguration`]:
//!
//! - package header and fixed platform minimums
//! - a library product per target
//! - the `apollo-ios` dependency, pinned by version, branch, commit or path
//! - the schema target and, optionally, a test mock target
//!
//! [`ModuleFileGenerator`] picks the right template for the configured module
//! type and writes the output through a [`FileWriter`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use modgen_config::ModuleConfiguration;
//! use modgen_templates::{FsFileWriter, ModuleFileGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ModuleConfiguration::new("starWars")?.with_root_path("Generated");
//!     let generator = ModuleFileGenerator::new(Arc::new(FsFileWriter));
//!
//!     for warning in generator.generate(&config).await? {
//!         eprintln!("warning: {}", warning);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`ModuleConfiguration`]: modgen_config::ModuleConfiguration

pub mod dependency;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod namespace;
pub mod output;
pub mod swift;
pub mod test_mocks;
pub mod writer;

pub use error::{GenerateError, GenerateResult};
pub use generator::{ModuleFileGenerator, RenderedFile, PACKAGE_MANIFEST_FILE};
pub use manifest::{
    ManifestHeader, PackageManifest, PackageManifestTemplate, Platform, Product, Target,
    TargetDependency,
};
pub use namespace::{NamespaceTemplate, SchemaNamespaceTemplate};
pub use output::{RenderResult, Warning};
pub use test_mocks::TestMockPlan;
pub use writer::{FileWriter, FsFileWriter, MemoryFileWriter};
