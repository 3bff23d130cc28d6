//! # modgen_config
//!
//! Configuration model for schema module generation.
//!
//! A [`ModuleConfiguration`] describes how a generated GraphQL schema module is
//! packaged:
//!
//! - the schema namespace, from which the canonical module name is derived
//! - the packaging strategy ([`ModuleType`])
//! - the `apollo-ios` dependency pin ([`DependencyType`])
//! - where test mocks go ([`TestMockOutput`])
//!
//! ## Example
//!
//! ```rust,no_run
//! use modgen_config::{ConfigLoader, DependencyType, ModuleConfiguration};
//! use std::path::Path;
//!
//! // Load from a file
//! let config = ConfigLoader::load(Path::new("modgen.yaml")).unwrap();
//!
//! // Or build one in code
//! let config = ModuleConfiguration::new("starWars")
//!     .unwrap()
//!     .with_dependency(DependencyType::Branch("main".into()));
//! assert_eq!(config.canonical_name().as_str(), "StarWars");
//! ```

pub mod casing;
pub mod error;
pub mod loader;
pub mod models;

pub use casing::{canonicalize, CanonicalName, SchemaNamespace};
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use models::{
    DependencyType, ModuleConfiguration, ModuleType, SwiftToolsVersion, TestMockOutput,
    APOLLO_SDK_VERSION, DEFAULT_SWIFT_TOOLS_VERSION,
};
