//! Module configuration model.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::casing::{CanonicalName, SchemaNamespace};
use crate::error::ConfigResult;

/// `apollo-ios` release pinned by default in generated manifests.
pub const APOLLO_SDK_VERSION: &str = "1.15.1";

/// Default `swift-tools-version` declared in generated manifests.
pub const DEFAULT_SWIFT_TOOLS_VERSION: &str = "5.7";

/// Minimum Swift toolchain declared in a generated package manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwiftToolsVersion(String);

impl SwiftToolsVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SwiftToolsVersion {
    fn default() -> Self {
        Self(DEFAULT_SWIFT_TOOLS_VERSION.to_string())
    }
}

impl fmt::Display for SwiftToolsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the generated schema module is packaged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleType {
    /// A standalone Swift package with its own `Package.swift`.
    SwiftPackageManager(SwiftToolsVersion),
    /// Types live inside an existing target under a namespace enum.
    EmbeddedInTarget,
    /// The module is wired up by the user; nothing is generated for it.
    Other,
}

impl Default for ModuleType {
    fn default() -> Self {
        ModuleType::SwiftPackageManager(SwiftToolsVersion::default())
    }
}

/// How the generated package depends on `apollo-ios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyType {
    PinnedVersion(String),
    Branch(String),
    Commit(String),
    LocalPath(String),
}

impl Default for DependencyType {
    fn default() -> Self {
        DependencyType::PinnedVersion(APOLLO_SDK_VERSION.to_string())
    }
}

/// Where generated test mocks go.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestMockOutput {
    /// No test mocks.
    #[default]
    None,
    /// Mocks are written to a directory outside the generated package.
    AbsolutePath(PathBuf),
    /// Mocks get their own target and product inside the generated package.
    #[serde(rename_all = "camelCase")]
    SeparateModule {
        #[serde(default)]
        target_name: Option<String>,
    },
}

fn default_root_path() -> PathBuf {
    PathBuf::from(".")
}

/// Configuration driving schema module file generation.
///
/// Values are immutable once built; use the `with_*` methods while
/// constructing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfiguration {
    schema_namespace: SchemaNamespace,
    #[serde(default = "default_root_path")]
    root_path: PathBuf,
    // Variants are written as single-key maps (`branch: main`) in every format.
    #[serde(
        default,
        rename = "moduleType",
        with = "serde_yaml::with::singleton_map"
    )]
    output_module_type: ModuleType,
    #[serde(
        default,
        rename = "testMocks",
        with = "serde_yaml::with::singleton_map"
    )]
    test_mock_output: TestMockOutput,
    #[serde(
        default,
        rename = "dependency",
        with = "serde_yaml::with::singleton_map"
    )]
    dependency_type: DependencyType,
}

impl ModuleConfiguration {
    /// Create a configuration with defaults for everything but the namespace.
    pub fn new(schema_namespace: impl Into<String>) -> ConfigResult<Self> {
        Ok(Self::with_namespace(SchemaNamespace::new(schema_namespace)?))
    }

    pub fn with_namespace(schema_namespace: SchemaNamespace) -> Self {
        Self {
            schema_namespace,
            root_path: default_root_path(),
            output_module_type: ModuleType::default(),
            test_mock_output: TestMockOutput::default(),
            dependency_type: DependencyType::default(),
        }
    }

    pub fn with_root_path(mut self, root_path: impl Into<PathBuf>) -> Self {
        self.root_path = root_path.into();
        self
    }

    pub fn with_module_type(mut self, module_type: ModuleType) -> Self {
        self.output_module_type = module_type;
        self
    }

    pub fn with_test_mocks(mut self, test_mocks: TestMockOutput) -> Self {
        self.test_mock_output = test_mocks;
        self
    }

    pub fn with_dependency(mut self, dependency: DependencyType) -> Self {
        self.dependency_type = dependency;
        self
    }

    pub fn schema_namespace(&self) -> &SchemaNamespace {
        &self.schema_namespace
    }

    /// Canonical module name, derived from the schema namespace.
    pub fn canonical_name(&self) -> CanonicalName {
        self.schema_namespace.canonical()
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn module_type(&self) -> &ModuleType {
        &self.output_module_type
    }

    pub fn test_mocks(&self) -> &TestMockOutput {
        &self.test_mock_output
    }

    pub fn dependency(&self) -> &DependencyType {
        &self.dependency_type
    }
}
