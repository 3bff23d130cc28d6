//! `Package.swift` manifest template.
//!
//! The template first builds a [`PackageManifest`], a structured view of the
//! five manifest blocks (header, platforms, products, dependencies, targets),
//! and only serializes it to Swift source as the last step. Block order and
//! layout are fixed: SwiftPM parses the result and downstream tooling keys on
//! the block order.

use std::fmt;

use modgen_config::{CanonicalName, DependencyType, ModuleConfiguration, SwiftToolsVersion};

use crate::dependency::{self, APOLLO_IOS_PACKAGE};
use crate::output::RenderResult;
use crate::swift::string_literal;
use crate::test_mocks::{self, TestMockPlan};

/// Product the schema module target links against.
pub const APOLLO_API_PRODUCT: &str = "ApolloAPI";

/// Product the test mock target links against.
pub const APOLLO_TEST_SUPPORT_PRODUCT: &str = "ApolloTestSupport";

/// Source folder of the primary schema module target.
pub const SOURCES_PATH: &str = "./Sources";

/// Minimum deployment targets declared by every generated package.
pub const SUPPORTED_PLATFORMS: [Platform; 4] = [
    Platform::new("iOS", "v12"),
    Platform::new("macOS", "v10_14"),
    Platform::new("tvOS", "v12"),
    Platform::new("watchOS", "v5"),
];

/// Toolchain declaration and package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestHeader {
    pub tools_version: SwiftToolsVersion,
    pub name: String,
}

/// A minimum platform version, e.g. `.iOS(.v12)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub name: &'static str,
    pub version: &'static str,
}

impl Platform {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}(.{})", self.name, self.version)
    }
}

/// A library product exposing one or more targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub targets: Vec<String>,
}

impl Product {
    /// A library exposing a single target of the same name.
    pub fn library(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            targets: vec![name.clone()],
            name,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets = self
            .targets
            .iter()
            .map(|t| string_literal(t))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            ".library(name: {}, targets: [{}])",
            string_literal(&self.name),
            targets
        )
    }
}

/// Something a target depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetDependency {
    /// A product from another package.
    Product { name: String, package: String },
    /// Another target in this package.
    Target { name: String },
}

impl fmt::Display for TargetDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetDependency::Product { name, package } => write!(
                f,
                ".product(name: {}, package: {})",
                string_literal(name),
                string_literal(package)
            ),
            TargetDependency::Target { name } => {
                write!(f, ".target(name: {})", string_literal(name))
            }
        }
    }
}

/// A source target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub dependencies: Vec<TargetDependency>,
    pub path: String,
}

/// Structured `Package.swift` contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    pub header: ManifestHeader,
    pub platforms: Vec<Platform>,
    pub products: Vec<Product>,
    pub dependencies: Vec<DependencyType>,
    pub targets: Vec<Target>,
}

impl fmt::Display for PackageManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// swift-tools-version:{}", self.header.tools_version)?;
        writeln!(f)?;
        writeln!(f, "import PackageDescription")?;
        writeln!(f)?;
        writeln!(f, "let package = Package(")?;
        writeln!(f, "  name: {},", string_literal(&self.header.name))?;

        writeln!(f, "  platforms: [")?;
        for platform in &self.platforms {
            writeln!(f, "    {platform},")?;
        }
        writeln!(f, "  ],")?;

        writeln!(f, "  products: [")?;
        for product in &self.products {
            writeln!(f, "    {product},")?;
        }
        writeln!(f, "  ],")?;

        writeln!(f, "  dependencies: [")?;
        for dependency in &self.dependencies {
            writeln!(f, "    {},", dependency::render(dependency))?;
        }
        writeln!(f, "  ],")?;

        writeln!(f, "  targets: [")?;
        for target in &self.targets {
            writeln!(f, "    .target(")?;
            writeln!(f, "      name: {},", string_literal(&target.name))?;
            writeln!(f, "      dependencies: [")?;
            for dependency in &target.dependencies {
                writeln!(f, "        {dependency},")?;
            }
            writeln!(f, "      ],")?;
            writeln!(f, "      path: {}", string_literal(&target.path))?;
            writeln!(f, "    ),")?;
        }
        writeln!(f, "  ]")?;
        writeln!(f, ")")
    }
}

/// Template producing the `Package.swift` of a schema module.
#[derive(Debug, Clone)]
pub struct PackageManifestTemplate {
    module_name: CanonicalName,
    tools_version: SwiftToolsVersion,
    dependency: DependencyType,
    test_mocks: Option<TestMockPlan>,
}

impl PackageManifestTemplate {
    pub fn new(
        module_name: CanonicalName,
        tools_version: SwiftToolsVersion,
        dependency: DependencyType,
        test_mocks: Option<TestMockPlan>,
    ) -> Self {
        Self {
            module_name,
            tools_version,
            dependency,
            test_mocks,
        }
    }

    /// Build the template inputs from a module configuration.
    pub fn from_config(config: &ModuleConfiguration, tools_version: &SwiftToolsVersion) -> Self {
        let module_name = config.canonical_name();
        let test_mocks = test_mocks::plan(config.test_mocks(), &module_name);
        Self::new(
            module_name,
            tools_version.clone(),
            config.dependency().clone(),
            test_mocks,
        )
    }

    /// Assemble the structured manifest.
    pub fn manifest(&self) -> PackageManifest {
        let name = self.module_name.as_str();

        let mut products = vec![Product::library(name)];
        let mut targets = vec![Target {
            name: name.to_string(),
            dependencies: vec![TargetDependency::Product {
                name: APOLLO_API_PRODUCT.to_string(),
                package: APOLLO_IOS_PACKAGE.to_string(),
            }],
            path: SOURCES_PATH.to_string(),
        }];

        if let Some(mocks) = &self.test_mocks {
            products.push(Product {
                name: mocks.product_name.clone(),
                targets: vec![mocks.target_name.clone()],
            });
            targets.push(Target {
                name: mocks.target_name.clone(),
                dependencies: vec![
                    TargetDependency::Product {
                        name: APOLLO_TEST_SUPPORT_PRODUCT.to_string(),
                        package: APOLLO_IOS_PACKAGE.to_string(),
                    },
                    TargetDependency::Target {
                        name: name.to_string(),
                    },
                ],
                path: mocks.source_path.clone(),
            });
        }

        PackageManifest {
            header: ManifestHeader {
                tools_version: self.tools_version.clone(),
                name: name.to_string(),
            },
            platforms: SUPPORTED_PLATFORMS.to_vec(),
            products,
            dependencies: vec![self.dependency.clone()],
            targets,
        }
    }

    /// Render `Package.swift`.
    pub fn render(&self) -> RenderResult {
        RenderResult::new(self.manifest().to_string())
    }
}
