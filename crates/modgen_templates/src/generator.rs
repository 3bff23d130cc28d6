//! Schema module file generation.

use std::path::PathBuf;
use std::sync::Arc;

use modgen_config::{ModuleConfiguration, ModuleType};
use tracing::{debug, info};

use crate::error::{GenerateError, GenerateResult};
use crate::manifest::PackageManifestTemplate;
use crate::namespace::{NamespaceTemplate, SchemaNamespaceTemplate};
use crate::output::{RenderResult, Warning};
use crate::writer::FileWriter;

/// File name of a Swift package manifest.
pub const PACKAGE_MANIFEST_FILE: &str = "Package.swift";

/// A rendered artifact and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub result: RenderResult,
}

/// Generates the module-level file for a schema module.
///
/// Which file is produced depends on the configured [`ModuleType`]:
///
/// - `SwiftPackageManager`: `<root>/Package.swift`
/// - `EmbeddedInTarget`: `<root>/<Module>.graphql.swift`
/// - `Other`: nothing
pub struct ModuleFileGenerator {
    writer: Arc<dyn FileWriter>,
    namespace_template: Arc<dyn NamespaceTemplate>,
}

impl ModuleFileGenerator {
    /// Create a generator using the default namespace template.
    pub fn new(writer: Arc<dyn FileWriter>) -> Self {
        Self {
            writer,
            namespace_template: Arc::new(SchemaNamespaceTemplate),
        }
    }

    /// Replace the template used for embedded-in-target modules.
    pub fn with_namespace_template(mut self, template: Arc<dyn NamespaceTemplate>) -> Self {
        self.namespace_template = template;
        self
    }

    /// Render the module file with this generator's namespace template.
    pub fn render(&self, config: &ModuleConfiguration) -> Option<RenderedFile> {
        Self::render_file(config, self.namespace_template.as_ref())
    }

    /// Render the module file without writing it.
    ///
    /// Returns `None` when the module type needs no generated file.
    pub fn render_file(
        config: &ModuleConfiguration,
        namespace_template: &dyn NamespaceTemplate,
    ) -> Option<RenderedFile> {
        let root = config.root_path();

        match config.module_type() {
            ModuleType::SwiftPackageManager(tools_version) => {
                debug!(
                    "Rendering {} for module {}",
                    PACKAGE_MANIFEST_FILE,
                    config.canonical_name()
                );
                Some(RenderedFile {
                    path: root.join(PACKAGE_MANIFEST_FILE),
                    result: PackageManifestTemplate::from_config(config, tools_version).render(),
                })
            }
            ModuleType::EmbeddedInTarget => {
                let file_name = format!("{}.graphql.swift", config.canonical_name());
                debug!("Rendering namespace file {}", file_name);
                Some(RenderedFile {
                    path: root.join(file_name),
                    result: namespace_template.render(config),
                })
            }
            // Operation files import the module directly.
            ModuleType::Other => None,
        }
    }

    /// Render and write the module file, returning any warnings.
    pub async fn generate(&self, config: &ModuleConfiguration) -> GenerateResult<Vec<Warning>> {
        let Some(RenderedFile { path, result }) = self.render(config) else {
            debug!(
                "Module type for {} needs no module file",
                config.schema_namespace()
            );
            return Ok(Vec::new());
        };

        self.writer
            .write(&path, result.text.as_bytes())
            .await
            .map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;

        info!("Generated module file {:?}", path);
        Ok(result.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    use crate::writer::{MemoryFileWriter, MockFileWriter};
    use modgen_config::TestMockOutput;

    struct WarningNamespaceTemplate;

    impl NamespaceTemplate for WarningNamespaceTemplate {
        fn render(&self, config: &ModuleConfiguration) -> RenderResult {
            RenderResult::with_warnings(
                format!("enum {} {{}}\n", config.canonical_name()),
                vec![
                    Warning::new("namespace", "first"),
                    Warning::new("namespace", "second"),
                ],
            )
        }
    }

    fn config(module_type: ModuleType) -> ModuleConfiguration {
        ModuleConfiguration::new("api")
            .unwrap()
            .with_root_path("/out")
            .with_module_type(module_type)
    }

    #[tokio::test]
    async fn test_package_manager_writes_manifest() {
        let writer = MemoryFileWriter::new();
        let generator = ModuleFileGenerator::new(Arc::new(writer.clone()));

        let warnings = generator
            .generate(&config(ModuleType::default()))
            .await
            .unwrap();

        assert!(warnings.is_empty());
        assert_eq!(writer.write_count(), 1);
        let text = writer
            .read_to_string(Path::new("/out/Package.swift"))
            .unwrap();
        assert!(text.contains("  name: \"Api\",\n"));
    }

    #[tokio::test]
    async fn test_embedded_writes_namespace_file() {
        let writer = MemoryFileWriter::new();
        let generator = ModuleFileGenerator::new(Arc::new(writer.clone()));

        generator
            .generate(&config(ModuleType::EmbeddedInTarget))
            .await
            .unwrap();

        assert_eq!(writer.paths(), vec![PathBuf::from("/out/Api.graphql.swift")]);
        let text = writer
            .read_to_string(Path::new("/out/Api.graphql.swift"))
            .unwrap();
        assert!(text.ends_with("public enum Api { }\n"));
    }

    #[tokio::test]
    async fn test_other_writes_nothing() {
        let mut writer = MockFileWriter::new();
        writer.expect_write().never();
        let generator = ModuleFileGenerator::new(Arc::new(writer));

        let warnings = generator.generate(&config(ModuleType::Other)).await.unwrap();

        assert!(warnings.is_empty());
        assert!(generator.render(&config(ModuleType::Other)).is_none());
    }

    #[tokio::test]
    async fn test_namespace_warnings_pass_through_in_order() {
        let writer = MemoryFileWriter::new();
        let generator = ModuleFileGenerator::new(Arc::new(writer))
            .with_namespace_template(Arc::new(WarningNamespaceTemplate));

        let warnings = generator
            .generate(&config(ModuleType::EmbeddedInTarget))
            .await
            .unwrap();

        assert_eq!(
            warnings,
            vec![
                Warning::new("namespace", "first"),
                Warning::new("namespace", "second"),
            ]
        );
    }

    #[tokio::test]
    async fn test_write_failure_is_propagated() {
        let mut writer = MockFileWriter::new();
        writer
            .expect_write()
            .times(1)
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only")));
        let generator = ModuleFileGenerator::new(Arc::new(writer));

        let err = generator
            .generate(&config(ModuleType::default()))
            .await
            .unwrap_err();

        match err {
            GenerateError::Write { path, source } => {
                assert_eq!(path, PathBuf::from("/out/Package.swift"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
        }
    }

    #[test]
    fn test_render_file_needs_no_writer() {
        let embedded = config(ModuleType::EmbeddedInTarget);
        let rendered =
            ModuleFileGenerator::render_file(&embedded, &SchemaNamespaceTemplate).unwrap();

        assert_eq!(rendered.path, PathBuf::from("/out/Api.graphql.swift"));
        assert_eq!(rendered.result, SchemaNamespaceTemplate.render(&embedded));
        assert!(
            ModuleFileGenerator::render_file(&config(ModuleType::Other), &SchemaNamespaceTemplate)
                .is_none()
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let generator = ModuleFileGenerator::new(Arc::new(MemoryFileWriter::new()));
        let config = config(ModuleType::default())
            .with_test_mocks(TestMockOutput::SeparateModule { target_name: None });

        assert_eq!(generator.render(&config), generator.render(&config));
    }
}
