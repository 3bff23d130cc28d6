//! Namespace template for schema types embedded in an existing target.

use modgen_config::ModuleConfiguration;

use crate::output::RenderResult;

/// Header written at the top of generated Swift files.
pub const GENERATED_HEADER: &str =
    "// @generated\n// This file was automatically generated and should not be edited.\n";

/// Renders the namespace file used by [`ModuleType::EmbeddedInTarget`].
///
/// [`ModuleType::EmbeddedInTarget`]: modgen_config::ModuleType::EmbeddedInTarget
pub trait NamespaceTemplate: Send + Sync {
    fn render(&self, config: &ModuleConfiguration) -> RenderResult;
}

/// Default namespace template: an empty public enum named after the module.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaNamespaceTemplate;

impl NamespaceTemplate for SchemaNamespaceTemplate {
    fn render(&self, config: &ModuleConfiguration) -> RenderResult {
        RenderResult::new(format!(
            "{GENERATED_HEADER}\npublic enum {} {{ }}\n",
            config.canonical_name()
        ))
    }
}
