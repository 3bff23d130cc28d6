//! Integration tests for package manifest generation.

use std::fs;
use std::sync::Arc;

use modgen_config::{
    DependencyType, ModuleConfiguration, ModuleType, SwiftToolsVersion, TestMockOutput,
};
use modgen_templates::{
    FsFileWriter, ModuleFileGenerator, PackageManifestTemplate, Product, TargetDependency,
};
use tempfile::tempdir;

fn build_template(
    namespace: &str,
    test_mocks: TestMockOutput,
    dependency: DependencyType,
) -> PackageManifestTemplate {
    let config = ModuleConfiguration::new(namespace)
        .unwrap()
        .with_test_mocks(test_mocks)
        .with_dependency(dependency);
    PackageManifestTemplate::from_config(&config, &SwiftToolsVersion::default())
}

/// The lines between `  <block>: [` and its closing bracket.
fn block_entries(rendered: &str, block: &str) -> Vec<String> {
    let opener = format!("  {block}: [");
    rendered
        .lines()
        .skip_while(|line| *line != opener)
        .skip(1)
        .take_while(|line| !line.starts_with("  ]"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_lowercase_namespace_with_pinned_version() {
    let template = build_template(
        "module",
        TestMockOutput::None,
        DependencyType::PinnedVersion("1.2.3".into()),
    );
    let manifest = template.manifest();
    let rendered = template.render().text;

    assert_eq!(manifest.header.name, "Module");
    assert_eq!(manifest.products, vec![Product::library("Module")]);
    assert_eq!(manifest.targets.len(), 1);
    assert_eq!(manifest.targets[0].name, "Module");
    assert_eq!(
        block_entries(&rendered, "dependencies"),
        vec![
            "    .package(url: \"https://github.com/apollographql/apollo-ios.git\", exact: \"1.2.3\"),"
        ]
    );
}

#[test]
fn test_product_count_follows_mock_output() {
    let cases = [
        (TestMockOutput::None, 1),
        (TestMockOutput::AbsolutePath("/tmp/mocks".into()), 1),
        (TestMockOutput::SeparateModule { target_name: None }, 2),
        (
            TestMockOutput::SeparateModule {
                target_name: Some("Mocks".into()),
            },
            2,
        ),
    ];

    for (output, expected) in cases {
        let rendered = build_template("api", output.clone(), DependencyType::default())
            .render()
            .text;
        assert_eq!(
            block_entries(&rendered, "products").len(),
            expected,
            "{output:?}"
        );
    }
}

#[test]
fn test_dependency_entry_matches_variant() {
    let cases = [
        (DependencyType::PinnedVersion("1.0.0".into()), "exact: \"1.0.0\""),
        (DependencyType::Branch("testBranch".into()), "branch: \"testBranch\""),
        (DependencyType::Commit("testHash".into()), "revision: \"testHash\""),
        (DependencyType::LocalPath("localPath".into()), "path: \"localPath\""),
    ];
    let shapes = ["exact:", "branch:", "revision:", ".package(path:"];

    for (dependency, expected) in cases {
        let rendered = build_template("api", TestMockOutput::None, dependency.clone())
            .render()
            .text;
        let entries = block_entries(&rendered, "dependencies");

        assert_eq!(entries.len(), 1, "{dependency:?}");
        assert!(entries[0].contains(expected), "{}", entries[0]);
        let matching = shapes
            .iter()
            .filter(|shape| entries[0].contains(**shape))
            .count();
        assert_eq!(matching, 1, "{}", entries[0]);
    }
}

#[test]
fn test_named_mock_module() {
    let template = build_template(
        "TestModule",
        TestMockOutput::SeparateModule {
            target_name: Some("CustomMocks".into()),
        },
        DependencyType::default(),
    );
    let manifest = template.manifest();

    assert_eq!(
        manifest
            .products
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>(),
        vec!["TestModule", "CustomMocks"]
    );

    let mocks = &manifest.targets[1];
    assert_eq!(mocks.name, "CustomMocks");
    assert_eq!(mocks.path, "./CustomMocks");
    assert_eq!(
        mocks.dependencies,
        vec![
            TargetDependency::Product {
                name: "ApolloTestSupport".into(),
                package: "apollo-ios".into(),
            },
            TargetDependency::Target {
                name: "TestModule".into(),
            },
        ]
    );

    let rendered = template.render().text;
    assert_eq!(
        rendered.lines().nth(31),
        Some("        .target(name: \"TestModule\"),")
    );
}

#[test]
fn test_derived_mock_module_name() {
    let manifest = build_template(
        "newmodule",
        TestMockOutput::SeparateModule { target_name: None },
        DependencyType::default(),
    )
    .manifest();

    assert_eq!(manifest.products[1], Product::library("NewmoduleTestMocks"));
    assert_eq!(manifest.targets[1].name, "NewmoduleTestMocks");
    assert_eq!(manifest.targets[1].path, "./TestMocks");
}

#[test]
fn test_rendering_is_idempotent() {
    let template = build_template(
        "starWars",
        TestMockOutput::SeparateModule { target_name: None },
        DependencyType::Commit("abc".into()),
    );

    assert_eq!(template.render(), template.render());
}

#[tokio::test]
async fn test_generate_writes_package_to_disk() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("Generated");
    let config = ModuleConfiguration::new("starWars")
        .unwrap()
        .with_root_path(&root)
        .with_module_type(ModuleType::SwiftPackageManager(SwiftToolsVersion::default()));

    let generator = ModuleFileGenerator::new(Arc::new(FsFileWriter));
    let warnings = generator.generate(&config).await.unwrap();

    assert!(warnings.is_empty());
    let written = fs::read_to_string(root.join("Package.swift")).unwrap();
    let expected = PackageManifestTemplate::from_config(&config, &SwiftToolsVersion::default())
        .render()
        .text;
    assert_eq!(written, expected);
}

#[tokio::test]
async fn test_generate_other_leaves_root_empty() {
    let temp = tempdir().unwrap();
    let config = ModuleConfiguration::new("starWars")
        .unwrap()
        .with_root_path(temp.path())
        .with_module_type(ModuleType::Other);

    let generator = ModuleFileGenerator::new(Arc::new(FsFileWriter));
    generator.generate(&config).await.unwrap();

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}
