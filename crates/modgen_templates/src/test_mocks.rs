//! Test mock target planning.

use modgen_config::{CanonicalName, TestMockOutput};

/// Source folder used when the mock target name is derived.
pub const DEFAULT_TEST_MOCKS_PATH: &str = "./TestMocks";

/// Suffix appended to the module name for a derived mock target name.
pub const TEST_MOCKS_SUFFIX: &str = "TestMocks";

/// Product and target the generated package declares for test mocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestMockPlan {
    pub product_name: String,
    pub target_name: String,
    pub source_path: String,
}

/// Work out whether the package needs a test mock target.
///
/// Only [`TestMockOutput::SeparateModule`] adds anything to the manifest;
/// absolute-path mocks are written outside the package.
pub fn plan(output: &TestMockOutput, module_name: &CanonicalName) -> Option<TestMockPlan> {
    match output {
        TestMockOutput::None | TestMockOutput::AbsolutePath(_) => None,
        TestMockOutput::SeparateModule {
            target_name: Some(name),
        } => Some(TestMockPlan {
            product_name: name.clone(),
            target_name: name.clone(),
            source_path: format!("./{name}"),
        }),
        TestMockOutput::SeparateModule { target_name: None } => {
            let name = format!("{module_name}{TEST_MOCKS_SUFFIX}");
            Some(TestMockPlan {
                product_name: name.clone(),
                target_name: name,
                source_path: DEFAULT_TEST_MOCKS_PATH.to_string(),
            })
        }
    }
}
