//! `apollo-ios` package dependency entries.

use modgen_config::DependencyType;

use crate::swift::string_literal;

/// Git URL of the upstream `apollo-ios` package.
pub const APOLLO_IOS_URL: &str = "https://github.com/apollographql/apollo-ios.git";

/// Package identity SwiftPM derives from [`APOLLO_IOS_URL`].
pub const APOLLO_IOS_PACKAGE: &str = "apollo-ios";

/// Render the `.package(...)` entry for a dependency pin.
pub fn render(dependency: &DependencyType) -> String {
    let url = string_literal(APOLLO_IOS_URL);
    match dependency {
        DependencyType::PinnedVersion(version) => {
            format!(".package(url: {url}, exact: {})", string_literal(version))
        }
        DependencyType::Branch(name) => {
            format!(".package(url: {url}, branch: {})", string_literal(name))
        }
        DependencyType::Commit(hash) => {
            format!(".package(url: {url}, revision: {})", string_literal(hash))
        }
        DependencyType::LocalPath(path) => format!(".package(path: {})", string_literal(path)),
    }
}
