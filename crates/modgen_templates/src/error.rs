//! Error types for module file generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that can occur while generating schema module files.
///
/// Rendering itself cannot fail; only persisting the artifact can.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
