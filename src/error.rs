//! Error types for permission checking

use thiserror::Error;

/// Permission checking errors
///
/// The checkers themselves are total over their inputs. The only failure
/// surface is the permission store read path, whose error is forwarded to
/// the caller without retry or translation.
#[derive(Debug, Error)]
pub enum PermissionError {
    /// Permission store read failed
    #[error("permission store error: {0}")]
    Store(String),
}

/// Result type for permission operations
pub type Result<T> = std::result::Result<T, PermissionError>;
