//! Trait definitions for the tags module.

use std::path::Path;

use super::types::TagSet;

/// Reads naming metadata from a source file.
pub trait TagReader: Send + Sync {
    /// Returns the tags found in `path`.
    ///
    /// Read failures and unsupported files produce an empty set.
    fn extract(&self, path: &Path) -> TagSet;
}
