//! Mock tag reader for testing.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::tags::{TagKey, TagReader, TagSet};

/// Mock implementation of the TagReader trait.
///
/// Returns configured tags per path and an empty set for everything else,
/// matching how unreadable files behave.
#[derive(Debug, Default)]
pub struct MockTagReader {
    tags: RwLock<HashMap<PathBuf, TagSet>>,
    panics: RwLock<HashSet<PathBuf>>,
}

impl MockTagReader {
    /// Create a new mock tag reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MockTagReader::set_tags`].
    pub fn with_tags(self, path: impl AsRef<Path>, pairs: &[(TagKey, &str)]) -> Self {
        self.set_tags(path, pairs);
        self
    }

    /// Set the tags returned for `path`.
    pub fn set_tags(&self, path: impl AsRef<Path>, pairs: &[(TagKey, &str)]) {
        let tags: TagSet = pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        self.tags
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.as_ref().to_path_buf(), tags);
    }

    /// Make reading `path` panic.
    pub fn panic_on(&self, path: impl AsRef<Path>) {
        self.panics
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.as_ref().to_path_buf());
    }
}

impl TagReader for MockTagReader {
    fn extract(&self, path: &Path) -> TagSet {
        let should_panic = self
            .panics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(path);
        if should_panic {
            panic!("mock tag reader panic for {}", path.display());
        }

        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
            .unwrap_or_default()
    }
}
