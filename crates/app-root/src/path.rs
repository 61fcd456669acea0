//! Absolute root path handling

use std::path::{Path, PathBuf};

/// The absolute directory anchoring relative resource lookups.
///
/// Always holds an absolute, OS-native path. Construction goes through
/// [`resolve_root`](crate::resolve_root) only, which upholds the invariant;
/// callers treat the value as an opaque base for joining.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootPath {
    /// Internal representation is always absolute
    inner: PathBuf,
}

impl RootPath {
    /// Wrap an already-absolute path.
    pub(crate) fn new(inner: PathBuf) -> Self {
        debug_assert!(inner.is_absolute());
        Self { inner }
    }

    /// Borrow the root as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.inner
    }

    /// Join a relative segment onto the root.
    pub fn join(&self, segment: impl AsRef<Path>) -> PathBuf {
        self.inner.join(segment)
    }

    /// Consume the root, yielding the underlying `PathBuf`.
    pub fn into_path_buf(self) -> PathBuf {
        self.inner
    }
}

impl AsRef<Path> for RootPath {
    fn as_ref(&self) -> &Path {
        &self.inner
    }
}

impl std::fmt::Display for RootPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

impl From<RootPath> for PathBuf {
    fn from(root: RootPath) -> Self {
        root.inner
    }
}
