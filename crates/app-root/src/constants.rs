//! Constants for directories anchored at the application root.

use std::path::Path;

/// Well-known directories resolved against the application root.
///
/// Pure name constants; joining one onto the root never touches the
/// filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorDir {
    /// The `logs` directory (log file output)
    Logs,
    /// The `config` directory (configuration files)
    Config,
    /// The `data` directory (runtime data)
    Data,
}

impl AnchorDir {
    /// Get the string representation of the directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logs => "logs",
            Self::Config => "config",
            Self::Data => "data",
        }
    }
}

impl AsRef<Path> for AnchorDir {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for AnchorDir {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for AnchorDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
