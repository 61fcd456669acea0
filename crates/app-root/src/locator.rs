//! Executable-anchored root resolution

use std::env;
use std::path;

use crate::{Error, Result, RootPath};

/// Resolve the absolute directory containing the running executable.
///
/// The result is independent of the process working directory and is
/// recomputed on every call. Fails only when the platform cannot report
/// the executable's own location, which callers should treat as a fatal
/// configuration error.
pub fn resolve_root() -> Result<RootPath> {
    let exe = env::current_exe().map_err(|e| {
        Error::location_unavailable("platform could not report the executable path", Some(e))
    })?;

    // Some platforms may report a relative path. Absolutize lexically;
    // canonicalizing would hit the filesystem and resolve symlinks.
    let exe = if exe.is_absolute() {
        exe
    } else {
        path::absolute(&exe).map_err(|e| {
            Error::location_unavailable(
                format!("could not absolutize executable path {}", exe.display()),
                Some(e),
            )
        })?
    };

    let dir = exe.parent().ok_or_else(|| {
        Error::location_unavailable(
            format!("executable path {} has no parent directory", exe.display()),
            None,
        )
    })?;

    // Strip Windows verbatim prefixes so the result is in native form.
    let root = dunce::simplified(dir).to_path_buf();
    tracing::debug!(root = %root.display(), "resolved application root");

    Ok(RootPath::new(root))
}
