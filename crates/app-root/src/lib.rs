//! Application root resolution for the running executable
//!
//! Provides the absolute directory containing the executable image, so
//! other components can resolve log and config paths from a stable anchor.

pub mod constants;
pub mod error;
pub mod locator;
pub mod logging;
pub mod path;

pub use constants::AnchorDir;
pub use error::{Error, Result};
pub use locator::resolve_root;
pub use path::RootPath;
