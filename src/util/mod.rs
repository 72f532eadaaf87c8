//! Utility modules for filesystem, path, and logging helpers.

pub mod fs;
pub mod logging;
pub mod path;
