//! Lexical path handling without filesystem access.

use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` components without filesystem access.
///
/// `..` never climbs above the root or a prefix; on a relative path with
/// nothing left to pop it is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            Component::CurDir => {}
            other => components.push(other),
        }
    }
    components.iter().collect()
}

/// Make `path` absolute against the current directory, then normalize it.
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = env::current_dir()?;
    Ok(normalize(&cwd.join(path)))
}
