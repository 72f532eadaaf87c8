//! Key template naming and persistence.

use crate::constants;
use crate::error::KeysError;
use crate::models::key_template::KeyTemplate;
use crate::util::{fs as keys_fs, path};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the template for `vault_file` goes: beside the vault, named
/// `<stem>_keys.yaml`.
pub fn output_path(vault_file: &Path) -> Result<PathBuf, KeysError> {
    let absolute = path::absolute(vault_file).map_err(|source| KeysError::Write {
        path: vault_file.to_path_buf(),
        source,
    })?;
    Ok(output_path_for(&absolute))
}

/// Output path for an already absolute, normalized vault path.
pub fn output_path_for(absolute: &Path) -> PathBuf {
    let dir = absolute.parent().unwrap_or(absolute);
    let mut name = stem_of(absolute);
    name.push(constants::KEYS_FILE_SUFFIX);
    dir.join(name)
}

/// File name minus its last extension, leading dots ignored when looking for
/// the extension: `a.b.yml` → `a.b`, `.vault` → `.vault`, `..vault` → `..vault`.
fn stem_of(path: &Path) -> OsString {
    let Some(stem) = path.file_stem() else {
        return OsString::new();
    };
    let only_dots = stem.to_str().is_some_and(|s| s.chars().all(|c| c == '.'));
    match path.file_name() {
        Some(name) if only_dots => name.to_os_string(),
        _ => stem.to_os_string(),
    }
}

/// Write `template` next to `vault_file`, replacing any existing file.
pub fn save(template: &KeyTemplate, vault_file: &Path) -> Result<PathBuf, KeysError> {
    let output = output_path(vault_file)?;
    let yaml = template.to_yaml()?;
    keys_fs::write_atomic(&output, yaml.as_bytes(), constants::KEYS_FILE_MODE)
        .map_err(|source| KeysError::Write {
            path: output.clone(),
            source,
        })?;
    debug!(path = %output.display(), keys = template.len(), "key template written");
    Ok(output)
}
