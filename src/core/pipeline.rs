//! The decrypt → extract → save sequence behind the CLI.

use crate::core::decrypt::Decrypt;
use crate::core::{extract, template};
use crate::models::key_template::display_key;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Run the whole pipeline for one vault file, reporting progress to `out`.
///
/// Returns the path of the written template. Nothing is written to disk
/// unless decryption and extraction both succeed.
pub fn run<D, W>(decryptor: &D, vault_file: &Path, out: &mut W) -> Result<PathBuf>
where
    D: Decrypt + ?Sized,
    W: Write,
{
    let plaintext = decryptor.decrypt(vault_file)?;
    let template = extract::extract_keys(&plaintext)?;
    drop(plaintext);
    debug!(keys = template.len(), "extracted vault keys");

    writeln!(out, "Extracted keys:").context("write to stdout")?;
    for key in template.keys() {
        writeln!(out, "{}", display_key(key)).context("write to stdout")?;
    }

    let saved = template::save(&template, vault_file)?;
    writeln!(out, "Keys saved to {}", saved.display()).context("write to stdout")?;
    out.flush().context("flush stdout")?;
    Ok(saved)
}
