//! Vault decryption via an external command.

use crate::constants;
use crate::error::KeysError;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

/// Turns a vault file into its plaintext.
pub trait Decrypt {
    fn decrypt(&self, vault_file: &Path) -> Result<Zeroizing<String>, KeysError>;
}

/// Runs `ansible-vault view <file>` and captures its output.
#[derive(Debug, Clone)]
pub struct AnsibleVault {
    program: OsString,
}

impl AnsibleVault {
    pub fn new() -> Self {
        Self::with_program(constants::DECRYPT_PROGRAM)
    }

    /// Use a different executable that accepts the same `view <file>` interface.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl Default for AnsibleVault {
    fn default() -> Self {
        Self::new()
    }
}

impl Decrypt for AnsibleVault {
    fn decrypt(&self, vault_file: &Path) -> Result<Zeroizing<String>, KeysError> {
        debug!(program = %self.program_name(), file = %vault_file.display(), "decrypting vault");
        // stdin stays attached so the command can prompt for the vault password
        let output = Command::new(&self.program)
            .arg(constants::DECRYPT_SUBCOMMAND)
            .arg(vault_file)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|source| KeysError::Spawn {
                program: self.program_name(),
                source,
            })?;

        if !output.status.success() {
            let mut stdout = output.stdout;
            stdout.zeroize();
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(status = %output.status, "decryption command failed");
            return Err(KeysError::Decrypt {
                stderr: stderr.trim_end().to_string(),
            });
        }

        match String::from_utf8(output.stdout) {
            Ok(plaintext) => Ok(Zeroizing::new(plaintext)),
            Err(err) => {
                let mut bytes = err.into_bytes();
                bytes.zeroize();
                Err(KeysError::NonUtf8 {
                    program: self.program_name(),
                })
            }
        }
    }
}
