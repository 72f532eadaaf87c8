//! Error taxonomy for the decrypt → extract → save pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeysError {
    /// Wrong number of command-line arguments.
    #[error("Usage: {program} {}", crate::constants::USAGE_ARG)]
    Usage { program: String },

    /// The decryption command ran but exited non-zero.
    #[error("decrypting vault file failed: {stderr}")]
    Decrypt { stderr: String },

    /// The decryption command could not be started at all.
    #[error("decrypting vault file failed: cannot run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("decrypting vault file failed: `{program}` produced non-UTF-8 output")]
    NonUtf8 { program: String },

    #[error("parsing YAML failed")]
    Parse(#[source] serde_yaml::Error),

    #[error("Vault content is not a dictionary.")]
    NotAMapping,

    #[error("saving keys file failed: cannot serialize keys")]
    Serialize(#[source] serde_yaml::Error),

    #[error("saving keys file {} failed", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
