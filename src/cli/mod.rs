//! Command-line parsing and dispatch.

use crate::constants;
use crate::core::decrypt::AnsibleVault;
use crate::core::pipeline;
use crate::error::KeysError;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

const HELP_FLAGS: &[&str] = &["-h", "--help", "-V", "--version"];

#[derive(Parser, Debug)]
#[command(
    name = "vault-keys",
    version,
    about = "Write an empty-valued key template for an Ansible vault file"
)]
pub struct Cli {
    /// Encrypted vault file; decrypted with `ansible-vault view`
    pub vault_file: PathBuf,
}

impl Cli {
    /// Parse `args` (argv[0] included).
    ///
    /// Exactly one argument after the program name is accepted and taken
    /// verbatim as the vault path, even when it starts with `-`. A lone
    /// `--help`/`-h` or `--version`/`-V` prints and exits 0. Any other
    /// argument count is [`KeysError::Usage`].
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, KeysError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 2 {
            tracing::debug!(count = args.len().saturating_sub(1), "wrong argument count");
            return Err(usage(args.first()));
        }
        if HELP_FLAGS.iter().any(|flag| args[1] == *flag) {
            if let Err(err) = Self::try_parse_from(args.iter().cloned()) {
                if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                    err.exit()
                }
            }
            return Err(usage(args.first()));
        }
        let vault_file = PathBuf::from(args.swap_remove(1));
        Ok(Self { vault_file })
    }

    pub fn run(self) -> Result<()> {
        let decryptor = AnsibleVault::new();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        pipeline::run(&decryptor, &self.vault_file, &mut out)?;
        Ok(())
    }
}

fn usage(program: Option<&OsString>) -> KeysError {
    let program = program
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| constants::DEFAULT_PROGRAM_NAME.to_string());
    KeysError::Usage { program }
}
