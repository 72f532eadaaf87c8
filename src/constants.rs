//! Centralized constants for the decryption command, output naming, and logging.

/// External program that decrypts Ansible vault files.
pub const DECRYPT_PROGRAM: &str = "ansible-vault";

/// Subcommand passed to the decryption program; prints plaintext to stdout.
pub const DECRYPT_SUBCOMMAND: &str = "view";

/// Suffix appended to the vault file's stem to name the key template.
pub const KEYS_FILE_SUFFIX: &str = "_keys.yaml";

/// Permission mode for the written key template (key names only, no values).
pub const KEYS_FILE_MODE: u32 = 0o644;

/// Placeholder shown for the positional argument in the usage line.
pub const USAGE_ARG: &str = "vault_file";

/// Program name used in the usage line when argv[0] is unavailable.
pub const DEFAULT_PROGRAM_NAME: &str = "vault-keys";

/// Log filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";
