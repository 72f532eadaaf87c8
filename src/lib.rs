//! Ansible vault key template generator.
//!
//! Decrypts a vault with `ansible-vault view`, keeps the top-level keys of
//! the YAML mapping, and writes them with empty values to
//! `<vault stem>_keys.yaml` beside the vault.
//!
//! ## Modules
//! - `cli` — Argument parsing and dispatch
//! - `core` — Pipeline stages (decrypt, extract, template, pipeline)
//! - `models` — Key template mapping
//! - `util` — Filesystem, path, and logging helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod util;
