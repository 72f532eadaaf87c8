use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Stand-in for `ansible-vault`: `view <file>` prints the file as-is, so the
/// "encrypted" fixtures are plain YAML. Every call is appended to
/// `$FAKE_VAULT_CALLS`; `$FAKE_VAULT_ERROR` makes it fail with that message.
const FAKE_ANSIBLE_VAULT: &str = r#"#!/bin/sh
echo "$@" >> "$FAKE_VAULT_CALLS"
if [ "$1" != "view" ]; then
    echo "unexpected subcommand: $1" >&2
    exit 2
fi
if [ -n "$FAKE_VAULT_ERROR" ]; then
    echo "$FAKE_VAULT_ERROR" >&2
    exit 1
fi
exec cat "$2"
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub bin: PathBuf,
    pub work: PathBuf,
    pub calls: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let bin = tmp.path().join("bin");
        let work = tmp.path().join("work");
        fs::create_dir_all(&bin).expect("create bin dir");
        fs::create_dir_all(&work).expect("create work dir");

        let script = bin.join("ansible-vault");
        fs::write(&script, FAKE_ANSIBLE_VAULT).expect("write fake ansible-vault");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("chmod fake ansible-vault");

        let calls = tmp.path().join("calls.log");
        Self {
            _tmp: tmp,
            bin,
            work,
            calls,
        }
    }

    /// The binary, run from `work` with the fake `ansible-vault` first on PATH.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("vault-keys");
        cmd.current_dir(&self.work)
            .env("PATH", self.path_with_fake())
            .env("FAKE_VAULT_CALLS", &self.calls)
            .env_remove("FAKE_VAULT_ERROR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a vault fixture relative to `work`, creating parent dirs.
    pub fn vault(&self, rel: &str, plaintext: &str) -> PathBuf {
        let path = self.work.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, plaintext).expect("write vault fixture");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work.join(rel)).expect("read output")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.work.join(rel).exists()
    }

    pub fn decrypt_calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.calls) {
            Ok(log) => log.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn path_with_fake(&self) -> OsString {
        let mut dirs = vec![self.bin.clone()];
        if let Some(path) = env::var_os("PATH") {
            dirs.extend(env::split_paths(&path));
        }
        env::join_paths(dirs).expect("join PATH")
    }

    pub fn empty_dir(&self, rel: &str) -> PathBuf {
        let dir = self.work.join(rel);
        fs::create_dir_all(&dir).expect("create dir");
        dir
    }
}
