#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use std::path::PathBuf;

/// Writes `content` into `name` under the temp dir and returns its path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file = dir.child(name);
    file.write_str(content).expect("failed to write fixture file");
    file.path().to_path_buf()
}

/// A `tokdiff` invocation comparing two fixture files.
pub fn tokdiff_command(old: &PathBuf, new: &PathBuf, extra_args: &[&str]) -> Command {
    let mut command = Command::cargo_bin("tokdiff").expect("tokdiff binary not built");
    command.arg(old).arg(new).arg("--no-pager").args(extra_args);
    command
}
