//! Common test utilities for Crunch CLI tests.
//!
//! Provides a stub `java` executable that stands in for the real tool
//! jars: it writes the requested output file and exits 0, or exits 3
//! when the output path contains the `failme` marker.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const STUB_JAVA: &str = r#"#!/bin/sh
out=""
prev=""
for arg in "$@"; do
  case "$prev" in
    --js_output_file|-o) out="$arg" ;;
  esac
  prev="$arg"
done
case "$out" in
  *failme*) echo "stub tool failure" >&2; exit 3 ;;
esac
if [ -n "$out" ]; then
  printf 'minified\n' > "$out"
fi
exit 0
"#;

/// Write the stub `java` into `dir` and return the directory to prepend
/// to PATH.
pub fn stub_java(dir: &Path) -> PathBuf {
    let bin_dir = dir.join("stub-bin");
    fs::create_dir_all(&bin_dir).unwrap();
    let script = bin_dir.join("java");
    fs::write(&script, STUB_JAVA).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    }
    bin_dir
}

/// Command for the crunch binary with the stub `java` first on PATH.
pub fn crunch_with_stub(bin_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_crunch"));
    let path = std::env::var("PATH").unwrap_or_default();
    cmd.env("PATH", format!("{}:{path}", bin_dir.display()));
    cmd
}

/// Write a small source file, creating parent directories as needed.
pub fn write_source(root: &Path, name: &str, content: &str) -> PathBuf {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
