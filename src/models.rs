//! Core data models for Crunch
//!
//! Defines the fundamental data structures used throughout Crunch:
//! - `CollectionSpec`: a declarative set of input files under a base directory
//! - `ResolvedSource`: one concrete input file with its base-relative name
//! - `CompilationUnit`: the sources consumed by a single tool invocation
//! - `ToolCommand` / `InvocationResult`: a rendered subprocess and its outcome

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A declarative set of input files under a base directory.
///
/// Collections are expanded into concrete paths at resolution time, in
/// declaration order. Overlapping collections may yield duplicate paths;
/// that is accepted input, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSpec {
    /// Directory the entries are relative to.
    pub base: PathBuf,
    pub kind: CollectionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionKind {
    /// Explicit enumeration, kept in declaration order.
    List(Vec<PathBuf>),
    /// Glob-style inclusion rules, expanded by a scanner.
    Set(Vec<String>),
}

impl CollectionSpec {
    pub fn list(base: impl Into<PathBuf>, entries: Vec<PathBuf>) -> Self {
        Self {
            base: base.into(),
            kind: CollectionKind::List(entries),
        }
    }

    pub fn set(base: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
        Self {
            base: base.into(),
            kind: CollectionKind::Set(patterns),
        }
    }
}

/// A single resolved input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Name relative to the declaring collection's base directory (or the
    /// file's own base name for a lone `file` declaration). Mirrored under
    /// the target when the target is a directory.
    pub relative: PathBuf,
}

impl ResolvedSource {
    pub fn new(path: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            relative: relative.into(),
        }
    }
}

/// The atomic grouping of sources mapped to one output and one invocation.
///
/// Holds at least one source. In merge mode a single unit carries every
/// resolved source in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub sources: Vec<ResolvedSource>,
}

/// A fully rendered external command, ready to execute.
///
/// Arguments are a discrete vector; they are never joined into a shell
/// string, so paths containing spaces survive intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// One-line description emitted before execution in non-verbose mode.
    pub summary: String,
}

impl ToolCommand {
    /// Full command line as logged in verbose mode.
    pub fn rendered(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// Outcome of one subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Combined stdout and stderr.
    pub output: String,
    pub succeeded: bool,
}

/// Targets produced by a completed run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub targets: Vec<PathBuf>,
}

/// Best-effort absolute form of a path, without requiring it to exist.
pub fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
