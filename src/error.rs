//! Error types for Crunch
//!
//! Uses `thiserror` for library errors; the binary surfaces them through
//! `anyhow` at the top level.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Crunch operations
pub type CrunchResult<T> = Result<T, CrunchError>;

/// Main error type for Crunch operations
///
/// Every variant aborts the current run; there is no retry and no partial
/// continuation after a failure.
#[derive(Error, Debug)]
pub enum CrunchError {
    /// No input of any kind was declared
    #[error("at least one of a file attribute, a fileset or a filelist must be declared")]
    NoSources,

    /// A tool profile that only accepts single-source units received a merge unit
    #[error("the {tool} profile does not support merge mode")]
    MergeUnsupported { tool: &'static str },

    /// A declared single file does not exist at resolution time
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Collection expansion failed (bad pattern, unreadable directory)
    #[error("failed to expand collection under {base}: {message}")]
    CollectionResolution { base: PathBuf, message: String },

    /// A source would be compiled onto itself
    #[error("source file cannot compile to itself: {path}")]
    SelfCompile { path: PathBuf },

    /// Merge mode requires a file target, but the declared target is a directory
    #[error("merge target must be a file: {path}")]
    MergeTargetIsDirectory { path: PathBuf },

    /// The computed output path is an existing directory
    #[error("compile target is a directory: {path}")]
    TargetIsDirectory { path: PathBuf },

    /// Content-type auto-detection found an unsupported extension
    #[error("cannot detect content type of {path} - expected a .js or .css extension")]
    UnknownType { path: PathBuf },

    /// The task manifest could not be parsed
    #[error("invalid manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// The external tool exited with a nonzero status
    #[error("{tool} did not return success{}", fmt_exit(.code))]
    ToolFailure {
        tool: &'static str,
        code: Option<i32>,
        output: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {code})"),
        None => " (terminated by signal)".to_string(),
    }
}
