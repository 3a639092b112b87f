//! Task configuration primitives
//!
//! Enumerated options are closed sets validated eagerly: the CLI rejects
//! unknown values at parse time via `clap::ValueEnum`, and manifests via
//! `serde`. Tool binary locations resolve once at configuration time from
//! an explicit value, a named environment variable, or a default - the
//! environment is never consulted again during a run.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{CrunchError, CrunchResult};

/// Environment variable overriding the default Closure Compiler jar.
pub const CLOSURE_JAR_ENV: &str = "CLOSURE_JAR";

/// Environment variable overriding the default YUI Compressor jar.
pub const YUI_JAR_ENV: &str = "YUI_COMPRESSOR_JAR";

pub const DEFAULT_CLOSURE_JAR: &str = "compiler.jar";
pub const DEFAULT_YUI_JAR: &str = "yuicompressor.jar";

/// Closure Compiler optimization level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompilationLevel {
    /// Strip whitespace and comments only.
    WhitespaceOnly,
    /// Safe local renaming and dead-code removal.
    #[default]
    SimpleOptimizations,
    /// Whole-program renaming; requires export annotations.
    AdvancedOptimizations,
}

impl CompilationLevel {
    /// Value passed to the compiler's `--compilation_level` flag.
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::WhitespaceOnly => "WHITESPACE_ONLY",
            Self::SimpleOptimizations => "SIMPLE_OPTIMIZATIONS",
            Self::AdvancedOptimizations => "ADVANCED_OPTIMIZATIONS",
        }
    }
}

/// Content type handled by the YUI Compressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Js,
    Css,
}

impl ContentType {
    /// Value passed to the compressor's `--type` flag.
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Css => "css",
        }
    }

    /// Detect the content type from a source file's extension.
    pub fn from_path(path: &Path) -> CrunchResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("js") => Ok(Self::Js),
            Some("css") => Ok(Self::Css),
            _ => Err(CrunchError::UnknownType {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Resolve a tool's jar path once, at configuration time.
///
/// Precedence: explicit configuration, then the named environment variable
/// when set and non-empty, then the default.
pub fn resolve_jar(explicit: Option<PathBuf>, env_var: &str, default: &str) -> PathBuf {
    if let Some(jar) = explicit {
        return jar;
    }
    match std::env::var(env_var) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}
