//! Tool profiles and argument rendering
//!
//! The two supported external tools are near-identical to drive, so they
//! live behind one closed `ToolProfile` enum instead of two orchestrators.
//! A profile renders a unit into an argument vector; nothing here touches
//! the filesystem or the process table.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{
    resolve_jar, CompilationLevel, ContentType, CLOSURE_JAR_ENV, DEFAULT_CLOSURE_JAR,
    DEFAULT_YUI_JAR, YUI_JAR_ENV,
};
use crate::error::{CrunchError, CrunchResult};
use crate::models::{CompilationUnit, ToolCommand};

/// A registered external tool, selected at configuration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolProfile {
    /// Google Closure Compiler (JavaScript).
    Closure {
        jar: PathBuf,
        level: CompilationLevel,
    },
    /// YUI Compressor (JavaScript or CSS, one source per invocation).
    Yui {
        jar: PathBuf,
        content_type: Option<ContentType>,
    },
}

impl ToolProfile {
    /// Closure profile with the jar resolved once from explicit config,
    /// the `CLOSURE_JAR` environment variable, or the default.
    pub fn closure(jar: Option<PathBuf>, level: CompilationLevel) -> Self {
        Self::Closure {
            jar: resolve_jar(jar, CLOSURE_JAR_ENV, DEFAULT_CLOSURE_JAR),
            level,
        }
    }

    /// Yui profile; content type may be left unset for per-file detection.
    pub fn yui(jar: Option<PathBuf>, content_type: Option<ContentType>) -> Self {
        Self::Yui {
            jar: resolve_jar(jar, YUI_JAR_ENV, DEFAULT_YUI_JAR),
            content_type,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Closure { .. } => "closure",
            Self::Yui { .. } => "yui",
        }
    }

    /// Whether this profile accepts multi-source (merge) units.
    pub fn supports_merge(&self) -> bool {
        matches!(self, Self::Closure { .. })
    }

    /// Render the invocation for one unit against its resolved target.
    pub fn build(&self, unit: &CompilationUnit, target: &Path) -> CrunchResult<ToolCommand> {
        match self {
            Self::Closure { jar, level } => {
                let mut args: Vec<OsString> = vec![
                    "-jar".into(),
                    jar.clone().into(),
                    "--compilation_level".into(),
                    level.as_flag().into(),
                    "--js_output_file".into(),
                    target.as_os_str().to_os_string(),
                ];
                for source in &unit.sources {
                    args.push("--js".into());
                    args.push(source.path.clone().into());
                }
                Ok(ToolCommand {
                    program: PathBuf::from("java"),
                    args,
                    summary: format!("compiling: {}", target.display()),
                })
            }
            Self::Yui { jar, content_type } => {
                let source = match unit.sources.as_slice() {
                    [source] => source,
                    _ => {
                        return Err(CrunchError::MergeUnsupported { tool: self.name() });
                    }
                };
                let content_type = match content_type {
                    Some(content_type) => *content_type,
                    None => ContentType::from_path(&source.path)?,
                };
                let args: Vec<OsString> = vec![
                    "-jar".into(),
                    jar.clone().into(),
                    "--type".into(),
                    content_type.as_flag().into(),
                    "-o".into(),
                    target.as_os_str().to_os_string(),
                    source.path.clone().into(),
                ];
                Ok(ToolCommand {
                    program: PathBuf::from("java"),
                    args,
                    summary: format!("minifying: {}", target.display()),
                })
            }
        }
    }
}
