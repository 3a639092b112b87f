//! Task manifest loading
//!
//! A `crunch.toml` manifest declares one or more tasks, each the
//! equivalent of a single CLI invocation:
//!
//! ```toml
//! [[task]]
//! tool = "closure"
//! level = "ADVANCED_OPTIMIZATIONS"
//! target = "dist/app.min.js"
//! merge = true
//!
//! [[task.fileset]]
//! dir = "src"
//! include = ["**/*.js"]
//! ```
//!
//! Semantic configuration errors (for example merge on the yui profile)
//! are rejected at load time, before any task runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::command::ToolProfile;
use crate::config::{CompilationLevel, ContentType};
use crate::error::{CrunchError, CrunchResult};
use crate::models::CollectionSpec;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub task: Vec<TaskDecl>,
}

/// One declared task: a tool, a target and its input selections.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskDecl {
    pub tool: ToolKind,
    pub target: PathBuf,
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub fileset: Vec<FilesetDecl>,
    #[serde(default)]
    pub filelist: Vec<FilelistDecl>,
    #[serde(default)]
    pub merge: bool,
    #[serde(default)]
    pub level: Option<CompilationLevel>,
    #[serde(rename = "type", default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub jar: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesetDecl {
    pub dir: PathBuf,
    pub include: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilelistDecl {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Closure,
    Yui,
}

impl TaskDecl {
    /// Build the tool profile, resolving the jar path once.
    pub fn profile(&self) -> ToolProfile {
        match self.tool {
            ToolKind::Closure => {
                ToolProfile::closure(self.jar.clone(), self.level.unwrap_or_default())
            }
            ToolKind::Yui => ToolProfile::yui(self.jar.clone(), self.content_type),
        }
    }

    /// Collections in declaration order: filesets first, then filelists.
    pub fn collections(&self) -> Vec<CollectionSpec> {
        let mut collections = Vec::new();
        for fileset in &self.fileset {
            collections.push(CollectionSpec::set(&fileset.dir, fileset.include.clone()));
        }
        for filelist in &self.filelist {
            collections.push(CollectionSpec::list(&filelist.dir, filelist.files.clone()));
        }
        collections
    }
}

/// Load and validate a manifest.
pub fn load(path: &Path) -> CrunchResult<Manifest> {
    let content = fs::read_to_string(path)?;
    let manifest: Manifest =
        toml::from_str(&content).map_err(|e| CrunchError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for task in &manifest.task {
        if task.merge && !task.profile().supports_merge() {
            return Err(CrunchError::MergeUnsupported { tool: "yui" });
        }
    }

    Ok(manifest)
}
