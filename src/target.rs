//! Target mapping
//!
//! Computes each unit's concrete output path and guards the invariants
//! around it: a unit never compiles onto one of its own sources, the
//! output is never an existing directory, and the output's parent
//! directory exists before the tool runs.
//!
//! Directory state is checked at mapping time, not earlier - a directory
//! created by a previous unit in the same run must be seen.

use std::path::{Path, PathBuf};

use crate::error::{CrunchError, CrunchResult};
use crate::models::{absolutize, CompilationUnit};

/// Compute and validate the output path for one unit.
///
/// Merge units write to the declared target verbatim. Single-source units
/// mirror the source's relative name under the declared target when it is
/// an existing directory, and use the declared target verbatim otherwise.
pub fn map_target(
    unit: &CompilationUnit,
    declared: &Path,
    merge: bool,
) -> CrunchResult<PathBuf> {
    let target = if merge {
        declared.to_path_buf()
    } else {
        let Some(source) = unit.sources.first() else {
            return Err(CrunchError::NoSources);
        };
        if declared.is_dir() {
            declared.join(&source.relative)
        } else {
            declared.to_path_buf()
        }
    };

    let target_abs = absolutize(&target);
    for source in &unit.sources {
        if absolutize(&source.path) == target_abs {
            return Err(CrunchError::SelfCompile {
                path: source.path.clone(),
            });
        }
    }

    if target.is_dir() {
        return Err(if merge {
            CrunchError::MergeTargetIsDirectory { path: target }
        } else {
            CrunchError::TargetIsDirectory { path: target }
        });
    }

    Ok(target)
}

/// Create the target's parent directory, recursively, with 0755 permissions.
///
/// An already-existing directory is success, so racing an external creation
/// of the same path is harmless.
pub fn ensure_parent_dir(target: &Path) -> CrunchResult<()> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_0755(parent)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn create_dir_0755(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir_0755(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
