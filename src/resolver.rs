//! Source resolution
//!
//! Turns heterogeneous input declarations (a single file, glob filesets,
//! explicit filelists) into one ordered list of concrete source files.
//! Pattern expansion sits behind the `Scanner` trait so the walking
//! machinery stays swappable; the default implementation uses the
//! `ignore` crate's gitignore-style matching.

use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::error::{CrunchError, CrunchResult};
use crate::models::{absolutize, CollectionKind, CollectionSpec, ResolvedSource};

/// Expands inclusion rules under a base directory into base-relative paths.
pub trait Scanner {
    fn scan(&self, base: &Path, patterns: &[String]) -> CrunchResult<Vec<PathBuf>>;
}

/// Default scanner built on gitignore-style glob matching.
///
/// Returns matching files in lexicographic order.
pub struct GlobScanner;

impl Scanner for GlobScanner {
    fn scan(&self, base: &Path, patterns: &[String]) -> CrunchResult<Vec<PathBuf>> {
        let mut builder = OverrideBuilder::new(base);
        for pattern in patterns {
            builder
                .add(pattern)
                .map_err(|e| collection_error(base, e))?;
        }
        let overrides = builder.build().map_err(|e| collection_error(base, e))?;

        let mut files = Vec::new();
        let walker = WalkBuilder::new(base)
            .overrides(overrides)
            .standard_filters(false)
            .build();
        for entry in walker {
            let entry = entry.map_err(|e| collection_error(base, e))?;
            if entry.file_type().is_some_and(|t| t.is_file()) {
                let relative = entry
                    .path()
                    .strip_prefix(base)
                    .unwrap_or_else(|_| entry.path())
                    .to_path_buf();
                files.push(relative);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn collection_error(base: &Path, err: ignore::Error) -> CrunchError {
    CrunchError::CollectionResolution {
        base: base.to_path_buf(),
        message: err.to_string(),
    }
}

/// Resolve every declared input, in declaration order: the single file
/// first (when present), then each collection's files.
///
/// Duplicates across overlapping collections are kept; "first declared,
/// first compiled" is preserved by never re-sorting across collections.
pub fn resolve_sources(
    file: Option<&Path>,
    collections: &[CollectionSpec],
    scanner: &dyn Scanner,
) -> CrunchResult<Vec<ResolvedSource>> {
    let mut resolved = Vec::new();

    if let Some(path) = file {
        if !path.is_file() {
            return Err(CrunchError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let relative = path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| path.to_path_buf());
        resolved.push(ResolvedSource::new(absolutize(path), relative));
    }

    for collection in collections {
        let names = match &collection.kind {
            CollectionKind::List(entries) => entries.clone(),
            CollectionKind::Set(patterns) => scanner.scan(&collection.base, patterns)?,
        };
        for name in names {
            let path = absolutize(&collection.base.join(&name));
            resolved.push(ResolvedSource::new(path, name));
        }
    }

    Ok(resolved)
}
