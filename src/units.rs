//! Unit aggregation
//!
//! Groups resolved sources into compilation units: one unit per source in
//! normal mode, a single all-sources unit in merge mode.

use crate::models::{CompilationUnit, ResolvedSource};

/// Group sources into units, preserving resolution order.
///
/// An empty source list in merge mode yields zero units - nothing declared
/// to merge is harmless, not an error.
pub fn aggregate(sources: Vec<ResolvedSource>, merge: bool) -> Vec<CompilationUnit> {
    if merge {
        if sources.is_empty() {
            return Vec::new();
        }
        return vec![CompilationUnit { sources }];
    }
    sources
        .into_iter()
        .map(|source| CompilationUnit {
            sources: vec![source],
        })
        .collect()
}
