//! End-to-end compilation pipeline
//!
//! Drives resolve -> aggregate -> (map -> build -> invoke) per unit,
//! strictly in order and single-threaded. Each subprocess blocks the
//! pipeline until it exits; the first failing unit aborts the whole run.
//! Every invocation recompiles unconditionally - there is no staleness
//! checking.

use std::path::Path;

use crate::command::ToolProfile;
use crate::error::{CrunchError, CrunchResult};
use crate::models::{CollectionSpec, RunSummary};
use crate::resolver::{resolve_sources, Scanner};
use crate::runner::Invoker;
use crate::sink::LogSink;
use crate::target::{ensure_parent_dir, map_target};
use crate::units::aggregate;

/// Options for a single orchestrated run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Compile all resolved sources into one output via a single invocation
    pub merge: bool,
    /// Log fully rendered command lines instead of one-line summaries
    pub verbose: bool,
    /// Log what would run without invoking tools or creating directories
    pub dry_run: bool,
}

/// Drives one task (one tool profile, one target declaration) end to end.
pub struct Orchestrator<'a> {
    profile: &'a ToolProfile,
    declared_target: &'a Path,
    options: RunOptions,
}

impl<'a> Orchestrator<'a> {
    pub fn new(profile: &'a ToolProfile, declared_target: &'a Path, options: RunOptions) -> Self {
        Self {
            profile,
            declared_target,
            options,
        }
    }

    /// Run the pipeline across all declared inputs.
    ///
    /// Fails immediately when no input of any kind is declared. A unit
    /// whose tool exits nonzero halts the run; later units are never
    /// attempted and their targets never appear in the summary.
    pub fn run(
        &self,
        file: Option<&Path>,
        collections: &[CollectionSpec],
        scanner: &dyn Scanner,
        invoker: &mut dyn Invoker,
        sink: &mut dyn LogSink,
    ) -> CrunchResult<RunSummary> {
        if file.is_none() && collections.is_empty() {
            return Err(CrunchError::NoSources);
        }

        let sources = resolve_sources(file, collections, scanner)?;
        let units = aggregate(sources, self.options.merge);

        let mut summary = RunSummary::default();
        for unit in &units {
            // Directory state is re-checked per unit; an earlier unit may
            // have created directories this one maps into.
            let target = map_target(unit, self.declared_target, self.options.merge)?;
            let command = self.profile.build(unit, &target)?;

            // The log line precedes execution so a failing run always
            // shows which unit was being processed.
            let line = if self.options.verbose {
                command.rendered()
            } else {
                command.summary.clone()
            };
            sink.line(&line);

            if self.options.dry_run {
                summary.targets.push(target);
                continue;
            }

            ensure_parent_dir(&target)?;
            let result = invoker.invoke(&command)?;
            if !result.succeeded {
                return Err(CrunchError::ToolFailure {
                    tool: self.profile.name(),
                    code: result.code,
                    output: result.output,
                });
            }
            summary.targets.push(target);
        }

        Ok(summary)
    }
}
