//! Crunch CLI - batch JS/CSS minification orchestrator
//!
//! Usage: crunch <COMMAND>
//!
//! Commands:
//!   compile  Compile JavaScript with the Google Closure Compiler
//!   minify   Minify JavaScript or CSS with the YUI Compressor
//!   run      Run every task declared in a crunch.toml manifest

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use crunch::cli::{Cli, Commands};
use crunch::manifest;
use crunch::models::{CollectionSpec, RunSummary};
use crunch::resolver::GlobScanner;
use crunch::runner::ProcessRunner;
use crunch::sink::ConsoleSink;
use crunch::{Orchestrator, RunOptions, ToolProfile};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut sink = ConsoleSink;
    let mut invoker = ProcessRunner;
    let scanner = GlobScanner;

    let summary = match cli.command {
        Commands::Compile {
            target,
            file,
            base_dir,
            include,
            merge,
            level,
            jar,
        } => {
            let profile = ToolProfile::closure(jar, level);
            let collections = pattern_collections(&base_dir, include);
            let options = RunOptions {
                merge,
                verbose: cli.verbose,
                dry_run: cli.dry_run,
            };
            Orchestrator::new(&profile, &target, options).run(
                file.as_deref(),
                &collections,
                &scanner,
                &mut invoker,
                &mut sink,
            )?
        }

        Commands::Minify {
            target,
            file,
            base_dir,
            include,
            content_type,
            jar,
        } => {
            let profile = ToolProfile::yui(jar, content_type);
            let collections = pattern_collections(&base_dir, include);
            let options = RunOptions {
                merge: false,
                verbose: cli.verbose,
                dry_run: cli.dry_run,
            };
            Orchestrator::new(&profile, &target, options).run(
                file.as_deref(),
                &collections,
                &scanner,
                &mut invoker,
                &mut sink,
            )?
        }

        Commands::Run { manifest } => run_manifest(
            &manifest,
            cli.verbose,
            cli.dry_run,
            &scanner,
            &mut invoker,
            &mut sink,
        )?,
    };

    let built = summary.targets.len();
    if cli.dry_run {
        println!("{built} target(s) planned");
    } else {
        println!("{built} target(s) built");
    }
    Ok(())
}

fn pattern_collections(base_dir: &Path, include: Vec<String>) -> Vec<CollectionSpec> {
    if include.is_empty() {
        return Vec::new();
    }
    vec![CollectionSpec::set(base_dir, include)]
}

fn run_manifest(
    path: &Path,
    verbose: bool,
    dry_run: bool,
    scanner: &GlobScanner,
    invoker: &mut ProcessRunner,
    sink: &mut ConsoleSink,
) -> Result<RunSummary> {
    let manifest = manifest::load(path)?;

    let mut summary = RunSummary::default();
    for task in &manifest.task {
        let profile = task.profile();
        let collections = task.collections();
        let options = RunOptions {
            merge: task.merge,
            verbose,
            dry_run,
        };
        let result = Orchestrator::new(&profile, &task.target, options).run(
            task.file.as_deref(),
            &collections,
            scanner,
            invoker,
            sink,
        )?;
        summary.targets.extend(result.targets);
    }
    Ok(summary)
}
