//! Crunch - batch JS/CSS minification orchestrator
//!
//! Crunch turns declarative input selections (a single file, glob-style
//! filesets, explicit filelists) into external tool invocations: the
//! Google Closure Compiler for JavaScript compilation and the YUI
//! Compressor for JS/CSS minification, both driven as `java -jar`
//! subprocesses with argument vectors rather than shell strings.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod orchestrator;
pub mod resolver;
pub mod runner;
pub mod sink;
pub mod target;
pub mod units;

// Re-exports for convenience
pub use command::ToolProfile;
pub use config::{CompilationLevel, ContentType};
pub use error::{CrunchError, CrunchResult};
pub use models::{
    CollectionKind, CollectionSpec, CompilationUnit, InvocationResult, ResolvedSource, RunSummary,
    ToolCommand,
};
pub use orchestrator::{Orchestrator, RunOptions};
pub use resolver::{resolve_sources, GlobScanner, Scanner};
pub use runner::{Invoker, ProcessRunner};
pub use sink::{ConsoleSink, LogSink, NoopSink};
pub use target::{ensure_parent_dir, map_target};
pub use units::aggregate;
