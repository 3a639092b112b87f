use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{CompilationLevel, ContentType};

/// Crunch - batch JS/CSS minification orchestrator
#[derive(Parser, Debug)]
#[command(name = "crunch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Set CLOSURE_JAR / YUI_COMPRESSOR_JAR to locate the tool jars.")]
pub struct Cli {
    /// Print fully rendered tool command lines
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show what would run without invoking any tool
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile JavaScript with the Google Closure Compiler
    Compile {
        /// Output file, or an existing directory to mirror sources into
        #[arg(short, long)]
        target: PathBuf,

        /// A single source file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Base directory for --include patterns
        #[arg(short = 'd', long, default_value = ".")]
        base_dir: PathBuf,

        /// Glob-style inclusion rule (repeatable)
        #[arg(short, long)]
        include: Vec<String>,

        /// Merge all sources into the single target file
        #[arg(short, long)]
        merge: bool,

        /// Compilation level
        #[arg(short, long, value_enum, default_value_t = CompilationLevel::SimpleOptimizations)]
        level: CompilationLevel,

        /// Path to compiler.jar (overrides CLOSURE_JAR)
        #[arg(long)]
        jar: Option<PathBuf>,
    },

    /// Minify JavaScript or CSS with the YUI Compressor
    Minify {
        /// Output file, or an existing directory to mirror sources into
        #[arg(short, long)]
        target: PathBuf,

        /// A single source file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Base directory for --include patterns
        #[arg(short = 'd', long, default_value = ".")]
        base_dir: PathBuf,

        /// Glob-style inclusion rule (repeatable)
        #[arg(short, long)]
        include: Vec<String>,

        /// Content type; auto-detected from the file extension when omitted
        #[arg(long = "type", value_enum)]
        content_type: Option<ContentType>,

        /// Path to yuicompressor.jar (overrides YUI_COMPRESSOR_JAR)
        #[arg(long)]
        jar: Option<PathBuf>,
    },

    /// Run every task declared in a manifest
    Run {
        /// Path to the task manifest
        #[arg(default_value = "crunch.toml")]
        manifest: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compile_with_includes_and_merge() {
        let cli = Cli::parse_from([
            "crunch", "compile", "--target", "dist/all.js", "--merge", "-d", "src", "-i",
            "**/*.js", "-i", "vendor/*.js", "--level", "advanced-optimizations",
        ]);

        match cli.command {
            Commands::Compile {
                target,
                merge,
                include,
                level,
                ..
            } => {
                assert_eq!(target, PathBuf::from("dist/all.js"));
                assert!(merge);
                assert_eq!(include, vec!["**/*.js", "vendor/*.js"]);
                assert_eq!(level, CompilationLevel::AdvancedOptimizations);
            }
            other => panic!("expected compile, got {other:?}"),
        }
    }

    #[test]
    fn compile_level_defaults_to_simple() {
        let cli = Cli::parse_from(["crunch", "compile", "--target", "out.js", "--file", "a.js"]);
        match cli.command {
            Commands::Compile { level, .. } => {
                assert_eq!(level, CompilationLevel::SimpleOptimizations);
            }
            other => panic!("expected compile, got {other:?}"),
        }
    }

    #[test]
    fn invalid_level_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from([
            "crunch", "compile", "--target", "out.js", "--level", "turbo",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn minify_has_no_merge_flag() {
        let result = Cli::try_parse_from([
            "crunch", "minify", "--target", "out.css", "--file", "a.css", "--merge",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn run_defaults_to_crunch_toml() {
        let cli = Cli::parse_from(["crunch", "run"]);
        match cli.command {
            Commands::Run { manifest } => assert_eq!(manifest, PathBuf::from("crunch.toml")),
            other => panic!("expected run, got {other:?}"),
        }
    }
}
