//! Subprocess execution
//!
//! Runs rendered tool commands and classifies their exit status. The
//! `Invoker` trait is the seam between orchestration and the process
//! table; tests substitute a scripted implementation.

use std::process::{Command, Stdio};

use crate::error::CrunchResult;
use crate::models::{InvocationResult, ToolCommand};

/// Boundary for executing rendered tool commands.
pub trait Invoker {
    fn invoke(&mut self, command: &ToolCommand) -> CrunchResult<InvocationResult>;
}

/// Runs commands as real subprocesses, blocking until exit.
///
/// Arguments are passed as a discrete vector - no shell is involved, so
/// path content is never re-tokenized or interpolated.
pub struct ProcessRunner;

impl Invoker for ProcessRunner {
    fn invoke(&mut self, command: &ToolCommand) -> CrunchResult<InvocationResult> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
        }

        Ok(InvocationResult {
            code: output.status.code(),
            output: combined,
            succeeded: output.status.success(),
        })
    }
}

/// Scripted invoker for tests: returns queued results and records every
/// command it was asked to run.
#[cfg(test)]
pub struct ScriptedInvoker {
    results: std::collections::VecDeque<InvocationResult>,
    pub invoked: Vec<ToolCommand>,
}

#[cfg(test)]
impl ScriptedInvoker {
    pub fn new(results: Vec<InvocationResult>) -> Self {
        Self {
            results: results.into(),
            invoked: Vec::new(),
        }
    }

    pub fn succeeding() -> InvocationResult {
        InvocationResult {
            code: Some(0),
            output: String::new(),
            succeeded: true,
        }
    }

    pub fn failing(code: i32, output: &str) -> InvocationResult {
        InvocationResult {
            code: Some(code),
            output: output.to_string(),
            succeeded: false,
        }
    }
}

#[cfg(test)]
impl Invoker for ScriptedInvoker {
    fn invoke(&mut self, command: &ToolCommand) -> CrunchResult<InvocationResult> {
        self.invoked.push(command.clone());
        Ok(self
            .results
            .pop_front()
            .unwrap_or_else(Self::succeeding))
    }
}
