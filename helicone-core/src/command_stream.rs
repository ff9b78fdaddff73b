// Standard library
use std::path::Path;

// External crates
use crate::error::{CoreError, Result};
use duct::cmd;
use tracing::{debug, info};
use which::which;

/// Number of trailing output lines kept when a command fails.
const ERROR_CONTEXT_LINES: usize = 50;

/// Runs an external program to completion inside a working directory.
///
/// The scaffolding pipeline only needs "did it work, and if not, why", so
/// implementations capture output instead of streaming it.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// `CommandRunner` backed by `duct`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DuctRunner;

impl CommandRunner for DuctRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let full_command = format_command(program, args);

        if !is_tool_installed(program) {
            return Err(CoreError::Dependency(format!(
                "'{}' is not installed or not in PATH",
                program
            )));
        }

        debug!(command = %full_command, cwd = %cwd.display(), "Running command");

        let output = cmd(program, args)
            .dir(cwd)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()
            .map_err(|e| {
                CoreError::Internal(format!("Failed to start command '{}': {}", full_command, e))
            })?;

        if !output.status.success() {
            let stdout_str = String::from_utf8_lossy(&output.stdout);
            return Err(CoreError::Command(format!(
                "'{}' exited with code {:?}\n{}",
                full_command,
                output.status.code(),
                tail_lines(&stdout_str, ERROR_CONTEXT_LINES)
            )));
        }

        info!(command = %full_command, "Command succeeded");
        Ok(())
    }
}

/// Checks if a command-line tool is available in the system's PATH.
pub fn is_tool_installed(tool_name: &str) -> bool {
    which(tool_name).is_ok()
}

pub fn format_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Last `count` lines of `output`, trimmed of trailing whitespace.
fn tail_lines(output: &str, count: usize) -> String {
    let lines: Vec<&str> = output.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n").trim_end().to_string()
}
