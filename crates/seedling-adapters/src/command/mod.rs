//! Subprocess adapter.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use seedling_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::SeedlingResult,
};

/// Runs commands via `std::process::Command`.
///
/// Per the port contract, stdout/stderr are discarded — only the exit
/// status is observed.
#[derive(Debug, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> SeedlingResult<()> {
        debug!(program, ?args, cwd = %cwd.display(), "Running command");

        let rendered = format!("{program} {}", args.join(" "));
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                command: rendered.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: rendered,
                reason: format!("exit status: {status}"),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn successful_command_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemCommandRunner::new();
        assert!(runner.run("true", &[], dir.path()).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn non_zero_exit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemCommandRunner::new();
        let err = runner.run("false", &[], dir.path()).unwrap_err();
        assert!(err.to_string().contains("External command failed"));
    }

    #[test]
    #[cfg(unix)]
    fn cwd_is_honoured() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemCommandRunner::new();
        runner.run("touch", &["marker"], dir.path()).unwrap();
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn missing_program_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemCommandRunner::new();
        assert!(runner.run("definitely-not-a-program", &[], dir.path()).is_err());
    }
}
