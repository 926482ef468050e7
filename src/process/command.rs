use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Structured result from a subprocess execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    /// Returns true if the command exited successfully (code 0).
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Errors that can occur when running an external tool.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to execute '{command}': {message}")]
    ExecutionFailed { command: String, message: String },

    #[error("'{command}' failed (exit code {exit_code}): {stderr}")]
    Failed {
        command: String,
        exit_code: i32,
        stderr: String,
    },
}

/// Builder for running an external program such as yt-dlp or mpv.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    /// Add multiple arguments to the command.
    pub fn args<S: AsRef<str>>(mut self, args: &[S]) -> Self {
        self.args.extend(args.iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// The command line, for messages.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Execute the command, capturing its output.
    pub fn run(self) -> Result<CommandResult, CommandError> {
        debug!(command = %self.display(), "running");
        let output = self
            .command()
            .output()
            .map_err(|e| CommandError::ExecutionFailed {
                command: self.display(),
                message: e.to_string(),
            })?;

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }

    /// Execute the command and return an error if it fails.
    pub fn run_checked(self) -> Result<CommandResult, CommandError> {
        let command = self.display();
        let result = self.run()?;

        if !result.success() {
            return Err(CommandError::Failed {
                command,
                exit_code: result.exit_code,
                stderr: result.stderr,
            });
        }

        Ok(result)
    }

    /// Execute the command attached to this terminal and wait for it.
    pub fn status(self) -> Result<(), CommandError> {
        let command = self.display();
        debug!(%command, "running attached");
        let status = self
            .command()
            .status()
            .map_err(|e| CommandError::ExecutionFailed {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(CommandError::Failed {
                command,
                exit_code: status.code().unwrap_or(-1),
                stderr: String::new(),
            });
        }
        Ok(())
    }
}
