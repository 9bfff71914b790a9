//! External tool detection and invocation.
//!
//! Every external build tool (the `clang` compiler, the `npm` package manager)
//! sits behind the [`Toolchain`] capability: a probe that decides whether the
//! tool is usable right now, and a run operation that executes it to
//! completion. Probes are never cached; each build step probes again.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use crate::dist::error::{Error, Result};

/// Result of probing a toolchain on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// The tool answered its version query.
    Available {
        /// Resolved executable
        path: PathBuf,
        /// First line of the version output
        version: String,
    },
    /// The tool is absent or its version query failed.
    Missing {
        /// Why the tool is considered unusable
        reason: String,
    },
}

/// Exit status of a toolchain run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolExit {
    code: Option<i32>,
}

impl ToolExit {
    /// Creates an exit status from a raw exit code (`None` means killed by a signal).
    pub fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    /// Returns `true` if the tool exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ToolExit {
    fn from(status: ExitStatus) -> Self {
        Self::from_code(status.code())
    }
}

impl std::fmt::Display for ToolExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// An external build tool that can be probed and run.
pub trait Toolchain {
    /// Human-readable tool name used in logs.
    fn name(&self) -> &str;

    /// Checks whether the tool is usable on the host right now.
    fn probe(&self) -> impl Future<Output = Availability> + Send;

    /// Runs the tool with `args` to completion, optionally inside `cwd`.
    ///
    /// Returns an error only if the process could not be started.
    fn run(
        &self,
        args: &[String],
        cwd: Option<&Path>,
    ) -> impl Future<Output = Result<ToolExit>> + Send;
}

/// A toolchain backed by an executable found on `PATH`.
#[derive(Debug, Clone)]
pub struct SystemTool {
    program: String,
    version_args: Vec<String>,
}

impl SystemTool {
    /// Creates a tool probed with `<program> --version`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            version_args: vec!["--version".to_string()],
        }
    }

    /// The native compiler used for the kernel.
    pub fn clang() -> Self {
        Self::new("clang")
    }

    /// The package manager used for the virtual machine bundle.
    pub fn npm() -> Self {
        Self::new("npm")
    }
}

impl Toolchain for SystemTool {
    fn name(&self) -> &str {
        &self.program
    }

    async fn probe(&self) -> Availability {
        let path = match which::which(&self.program) {
            Ok(path) => path,
            Err(e) => {
                log::debug!("{} not found in PATH: {}", self.program, e);
                return Availability::Missing {
                    reason: format!("{} installation not found on host system", self.program),
                };
            }
        };
        log::debug!("Found {} at: {}", self.program, path.display());

        let output = Command::new(&path)
            .args(&self.version_args)
            .stdin(Stdio::null())
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout)
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                log::info!("✓ {} available: {}", self.program, version);
                Availability::Available { path, version }
            }
            Ok(output) => {
                log::warn!(
                    "{} found at {} but {} check failed (exit code: {:?}). Stderr: {}",
                    self.program,
                    path.display(),
                    self.version_args.join(" "),
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                Availability::Missing {
                    reason: format!(
                        "failed to determine installed {} version ({})",
                        self.program,
                        ToolExit::from(output.status)
                    ),
                }
            }
            Err(e) => {
                log::warn!(
                    "{} found at {} but failed to execute: {}. Check file permissions.",
                    self.program,
                    path.display(),
                    e
                );
                Availability::Missing {
                    reason: format!("failed to execute {}: {}", self.program, e),
                }
            }
        }
    }

    async fn run(&self, args: &[String], cwd: Option<&Path>) -> Result<ToolExit> {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        log::debug!("Running: {} {}", self.program, args.join(" "));

        let status = command.status().await.map_err(|e| {
            Error::GenericError(format!(
                "failed to start `{} {}`: {}",
                self.program,
                args.join(" "),
                e
            ))
        })?;

        Ok(status.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn probe_reports_missing_program() {
        let tool = SystemTool::new("honeyos-devtools-no-such-compiler");
        let availability = tool.probe().await;
        assert!(matches!(availability, Availability::Missing { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_version_query_counts_as_missing() {
        // `false` is on PATH but exits non-zero for `--version`.
        let availability = SystemTool::new("false").probe().await;
        match availability {
            Availability::Missing { reason } => {
                assert!(reason.contains("failed to determine installed false version"));
                assert!(reason.contains("exit code 1"));
            }
            other => panic!("expected Missing, got {:?}", other),
        }
    }

    #[test]
    fn tool_exit_success_only_on_zero() {
        assert!(ToolExit::from_code(Some(0)).success());
        assert!(!ToolExit::from_code(Some(2)).success());
        assert!(!ToolExit::from_code(None).success());
        assert_eq!(ToolExit::from_code(Some(2)).to_string(), "exit code 2");
    }
}
