use std::ffi::OsString;
use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

/// Outcome of one subprocess invocation.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Subprocess invocation as a swappable capability, so tests can substitute
/// canned output for a real scanner binary.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `command` with `args` to completion and capture its output.
    async fn run(&self, command: &Path, args: &[OsString]) -> io::Result<ProcessOutput>;
}

/// Production runner over `tokio::process`.
///
/// No timeout is applied: a hung subprocess hangs the caller. Known gap,
/// documented rather than patched here.
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, command: &Path, args: &[OsString]) -> io::Result<ProcessOutput> {
        let output = Command::new(command).args(args).output().await?;
        Ok(ProcessOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
