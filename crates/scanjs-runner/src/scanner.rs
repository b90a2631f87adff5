use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ScanError;
use crate::process::{ProcessRunner, TokioProcessRunner};
use crate::results::ScanResults;
use crate::scratch::{ScratchPaths, TempDirScratch};

/// File-name prefix for scratch output files.
const SCRATCH_PREFIX: &str = "scanjs-";

/// Extension the scanner appends to its `-o` argument. Exact casing matters.
const RESULTS_EXTENSION: &str = "JSON";

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Scanner executable; resolved from `PATH` unless given as a path.
    pub binary: PathBuf,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("scanjs"),
        }
    }
}

/// Orchestrates scanner subprocesses and aggregates their JSON output.
///
/// One subprocess and one scratch file per target; the scratch file never
/// outlives the run that created it.
pub struct ScanJsRunner {
    config: ScannerConfig,
    runner: Arc<dyn ProcessRunner>,
    scratch: Arc<dyn ScratchPaths>,
}

impl ScanJsRunner {
    pub fn new(config: ScannerConfig) -> Self {
        Self::with_parts(config, Arc::new(TokioProcessRunner), Arc::new(TempDirScratch))
    }

    /// Construct with explicit runner and scratch capabilities. Tests use
    /// this to substitute fakes for the real scanner binary and temp
    /// directory.
    pub fn with_parts(
        config: ScannerConfig,
        runner: Arc<dyn ProcessRunner>,
        scratch: Arc<dyn ScratchPaths>,
    ) -> Self {
        Self {
            config,
            runner,
            scratch,
        }
    }

    /// Scan every target concurrently and shallow-merge the per-target
    /// results in input order, so on a key collision the later target wins.
    ///
    /// Every run is driven to completion even when one fails, which lets each
    /// run clean up its own scratch file; the error reported is the first
    /// failing target's in input order, and remaining results are discarded.
    pub async fn scan<I, P>(&self, targets: I) -> Result<ScanResults, ScanError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let targets: Vec<PathBuf> = targets
            .into_iter()
            .map(|target| target.as_ref().to_path_buf())
            .collect();

        let outcomes = join_all(targets.iter().map(|target| self.scan_one(target))).await;

        let mut merged = ScanResults::new();
        for outcome in outcomes {
            merged.merge(outcome?);
        }
        Ok(merged)
    }

    /// Run the scanner once against `target` and return its parsed results.
    ///
    /// The scratch file is deleted after a successful parse and after a
    /// failed parse, with deletion errors swallowed. When the read itself
    /// fails the file presumably never existed, so no deletion is attempted.
    pub async fn scan_one(&self, target: &Path) -> Result<ScanResults, ScanError> {
        let output_prefix = self.scratch.unique_path(SCRATCH_PREFIX);
        let results_path = results_path_for(&output_prefix);

        debug!(
            path = %target.display(),
            binary = %self.config.binary.display(),
            "running scanner"
        );

        let args = vec![
            OsString::from("--disable-beautify"),
            OsString::from("-t"),
            target.as_os_str().to_os_string(),
            OsString::from("-o"),
            output_prefix.into_os_string(),
        ];

        let output = self
            .runner
            .run(&self.config.binary, &args)
            .await
            .map_err(|err| ScanError::Execution(err.to_string()))?;

        if !output.success {
            return Err(ScanError::Execution(output.stderr));
        }

        let raw = tokio::fs::read(&results_path).await?;

        match serde_json::from_slice::<Map<String, Value>>(&raw) {
            Ok(mapping) => {
                let _ = tokio::fs::remove_file(&results_path).await;
                debug!(path = %target.display(), groups = mapping.len(), "scan complete");
                Ok(ScanResults(mapping))
            }
            Err(err) => {
                let _ = tokio::fs::remove_file(&results_path).await;
                Err(ScanError::Parse(err))
            }
        }
    }
}

/// The scanner writes `<prefix>.JSON` next to the `-o` argument it was given.
fn results_path_for(prefix: &Path) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(".");
    name.push(RESULTS_EXTENSION);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_path_appends_uppercase_extension() {
        let path = results_path_for(Path::new("/tmp/scanjs-abc"));
        assert_eq!(path, Path::new("/tmp/scanjs-abc.JSON"));
    }
}
