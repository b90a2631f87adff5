use std::path::PathBuf;

use uuid::Uuid;

/// Produces unique scratch paths for subprocess output files.
///
/// Name uniqueness is the only thing preventing collisions between
/// concurrent runs; no locking is involved. Injected into the orchestrator
/// so tests can pin scratch files to a directory they own.
pub trait ScratchPaths: Send + Sync {
    /// A fresh, process-wide-unique path starting with `prefix` and carrying
    /// no extension; the scanner appends its own.
    fn unique_path(&self, prefix: &str) -> PathBuf;
}

/// Scratch paths under the system temp directory, made unique with a random
/// v4 uuid per run.
#[derive(Debug, Default)]
pub struct TempDirScratch;

impl ScratchPaths for TempDirScratch {
    fn unique_path(&self, prefix: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}{}", prefix, Uuid::new_v4()))
    }
}
