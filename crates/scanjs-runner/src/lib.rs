//! Thin orchestration around the ScanJS static analyzer.
//!
//! Runs the external scanner as a subprocess per target, collects the JSON
//! results it writes to a scratch file, merges them across targets, and
//! renders a console-friendly report. All detection logic lives in the
//! scanner binary itself; this crate only does the process plumbing and
//! result aggregation.

pub mod error;
pub mod process;
pub mod report;
pub mod results;
pub mod scanner;
pub mod scratch;

pub use error::ScanError;
pub use process::{ProcessOutput, ProcessRunner, TokioProcessRunner};
pub use report::render_console;
pub use results::{Finding, ScanResults};
pub use scanner::{ScanJsRunner, ScannerConfig};
pub use scratch::{ScratchPaths, TempDirScratch};
