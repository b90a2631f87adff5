#![cfg(unix)]

use std::ffi::OsString;
use std::path::Path;

use scanjs_runner::{ProcessRunner, TokioProcessRunner};

fn sh_args(script: &str) -> Vec<OsString> {
    vec![OsString::from("-c"), OsString::from(script)]
}

#[tokio::test]
async fn test_captures_exit_status_and_streams() {
    let runner = TokioProcessRunner;

    let output = runner
        .run(Path::new("sh"), &sh_args("echo out; echo err >&2; exit 3"))
        .await
        .unwrap();

    assert!(!output.success);
    assert_eq!(output.stdout, "out\n");
    assert_eq!(output.stderr, "err\n");
}

#[tokio::test]
async fn test_zero_exit_is_success() {
    let runner = TokioProcessRunner;

    let output = runner.run(Path::new("true"), &[]).await.unwrap();

    assert!(output.success);
    assert!(output.stderr.is_empty());
}

#[tokio::test]
async fn test_missing_binary_is_a_spawn_error() {
    let runner = TokioProcessRunner;

    let result = runner
        .run(Path::new("/nonexistent/scanjs-binary"), &[])
        .await;

    assert!(result.is_err());
}
