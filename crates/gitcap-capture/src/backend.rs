//! Synchronous backend execution.

use crate::{CaptureError, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Fully buffered output of one backend run.
#[derive(Debug)]
pub struct BackendOutput {
    /// The backend's standard output, verbatim.
    pub stdout: Vec<u8>,
    /// The backend's standard error, verbatim.
    pub stderr: Vec<u8>,
    /// The backend's exit code.
    pub exit_code: i32,
}

/// Runs the backend executable with the inherited environment, feeding
/// `input` on its stdin and draining both output streams to completion.
///
/// Blocks until the child exits; there is no timeout. The streams are
/// buffered whole in memory.
pub fn run_backend(path: &Path, input: &[u8]) -> Result<BackendOutput> {
    tracing::debug!(backend = %path.display(), input_len = input.len(), "spawning backend");

    let mut child = Command::new(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| CaptureError::Backend {
            path: path.display().to_string(),
            source,
        })?;

    // Feed stdin from a separate thread so a child that writes a large
    // response before draining its input cannot deadlock against a full pipe.
    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.to_vec();
        std::thread::spawn(move || {
            // A child that stops reading early closes the pipe; its exit
            // status still tells the whole story.
            let _ = stdin.write_all(&input);
        })
    });

    let output = child.wait_with_output()?;
    if let Some(handle) = writer {
        let _ = handle.join();
    }

    Ok(BackendOutput {
        stdout: output.stdout,
        stderr: output.stderr,
        // A signal-terminated child has no exit code; report failure.
        exit_code: output.status.code().unwrap_or(1),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn write_script(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("backend.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_run_backend_echoes_stdin() {
        let tmp = tempfile::tempdir().unwrap();
        let script = write_script(tmp.path(), "cat");

        let output = run_backend(&script, b"pack bytes").unwrap();
        assert_eq!(output.stdout, b"pack bytes");
        assert!(output.stderr.is_empty());
        assert_eq!(output.exit_code, 0);
    }

    #[test]
    fn test_run_backend_collects_stderr_and_exit_code() {
        let tmp = tempfile::tempdir().unwrap();
        let script = write_script(tmp.path(), "echo 'fatal: oops' >&2\nexit 3");

        let output = run_backend(&script, b"").unwrap();
        assert!(output.stdout.is_empty());
        assert_eq!(output.stderr, b"fatal: oops\n");
        assert_eq!(output.exit_code, 3);
    }

    #[test]
    fn test_run_backend_missing_executable() {
        let err = run_backend(Path::new("/nonexistent/backend"), b"").unwrap_err();
        assert!(matches!(err, CaptureError::Backend { .. }));
    }
}
