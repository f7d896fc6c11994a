//! The shim operation: relay one exchange, capturing both sides.

use crate::{run_backend, CaptureConfig, CaptureSession, CgiRequest, Result};
use std::io::{Read, Write};

/// Relays one CGI request through the backend and returns its exit code,
/// which the caller forwards as its own.
///
/// Capture must be invisible to the protocol consumer: the backend's stdout
/// and stderr reach `stdout`/`stderr` verbatim whether or not anything was
/// persisted. Capture-file write failures propagate and abort the run -
/// losing a capture silently is acceptable, corrupting the proxied exchange
/// silently is not.
pub fn run_shim<R, W, E>(
    config: &CaptureConfig,
    request: &CgiRequest,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
) -> Result<i32>
where
    R: Read,
    W: Write,
    E: Write,
{
    let body = request.read_body(stdin)?;

    let session = CaptureSession::begin(config, request, &body)?;

    let output = run_backend(&config.backend, &body)?;

    if let Some(session) = &session {
        session.finish(&output)?;
    }

    stdout.write_all(&output.stdout)?;
    stdout.flush()?;
    if !output.stderr.is_empty() {
        stderr.write_all(&output.stderr)?;
    }

    Ok(output.exit_code)
}
