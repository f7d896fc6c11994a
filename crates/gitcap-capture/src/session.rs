//! Captured exchange lifecycle.
//!
//! A capture is written in two steps: the request side (body plus metadata)
//! before the backend runs, and the response side appended once it has
//! exited. Files are never mutated afterwards and never deleted; retention
//! is left to the operator.

use crate::service::{capture_basename, repo_target};
use crate::{BackendOutput, CaptureConfig, CgiRequest, Result, Service};
use chrono::{Local, SecondsFormat};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// One capture in progress: request side persisted, response side pending.
#[derive(Debug)]
pub struct CaptureSession {
    dir: PathBuf,
    base: String,
}

impl CaptureSession {
    /// Persists the request side of an exchange and opens a session for the
    /// response side.
    ///
    /// Returns `None` when capture is disabled or the request is not a POST;
    /// only POSTs carry actual push/fetch data. File-write failures
    /// propagate to the caller.
    pub fn begin(
        config: &CaptureConfig,
        request: &CgiRequest,
        body: &[u8],
    ) -> Result<Option<Self>> {
        if !config.enabled || !request.is_post() {
            return Ok(None);
        }

        config.ensure_capture_dir()?;

        let now = Local::now();
        let service = Service::classify(&request.path_info, &request.query_string);
        let target = repo_target(&request.path_info);
        let session = Self {
            dir: config.capture_dir.clone(),
            base: capture_basename(service, target, now),
        };

        std::fs::write(session.request_path(), body)?;

        let mut record = String::new();
        record.push_str(&format!(
            "Timestamp: {}\n",
            now.to_rfc3339_opts(SecondsFormat::Micros, false)
        ));
        record.push_str(&format!("Service: {service}\n"));
        record.push_str(&format!("Request Method: {}\n", request.method));
        record.push_str(&format!("Path Info: {}\n", request.path_info));
        record.push_str(&format!("Query String: {}\n", request.query_string));
        record.push_str(&format!("Content Type: {}\n", request.content_type));
        record.push_str(&format!(
            "Content Length: {}\n",
            request.content_length_raw
        ));
        record.push_str(&format!("Remote Addr: {}\n", request.remote_addr));
        record.push_str(&format!("HTTP User Agent: {}\n", request.user_agent));
        record.push_str(&format!("\nRequest Body Size: {} bytes\n", body.len()));
        record.push_str(&format!(
            "Request File: {}\n",
            session.request_path().display()
        ));
        std::fs::write(session.metadata_path(), record)?;

        tracing::info!(service = %service, base = %session.base, "captured request");

        Ok(Some(session))
    }

    /// Persists the response side: the backend's stdout verbatim, plus the
    /// outcome fields appended to the metadata record.
    pub fn finish(&self, output: &BackendOutput) -> Result<()> {
        std::fs::write(self.response_path(), &output.stdout)?;

        let mut record = String::new();
        record.push_str(&format!(
            "Response File: {}\n",
            self.response_path().display()
        ));
        record.push_str(&format!("Response Size: {} bytes\n", output.stdout.len()));
        record.push_str(&format!("Exit Code: {}\n", output.exit_code));
        if !output.stderr.is_empty() {
            record.push_str(&format!(
                "\nStderr:\n{}\n",
                String::from_utf8_lossy(&output.stderr)
            ));
        }

        let mut file = OpenOptions::new().append(true).open(self.metadata_path())?;
        file.write_all(record.as_bytes())?;

        tracing::debug!(base = %self.base, response_len = output.stdout.len(), "captured response");

        Ok(())
    }

    /// Raw request bytes.
    #[must_use]
    pub fn request_path(&self) -> PathBuf {
        self.file_path("request.bin")
    }

    /// Raw response bytes.
    #[must_use]
    pub fn response_path(&self) -> PathBuf {
        self.file_path("response.bin")
    }

    /// Line-oriented key-value metadata.
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.file_path("metadata.txt")
    }

    fn file_path(&self, suffix: &str) -> PathBuf {
        self.dir.join(format!("{}.{suffix}", self.base))
    }
}
