//! Request classification and capture file naming.

use chrono::{DateTime, Local};
use std::fmt;

/// Marker separating the repository path from the service suffix in PATH_INFO.
const SERVICE_MARKER: &str = "/git-";
/// Repository suffix removed during sanitization.
const REPO_SUFFIX: &str = ".git";

/// Git smart-HTTP service classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Push (`git-receive-pack`).
    ReceivePack,
    /// Fetch (`git-upload-pack`).
    UploadPack,
    /// Anything else.
    Unknown,
}

impl Service {
    /// Classifies a request by substring inspection of path and query string.
    #[must_use]
    pub fn classify(path_info: &str, query_string: &str) -> Self {
        if path_info.contains("git-receive-pack") || query_string.contains("git-receive-pack") {
            Self::ReceivePack
        } else if path_info.contains("git-upload-pack") || query_string.contains("git-upload-pack")
        {
            Self::UploadPack
        } else {
            Self::Unknown
        }
    }

    /// Returns the service name used in capture filenames and metadata.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReceivePack => "receive-pack",
            Self::UploadPack => "upload-pack",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the repository portion of PATH_INFO, without the service suffix.
#[must_use]
pub fn repo_target(path_info: &str) -> &str {
    match path_info.find(SERVICE_MARKER) {
        Some(idx) => &path_info[..idx],
        None => path_info,
    }
}

/// Turns a repository path into a filename-safe component.
///
/// Leading separators are stripped, remaining separators become dashes and
/// the `.git` marker is removed. PATH_INFO is attacker-controlled, so the
/// result is additionally restricted to an allow-list of filename characters
/// and an empty result falls back to `"repo"`.
#[must_use]
pub fn sanitize_target(target: &str) -> String {
    let flattened = target
        .trim_start_matches('/')
        .replace('/', "-")
        .replace(REPO_SUFFIX, "");

    let safe: String = flattened
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if safe.is_empty() {
        "repo".to_string()
    } else {
        safe
    }
}

/// Builds the base capture filename: timestamp, service, sanitized target.
///
/// The timestamp carries microsecond precision, which is the only collision
/// avoidance between captures of the same service and repository.
#[must_use]
pub fn capture_basename(service: Service, target: &str, now: DateTime<Local>) -> String {
    format!(
        "{}-{}-{}",
        now.format("%Y%m%d-%H%M%S-%6f"),
        service,
        sanitize_target(target)
    )
}
