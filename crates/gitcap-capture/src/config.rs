//! Shim configuration.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default directory capture files are written to.
const DEFAULT_CAPTURE_DIR: &str = "/var/git-captures";
/// Default backend executable.
const DEFAULT_BACKEND: &str = "/usr/lib/git-core/git-http-backend";

/// Configuration for the capture shim.
///
/// Passed explicitly into the capture machinery rather than read from
/// process-wide globals, so tests can point it at a temporary directory and
/// a fake backend executable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// Directory capture files are written to.
    pub capture_dir: PathBuf,
    /// Path to the smart-HTTP backend executable.
    pub backend: PathBuf,
    /// Whether capture is enabled. Relaying happens either way.
    pub enabled: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            capture_dir: PathBuf::from(DEFAULT_CAPTURE_DIR),
            backend: PathBuf::from(DEFAULT_BACKEND),
            enabled: true,
        }
    }
}

impl CaptureConfig {
    /// Builds the configuration from the process environment.
    ///
    /// `GIT_CAPTURE_ENABLE` disables capture unless it is exactly `"1"`
    /// (unset means enabled). `GIT_CAPTURE_DIR` and `GIT_CAPTURE_BACKEND`
    /// override the default paths.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("GIT_CAPTURE_DIR") {
            if !dir.is_empty() {
                config.capture_dir = PathBuf::from(dir);
            }
        }
        if let Ok(backend) = env::var("GIT_CAPTURE_BACKEND") {
            if !backend.is_empty() {
                config.backend = PathBuf::from(backend);
            }
        }
        if let Ok(enable) = env::var("GIT_CAPTURE_ENABLE") {
            config.enabled = enable == "1";
        }

        config
    }

    /// Creates the capture directory if it does not exist.
    pub fn ensure_capture_dir(&self) -> std::io::Result<()> {
        if self.capture_dir.is_dir() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.capture_dir)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.capture_dir, std::fs::Permissions::from_mode(0o755))?;
        }

        Ok(())
    }
}
