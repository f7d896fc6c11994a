//! Capture shim for git smart-HTTP backends.
//!
//! This crate implements a transparent CGI wrapper around a backend such as
//! `git-http-backend`: one request/response cycle is relayed unchanged while
//! the raw request bytes, the raw response bytes, and a metadata record are
//! persisted to a capture directory for later offline replay and debugging.

mod backend;
mod cgi;
mod config;
mod error;
mod service;
mod session;
mod shim;

pub use backend::{run_backend, BackendOutput};
pub use cgi::CgiRequest;
pub use config::CaptureConfig;
pub use error::CaptureError;
pub use service::{capture_basename, repo_target, sanitize_target, Service};
pub use session::CaptureSession;
pub use shim::run_shim;

/// Result type for capture operations.
pub type Result<T> = std::result::Result<T, CaptureError>;
