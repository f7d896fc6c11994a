//! CGI capture shim for a git smart-HTTP backend.
//!
//! Invoked by the web server once per request with no arguments; everything
//! arrives through the environment and stdin, per the CGI convention. The
//! backend's response is relayed verbatim and its exit code forwarded, so
//! capture is invisible to the git client on the other end.

use anyhow::Result;
use gitcap_capture::{run_shim, CaptureConfig, CgiRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Stdout carries the proxied response; all diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gitcap=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let config = CaptureConfig::from_env();
    let request = CgiRequest::from_env()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let code = run_shim(
        &config,
        &request,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut std::io::stderr(),
    )?;

    Ok(code)
}
