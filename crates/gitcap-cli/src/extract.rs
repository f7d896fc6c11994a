//! Extracts the pack payload from a captured request file.

use anyhow::Result;
use clap::Parser;
use gitcap_pack::extract_pack_file;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extract PACK data from a captured git receive-pack request.
///
/// A captured push body contains pkt-line ref update commands, a flush
/// packet, and then the pack stream. This tool writes the pack stream to a
/// standalone file usable with standard git tooling.
#[derive(Parser, Debug)]
#[command(name = "extract-pack")]
#[command(author, version, about)]
struct Cli {
    /// Captured request file (<base>.request.bin)
    input: PathBuf,

    /// Output pack file
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gitcap=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let report = extract_pack_file(&cli.input, &cli.output)?;

    println!("Found PACK data at offset {}", report.offset);
    println!(
        "PACK signature: {}",
        String::from_utf8_lossy(&report.signature)
    );
    println!("PACK version: {}", report.version);
    println!("Number of objects: {}", report.object_count);
    println!("PACK size: {} bytes", report.pack_size);
    println!();
    println!("Extracted PACK data to: {}", cli.output.display());
    println!();
    println!("You can now use git commands:");
    println!("  git index-pack {}", cli.output.display());
    println!("  git verify-pack -v {}", cli.output.display());

    Ok(())
}
