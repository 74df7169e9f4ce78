//! Decode AMF files and print a JSON summary of each mesh.
//!
//! Run: `cargo run -p amf --features tools --bin amf_dump -- <file.amf>...`
//!
//! Set `RUST_LOG=debug` for per-file read sizes. Pass `--extend-trailing` to
//! let a chunk that is the last tag in the file run to the end of the buffer
//! instead of failing.

use std::env;
use std::process::ExitCode;

use amf::{MeshSummary, ParseOptions, TrailingChunk};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut options = ParseOptions::default();
    let mut paths = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--extend-trailing" {
            options.trailing_chunk = TrailingChunk::ExtendToEnd;
        } else {
            paths.push(arg);
        }
    }

    if paths.is_empty() {
        eprintln!("usage: amf_dump [--extend-trailing] <file.amf>...");
        return ExitCode::FAILURE;
    }

    let mut failed = false;
    for path in &paths {
        match amf::load_with(path, &options) {
            Ok(mesh) => {
                let summary = serde_json::json!({
                    "path": path,
                    "mesh": MeshSummary::new(&mesh),
                });
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        tracing::error!("Failed to serialize summary for {}: {}", path, e);
                        failed = true;
                    }
                }
            }
            Err(e) => {
                tracing::error!("{}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
