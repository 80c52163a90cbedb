#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Generate TypeScript type declarations from a live JSON API.
//!
//! The CLI fetches one payload, infers a deterministic set of `export
//! interface`/`export type` declarations from it, and writes them to
//! `<TypeName>.ts`.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod cli;
mod common;
mod config;
mod editor;
mod error;
mod persist;
mod sampler;
mod typegen;

pub use error::GenError;

#[derive(Parser, Debug)]
#[command(
    name = "tygen",
    version,
    about = "\x1b[33mtygen\x1b[0m generates TypeScript types from a JSON API 🧬"
)]
struct Cli {
    #[command(flatten)]
    args: cli::GenerateArgs,
}

/// Parse `args` and run the CLI to completion, returning the exit code.
///
/// `args` includes the program name in position zero, matching
/// `std::env::args`.
pub fn run_cli(args: Vec<String>) -> i32 {
    init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            return 1;
        }
    };

    runtime.block_on(run_cli_async(args))
}

async fn run_cli_async(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => cli::generate::run(cli.args).await,
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

fn init_tracing() {
    let crate_root = module_path!().to_string();

    // TYGEN_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "tygen_cli=debug,reqwest=warn"
    let filter = match std::env::var("TYGEN_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("{crate_root}={level}")
        }
        Ok(spec) => spec,
        Err(_) => format!("{crate_root}=info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(&filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        // Repeat initialization happens when run_cli is called twice in one
        // process, e.g. from tests. The first subscriber stays active.
        tracing::debug!("tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
