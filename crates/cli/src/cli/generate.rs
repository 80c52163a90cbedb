//! The generation command: fetch JSON, infer types, write the file.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;

use crate::cli::run_cli_async;
use crate::common::{format_elapsed_ms, run_with_spinner, spinner};
use crate::config::{self, PromptDefaults};
use crate::editor::{self, VsCodeEditor};
use crate::error::GenError;
use crate::persist::write_artifact;
use crate::sampler;
use crate::typegen::synthesize;

/// Inputs for one generation run. Anything absent is prompted for, except
/// in flag mode (`--url` given) where `name` and `path` fall back to
/// defaults.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// The API URL to fetch JSON from.
    #[arg(
        long,
        short = 'u',
        help = "The API URL to fetch JSON from. Will prompt if not provided"
    )]
    pub url: Option<String>,
    /// Name of the root type and the output file stem.
    #[arg(
        long,
        short = 'n',
        help = "The name of the generated root type. Defaults to ApiTypes"
    )]
    pub name: Option<String>,
    /// Directory the `.ts` file is written into.
    #[arg(
        long,
        short = 'p',
        help = "The directory to save the file into. Defaults to the current directory"
    )]
    pub path: Option<PathBuf>,
}

/// Run the generation command to completion and return the exit code.
pub async fn run(args: GenerateArgs) -> i32 {
    run_cli_async(|| run_inner(args)).await
}

/// Styled greeting shown before the interactive prompt sequence.
fn welcome_banner() -> String {
    style("Welcome to tygen 🧬").cyan().to_string()
}

async fn run_inner(args: GenerateArgs) -> Result<(), GenError> {
    let interactive = args.url.is_none();
    if interactive {
        println!("{}\n", welcome_banner());
    }
    let config = config::collect(&args, PromptDefaults::from_host)?;

    let client = sampler::build_client()?;
    let start = Instant::now();
    let sp = spinner("🚀 Fetching API data...");
    let result = async {
        let body = sampler::fetch_body(&client, &config.url).await?;
        sp.set_message("📦 Parsing response...");
        let payload = sampler::parse_payload(&body)?;
        let sample = sampler::extract_sample(payload)?;
        sp.set_message("🧬 Generating TypeScript types...");
        synthesize(&sample, &config.type_name)
    }
    .await;
    sp.finish_and_clear();
    let lines = result?;
    println!(
        "✓ Generated {} ({})",
        config.type_name,
        format_elapsed_ms(start)
    );

    let path = run_with_spinner("💾 Saving file...", "✓ File saved", || {
        write_artifact(&config.destination, &config.type_name, &lines)
    })?;

    println!();
    println!("📄 {}", path.display());
    let separator = style("----------------------------------------").dim();
    println!("{separator}");
    for line in &lines {
        println!("{line}");
    }
    println!("{separator}");

    if interactive {
        editor::offer_to_open(&VsCodeEditor, &path);
    }

    println!();
    println!("✨ Done! {} is ready to use.", config.type_name);
    Ok(())
}
