mod cli;
mod config;
mod diff;
mod repo;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use config::Opts;
use console::style;
use lazy_static::lazy_static;
use types::Response;

// Initialize writer
lazy_static! {
    static ref WRITER: cli::Writer = cli::Writer::new();
}

/// Exit codes:
/// 1 => program screwed up
#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = try_main().await {
        error!("{}", err.to_string());
        err.chain().skip(1).for_each(|cause| {
            due_to!("{}", cause);
        });
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let opts = Opts::parse();

    info!(
        "Comparing branches {} and {}...",
        style(&opts.branch1).green(),
        style(&opts.branch2).green()
    );

    msg!("Requesting package lists from {}", &opts.api_base);
    let (first, second) =
        repo::fetch_branches(&opts.api_base, &opts.branch1, &opts.branch2).await?;
    msg!(
        "Received {} + {} package records",
        first.len(),
        second.len()
    );

    let result = diff::diff(&first, &second).context("Failed to compare package lists")?;
    success!(
        "Comparison finished: {} only in {}, {} only in {}, {} newer in {}",
        result.only_in_first.len(),
        &opts.branch1,
        result.only_in_second.len(),
        &opts.branch2,
        result.newer_in_second.len(),
        &opts.branch2
    );

    let response = Response::new(result);
    if let Some(dir) = &opts.write {
        let path = dir.join(format!("{}-{}.json", &opts.branch1, &opts.branch2));
        let data = serde_json::to_string_pretty(&response)?;
        std::fs::write(&path, data)
            .with_context(|| format!("Failed to write result to {}", path.display()))?;
        info!("Result written to {}", style(path.display()).magenta());
    }
    if opts.console {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
