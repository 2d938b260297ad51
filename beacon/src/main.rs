#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod report;

use args::Args;
use beacon_config::Config;
use clap::Parser;
use http::StatusCode;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Initialize logging
    beacon_telemetry::init(&config.telemetry)?;

    let status = StatusCode::from_u16(args.status)
        .map_err(|e| anyhow::anyhow!("invalid status code {}: {e}", args.status))?;

    let body = match (&args.body, &args.body_file) {
        (Some(body), _) => body.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read body file {}: {e}", path.display()))?,
        (None, None) => String::new(),
    };

    let subsystem = args
        .subsystem
        .map_or(config.classify.subsystem, Into::into);

    tracing::debug!(%subsystem, status = status.as_u16(), body_len = body.len(), "classifying response");

    let report = report::classify(subsystem, status, &body);

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
