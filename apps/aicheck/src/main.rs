use std::error::Error;

use clap::Parser;
use tracing::info;

mod cli;
mod payload;

use aicheck_core::{CheckConfigPatch, build_client, build_generate_content, log_usage, send};

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("aicheck failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let mut patch = CheckConfigPatch::from_env();
    patch.overlay(cli.into_patch());
    let config = patch.into_config()?;
    info!(base_url = %config.base_url, model = payload::MODEL, "config loaded");

    let request = payload::smoke_request();
    let upstream = build_generate_content(&config, &request)?;
    let client = build_client(config.proxy.as_deref())?;
    let response = send(&client, upstream).await?;

    println!("Status Code: {}", response.status);
    let body: serde_json::Value = serde_json::from_slice(&response.body)?;
    println!("Response: {body}");
    log_usage(&response.body);

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aicheck=info,aicheck_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
