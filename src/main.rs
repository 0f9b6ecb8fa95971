// Entry point of the job moderation tool.
//
// **Architecture Overview:**
// - `core/` = Moderation logic (notifier, API client, moderation actions)
// - `infra/` = Implementations of core traits (reqwest transport, surfaces)
// - `cli/` = Command-line adapter (argument parsing, running a batch)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Run the requested command and report the result

#[path = "cli/cli_layer.rs"]
mod cli;
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use crate::cli::{commands, Args};
use crate::core::api::ApiClient;
use crate::core::moderation::{Messages, ModerationService};
use crate::core::notifications::Notifier;
use crate::infra::http::ReqwestTransport;
use crate::infra::surface::{ConsoleSurface, InMemorySurface};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env first so clap's env fallbacks can see it
    dotenv::dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr; stdout is where the toasts are printed
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(base_url = %args.base_url, "Starting job moderation");

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let transport = ReqwestTransport::new().context("Failed to create HTTP client")?;
    let api = ApiClient::new(transport).with_base_url(args.base_url.clone());

    let surface = Arc::new(ConsoleSurface::new(InMemorySurface::new()));
    let notifier = Notifier::new(surface);

    let messages = Messages::for_language(args.lang.into());
    let service = Arc::new(ModerationService::new(api, notifier, messages));

    // ========================================================================
    // RUN
    // ========================================================================

    let summary = commands::run(service, &args.command).await;

    tracing::info!(
        applied = summary.applied,
        declined = summary.declined,
        unreachable = summary.unreachable,
        failed = summary.failed.len(),
        "Moderation finished"
    );

    if !summary.failed.is_empty() {
        let ids: Vec<String> = summary.failed.iter().map(|id| id.to_string()).collect();
        anyhow::bail!("Jobs missing from the page: {}", ids.join(", "));
    }

    Ok(())
}
