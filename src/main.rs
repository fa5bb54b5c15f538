mod bio;
mod config;
mod error;
mod message;
mod pipeline;
mod players;
mod publish;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bio::HttpTransport;
use config::Config;
use pipeline::Pipeline;
use publish::{DryRunPublisher, Publisher, XClient};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        dataset = %config.dataset_path.display(),
        policy = ?config.failure_policy,
        dry_run = config.dry_run,
        "Starting run"
    );

    let transport = HttpTransport::new(&config.user_agent, config.http_timeout)?;
    let publisher: Box<dyn Publisher> = if config.dry_run {
        Box::new(DryRunPublisher)
    } else {
        Box::new(XClient::from_config(&config)?)
    };

    let pipeline = Pipeline::new(&config, &transport, publisher.as_ref());
    let report = pipeline
        .run(&mut rand::thread_rng())
        .context("Run aborted")?;

    if let Some(profile) = &report.profile {
        info!(
            player = %profile.full_name(),
            post_id = report.post_id.as_ref().map(|p| p.0.as_str()).unwrap_or("none"),
            image = report.artifact.is_some(),
            chars = report.text.as_deref().map(|t| t.chars().count()).unwrap_or(0),
            "Run summary"
        );
    }

    if report.failures.is_empty() {
        info!("Run finished");
    } else {
        warn!(failed_stages = report.failures.len(), "Run finished with failures");
    }

    Ok(())
}
