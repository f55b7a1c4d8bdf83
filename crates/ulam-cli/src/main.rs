//! Ulam spiral renderer binary.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ulam_render::RenderConfig;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ulam=info,ulam_render=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RenderConfig::default(),
    };
    let config = cli.apply(base);

    tracing::info!(output = %cli.output.display(), "starting render");
    let frames = ulam_render::render_to_file(config, &cli.output)
        .with_context(|| format!("failed to render {}", cli.output.display()))?;

    tracing::info!(frames, "done");
    Ok(())
}
