use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zen_news::config::Config;
use zen_news::pipeline::Pipeline;
use zen_news::routes::{self, AppState};

#[derive(Parser)]
#[command(name = "zen-news", about = "Collects news feeds into a ranked JSON snapshot")]
struct Cli {
    /// Source configuration file
    #[arg(long, default_value = "sources.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run one collection and write the snapshots (default)
    Collect,
    /// Serve the snapshot documents over HTTP
    Serve {
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zen_news=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load_or_default(&cli.config)?;
    info!("Loaded {} sources from configuration", config.sources.len());

    match cli.command.unwrap_or(Command::Collect) {
        Command::Collect => {
            let pipeline = Pipeline::from_config(config)?;
            if let Err(e) = pipeline.run().await {
                tracing::error!("Collection failed: {:#}", e);
                return Err(e);
            }
        }
        Command::Serve { addr } => {
            let state = Arc::new(AppState {
                data_dir: config.output_dir.clone(),
            });
            let app = routes::router(state);

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("Serving snapshots from {} on http://{}", config.output_dir.display(), addr);

            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
