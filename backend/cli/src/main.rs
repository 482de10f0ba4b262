mod config;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use uiscope_gateway::{ServerConfig, SnapshotServer};
use uiscope_host::StaticTreeProvider;

use config::Config;

#[derive(Parser)]
#[command(name = "uiscope")]
#[command(about = "uiscope — live UI hierarchy snapshots over HTTP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the snapshot server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind the HTTP server to
        #[arg(long)]
        bind: Option<String>,
        /// JSON fixture tree to serve in place of a live host
        #[arg(long)]
        tree: Option<String>,
    },
    /// Fetch the current snapshot from a running server and print it
    Fetch {
        /// Server port to query on localhost
        #[arg(short, long)]
        port: Option<u16>,
        /// Full endpoint URL, overriding --port
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind, tree } => {
            let mut config = config;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            if let Some(tree) = tree {
                config.tree_path = Some(tree);
            }
            run_server(config).await?;
        }
        Commands::Fetch { port, url } => {
            let url = url
                .unwrap_or_else(|| format!("http://localhost:{}/", port.unwrap_or(config.port)));
            let body: serde_json::Value = reqwest::get(&url).await?.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    let provider = match &config.tree_path {
        Some(path) => {
            info!(%path, "serving fixture tree");
            StaticTreeProvider::from_file(path)?
        }
        None => {
            warn!("no tree fixture configured, serving an empty hierarchy");
            StaticTreeProvider::empty()
        }
    };

    let server_config = ServerConfig {
        bind_address: config.bind_address.clone(),
        port: config.port,
        max_depth: config.max_depth,
    };
    let handle = SnapshotServer::new(server_config, Arc::new(provider))
        .start()
        .await?;

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    handle.stop().await
}
