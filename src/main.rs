use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use yearshelf::application::{ServerConfig, serve};
use yearshelf::infrastructure::client::YearshelfClient;
use yearshelf::presentation::cli::{Cli, Commands, ServeCommand, completions};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(cmd) => run_server(cmd).await,
        Commands::Complete(cmd) => {
            let client = YearshelfClient::from_base_url(&cli.api_url)?;
            completions::complete(&client, cmd).await
        }
        Commands::Screen(cmd) => {
            let client = YearshelfClient::from_base_url(&cli.api_url)?;
            completions::screen(&client, cmd).await
        }
    }
}

async fn run_server(command: ServeCommand) -> Result<()> {
    let config = ServerConfig {
        bind_address: command.bind_address,
        upstream_url: command.upstream_url,
        api_key: command.api_key,
        request_timeout: Duration::from_secs(command.request_timeout_secs),
    };

    serve(config).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
