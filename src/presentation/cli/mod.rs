pub mod completions;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use completions::{CompleteCommand, ScreenCommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Year-in-review feeds from a NeoDB shelf", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "YEARSHELF_URL",
        default_value = "http://localhost:9527"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// List items completed in one category
    Complete(CompleteCommand),

    /// List movies and TV completed, newest first
    Screen(ScreenCommand),
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// NeoDB API token, sent as a bearer token on every upstream request
    #[arg(long, env = "NEODB_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "NEODB_URL", default_value = crate::infrastructure::neodb::NEODB_URL)]
    pub upstream_url: String,

    #[arg(long, env = "YEARSHELF_BIND_ADDRESS", default_value = "127.0.0.1:9527")]
    pub bind_address: SocketAddr,

    /// Per-request timeout for upstream calls, in seconds
    #[arg(long, env = "YEARSHELF_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
