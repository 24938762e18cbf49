//! mal-mcp - MyAnimeList tools for MCP hosts
//!
//! Usage:
//!   mal-mcp                              Start MCP server on stdio
//!   mal-mcp tools                        List available tools
//!   mal-mcp call search_anime '{"query": "frieren"}'
//!   mal-mcp --help                       Show all options

use anyhow::Result;
use clap::Parser;

use mal_mcp::cli::{execute, Cli};
use mal_mcp::init::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_file)?;

    execute(&cli)
        .await
        .inspect_err(|e| tracing::error!("{:#}", e))
}
