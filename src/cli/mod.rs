//! CLI interface for mal-mcp.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, BASE_URL_ENV};
use crate::error::MalError;
use crate::jikan::JikanClient;
use crate::mcp::{run_mcp_server, MalServer, ToolError};

/// MyAnimeList tools over MCP, backed by the Jikan API
#[derive(Parser)]
#[command(name = "mal-mcp", version, about, long_about = None)]
pub struct Cli {
    /// Jikan base URL, e.g. https://api.jikan.moe/v4
    #[arg(long, env = BASE_URL_ENV, global = true)]
    pub base_url: Option<String>,

    /// Append-only diagnostics log
    #[arg(
        long,
        env = "MAL_MCP_LOG_FILE",
        default_value = "mal_mcp_server.log",
        global = true
    )]
    pub log_file: PathBuf,

    /// Timeout for search, ranking and listing endpoints
    #[arg(
        long,
        env = "MAL_MCP_SEARCH_TIMEOUT_SECS",
        default_value = "120",
        global = true
    )]
    pub search_timeout_secs: u64,

    /// Timeout for ID-keyed lookups
    #[arg(
        long,
        env = "MAL_MCP_LOOKUP_TIMEOUT_SECS",
        default_value = "30",
        global = true
    )]
    pub lookup_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Commands {
    /// Start MCP server on stdio (default)
    Mcp,

    /// List available tools
    Tools,

    /// Invoke one tool and print its JSON result
    Call {
        /// Tool name, e.g. search_anime
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(default_value = "{}")]
        arguments: String,
    },
}

impl Cli {
    /// Resolve process configuration from flags and environment.
    pub fn config(&self) -> Result<Config, MalError> {
        Ok(Config::resolve(self.base_url.as_deref())?.with_timeouts(
            Duration::from_secs(self.search_timeout_secs),
            Duration::from_secs(self.lookup_timeout_secs),
        ))
    }

    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Mcp)
    }
}

/// Run the selected command. Configuration is resolved only by commands
/// that reach the upstream.
pub async fn execute(cli: &Cli) -> anyhow::Result<()> {
    match cli.command() {
        Commands::Mcp => run_mcp_server(cli.config()?).await?,

        Commands::Tools => {
            for tool in MalServer::tool_catalog() {
                let description = tool.description.as_deref().unwrap_or_default();
                println!("{:<22} {}", tool.name, description);
            }
        }

        Commands::Call { tool, arguments } => {
            let arguments: serde_json::Value = serde_json::from_str(&arguments)
                .map_err(|e| anyhow::anyhow!("Arguments must be a JSON object: {}", e))?;

            let server = MalServer::new(Arc::new(JikanClient::new(cli.config()?)?));
            match server.invoke(&tool, arguments).await {
                Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                Err(e) => {
                    let message = e.to_string();
                    println!("{}", serde_json::to_string_pretty(&ToolError::from(e))?);
                    anyhow::bail!("{} failed: {}", tool, message);
                }
            }
        }
    }

    Ok(())
}
