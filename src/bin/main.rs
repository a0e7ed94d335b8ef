use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::model::JsonObject;
use tracing::info;
use tracing_subscriber::EnvFilter;
use data_tools_mcp::{DATA_DIR_ENV, DEFAULT_HTTP_BIND, ServerConfig, build_registry, create_server};

// rmcp imports for MCP stdio server mode
use rmcp::service::ServiceExt;
use rmcp::transport::stdio;

#[derive(Parser)]
#[command(name = "data-tools-mcp")]
#[command(about = "MCP server for CSV, Parquet and PDF summaries plus integer arithmetic")]
struct Cli {
    /// Directory that filename arguments are resolved against
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as an MCP stdio server (the default)
    McpStdio,
    /// Run as an MCP Streamable HTTP server
    McpHttp {
        /// Bind address, e.g. 0.0.0.0:8000
        #[arg(long, default_value = DEFAULT_HTTP_BIND)]
        bind: String,
    },
    /// Print the registered tools and their input schemas
    ListTools,
    /// Invoke a single tool and print its result
    Call {
        /// Tool name, e.g. `summarize_csv_file`
        name: String,
        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the stdio transport, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("data_tools_mcp=info".parse()?)
                .add_directive("rmcp=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::resolve(cli.data_dir);
    info!("Using data directory {}", config.data_dir.root().display());

    match cli.command.unwrap_or(Commands::McpStdio) {
        Commands::McpStdio => {
            let server = create_server(&config);

            let service = server
                .as_ref()
                .clone()
                .serve(stdio())
                .await
                .inspect_err(|e| tracing::error!("serving error: {:?}", e))?;

            // Block until the MCP session ends.
            service
                .waiting()
                .await
                .inspect_err(|e| tracing::error!("MCP server crashed: {:?}", e))?;
            info!("MCP stdio server session ended");
        }
        Commands::McpHttp { bind } => {
            let server = create_server(&config);
            data_tools_mcp::server::start_mcp_http(server, &bind)
                .await
                .inspect_err(|e| tracing::error!("MCP server crashed: {:#}", e))?;
        }
        Commands::ListTools => {
            let registry = build_registry(&config);

            for tool in registry.list_tools() {
                println!("{}", tool.name);
                if let Some(description) = &tool.description {
                    println!("    {}", description);
                }
                println!("    input: {}", serde_json::to_string(tool.input_schema.as_ref())?);
                println!();
            }
        }
        Commands::Call { name, args } => {
            let registry = build_registry(&config);
            let args: JsonObject =
                serde_json::from_str(&args).context("--args must be a JSON object")?;

            if !registry.contains(&name) {
                anyhow::bail!("Unknown tool: {}", name);
            }

            let result = registry.call_tool(&name, args).await?;
            for content in &result.content {
                if let Some(text) = content.as_text() {
                    println!("{}", text.text);
                }
            }

            if result.is_error == Some(true) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
