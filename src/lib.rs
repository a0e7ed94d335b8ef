mod config;
pub mod reader;
pub mod server;
pub mod tools;

pub use config::{DATA_DIR_ENV, DEFAULT_HTTP_BIND, ServerConfig, default_data_dir};
pub use reader::{DataDir, ReaderError};
pub use server::McpServer;
pub use tools::{ToolHandler, ToolRegistry};

use std::sync::Arc;
use anyhow::Result;
use tools::{csv_tools, math_tools, parquet_tools, pdf_tools};
use tracing::{error, info};

/// Build the tool registry by running every tool module's registration.
///
/// A module that fails to register is logged and skipped; the remaining
/// modules are still available.
pub fn build_registry(config: &ServerConfig) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    let data_dir = &config.data_dir;

    load_module(&mut registry, "csv_tools", |r| csv_tools::register(r, data_dir));
    load_module(&mut registry, "parquet_tools", |r| parquet_tools::register(r, data_dir));
    load_module(&mut registry, "pdf_tools", |r| pdf_tools::register(r, data_dir));
    load_module(&mut registry, "math_tools", math_tools::register);

    registry
}

fn load_module(
    registry: &mut ToolRegistry,
    module: &str,
    register: impl FnOnce(&mut ToolRegistry) -> Result<()>,
) {
    match register(registry) {
        Ok(()) => info!(module = module, "Loaded tool module"),
        Err(e) => error!(module = module, "Error loading tool module: {:#}", e),
    }
}

/// Convenience function to create a fully configured MCP server.
pub fn create_server(config: &ServerConfig) -> Arc<McpServer> {
    let registry = build_registry(config);
    info!(tools = registry.len(), "Tools registered. Starting server...");
    Arc::new(McpServer::new(Arc::new(registry)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_registry_registers_every_module() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = build_registry(&ServerConfig::new(tmp.path()));

        assert_eq!(registry.len(), 8);
        for name in ["summarize_csv_file", "summarize_parquet_file", "read_pdf_file", "add", "divide"] {
            assert!(registry.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_failed_module_does_not_abort_startup() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = build_registry(&ServerConfig::new(tmp.path().join("missing")));

        assert_eq!(
            registry.list_names(),
            vec!["add", "subtract", "multiply", "divide"]
        );
    }
}
