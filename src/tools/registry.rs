//! Tool registry for managing MCP tool handlers.
//!
//! Provides a `ToolHandler` trait for implementing tools, a `DescribedTool`
//! that turns a [`ToolDescriptor`] plus a plain function into a handler, and
//! a `ToolRegistry` for registering and invoking them.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::Result;
use indexmap::IndexMap;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool as McpTool};
use tracing::{info, warn};

use super::descriptor::{ToolArgs, ToolDescriptor, ToolValue};
use super::ToolFailure;

/// Trait for handling MCP tool invocations.
///
/// Each tool implements this trait to define its schema and execution logic.
pub trait ToolHandler: Send + Sync {
    /// Returns the tool's name (e.g., "summarize_csv_file").
    fn name(&self) -> &str;

    /// Returns the tool's description.
    fn description(&self) -> &str;

    /// Returns the input schema for this tool.
    fn input_schema(&self) -> JsonObject;

    /// Returns the output schema for this tool (optional).
    fn output_schema(&self) -> Option<JsonObject> {
        None
    }

    /// Executes the tool with the given arguments.
    ///
    /// Tool-level failures come back as a `CallToolResult` with `is_error`
    /// set; `Err` is reserved for the handler itself breaking down.
    fn execute(
        &self,
        args: JsonObject,
    ) -> Pin<Box<dyn Future<Output = Result<CallToolResult>> + Send + '_>>;

    /// Converts this handler to an `McpTool` for use in `list_tools`.
    fn to_mcp_tool(&self) -> McpTool {
        let mut tool = McpTool::new(
            self.name().to_string(),
            self.description().to_string(),
            Arc::new(self.input_schema()),
        );
        tool.output_schema = self.output_schema().map(Arc::new);
        tool
    }
}

type ToolFn = dyn Fn(&ToolArgs) -> Result<ToolValue, ToolFailure> + Send + Sync;

/// A handler built from a descriptor and a synchronous function.
///
/// The function runs on the blocking pool so file I/O does not stall the
/// transport.
pub struct DescribedTool {
    descriptor: ToolDescriptor,
    run: Arc<ToolFn>,
}

impl DescribedTool {
    pub fn new<F>(descriptor: ToolDescriptor, run: F) -> Self
    where
        F: Fn(&ToolArgs) -> Result<ToolValue, ToolFailure> + Send + Sync + 'static,
    {
        Self {
            descriptor,
            run: Arc::new(run),
        }
    }
}

impl ToolHandler for DescribedTool {
    fn name(&self) -> &str {
        &self.descriptor.name
    }

    fn description(&self) -> &str {
        &self.descriptor.description
    }

    fn input_schema(&self) -> JsonObject {
        self.descriptor.input_schema()
    }

    fn output_schema(&self) -> Option<JsonObject> {
        Some(self.descriptor.output_schema())
    }

    fn execute(
        &self,
        args: JsonObject,
    ) -> Pin<Box<dyn Future<Output = Result<CallToolResult>> + Send + '_>> {
        let run = self.run.clone();
        let name = self.descriptor.name.clone();
        let args = ToolArgs::new(args);

        Box::pin(async move {
            let outcome = tokio::task::spawn_blocking(move || run(&args)).await?;

            Ok(match outcome {
                Ok(value) => value.into_call_result(),
                Err(failure) => {
                    warn!(tool = %name, "Tool invocation failed: {}", failure);
                    failure_result(&name, &failure)
                }
            })
        })
    }
}

/// Error result reported to the host for a failed invocation.
pub fn failure_result(tool_name: &str, failure: &ToolFailure) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!(
        "Error executing tool {}: {}",
        tool_name, failure
    ))])
}

/// Registry for managing tool handlers.
///
/// Tools are listed in registration order. Registering a name twice keeps
/// the original position but replaces the handler.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    handlers: IndexMap<String, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
        }
    }

    /// Register a tool handler, returning the handler it replaced, if any.
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) -> Option<Arc<dyn ToolHandler>> {
        let name = handler.name().to_string();
        let previous = self.handlers.insert(name.clone(), handler);
        if previous.is_some() {
            warn!(tool = %name, "Tool registered twice; replacing the earlier handler");
        } else {
            info!("Registered tool: {}", name);
        }
        previous
    }

    /// Register a tool handler from a type that implements `ToolHandler`.
    pub fn register_handler<T: ToolHandler + 'static>(&mut self, handler: T) {
        self.register(Arc::new(handler));
    }

    /// Get a tool handler by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.handlers.get(name).cloned()
    }

    /// List all registered tool names.
    pub fn list_names(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    /// Get all registered tools as `McpTool` instances for `list_tools`.
    pub fn list_tools(&self) -> Vec<McpTool> {
        self.handlers
            .values()
            .map(|handler| handler.to_mcp_tool())
            .collect()
    }

    /// Execute a tool by name with the given arguments.
    pub async fn call_tool(&self, name: &str, args: JsonObject) -> Result<CallToolResult> {
        let handler = self
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Tool not found: {}", name))?;
        handler.execute(args).await
    }

    /// Check if a tool with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Return the number of registered tools.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Return `true` if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
