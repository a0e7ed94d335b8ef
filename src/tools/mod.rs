//! Tool handler registry and the tool modules served by this crate.
//!
//! Each tool module exposes an explicit `register` function; nothing is
//! registered as a side effect of loading a module.

mod descriptor;
mod error;
mod registry;

pub use descriptor::{ParamSpec, ToolArgs, ToolDescriptor, ToolValue, ValueKind};
pub use error::ToolFailure;
pub use registry::{DescribedTool, ToolHandler, ToolRegistry, failure_result};

pub mod csv_tools;
pub mod math_tools;
pub mod parquet_tools;
pub mod pdf_tools;
