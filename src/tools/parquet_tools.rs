//! `summarize_parquet_file`: row and column counts of a Parquet file.
//!
//! Registration requires the data directory to exist. When it is missing at
//! startup the module is skipped and its tools stay unavailable for the life
//! of the process; the other modules still load.

use anyhow::{Context, Result};

use super::{DescribedTool, ParamSpec, ToolDescriptor, ToolRegistry, ToolValue, ValueKind};
use crate::reader::{self, DataDir};

/// Register the Parquet tools against `data_dir`.
pub fn register(registry: &mut ToolRegistry, data_dir: &DataDir) -> Result<()> {
    data_dir
        .ensure_exists()
        .with_context(|| format!("data directory {} is unavailable", data_dir.root().display()))?;

    let data_dir = data_dir.clone();
    registry.register_handler(DescribedTool::new(
        ToolDescriptor::new(
            "summarize_parquet_file",
            "Summarize a Parquet file by reporting its number of rows and columns. \
             Returns a string describing the file's dimensions.",
        )
        .param(ParamSpec::required(
            "filename",
            ValueKind::String,
            "Name of the Parquet file in the data directory (e.g., 'sample.parquet')",
        )),
        move |args| {
            let filename = args.string("filename")?;
            Ok(ToolValue::from(reader::read_parquet_summary(&data_dir, filename)?))
        },
    ));

    Ok(())
}
