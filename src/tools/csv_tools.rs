//! `summarize_csv_file`: row and column counts of a CSV in the data directory.
//!
//! Registration requires the data directory to exist. When it is missing at
//! startup the module is skipped and its tools stay unavailable for the life
//! of the process; the other modules still load.

use anyhow::{Context, Result};

use super::{DescribedTool, ParamSpec, ToolDescriptor, ToolRegistry, ToolValue, ValueKind};
use crate::reader::{self, DataDir};

/// Register the CSV tools against `data_dir`.
pub fn register(registry: &mut ToolRegistry, data_dir: &DataDir) -> Result<()> {
    data_dir
        .ensure_exists()
        .with_context(|| format!("data directory {} is unavailable", data_dir.root().display()))?;

    let data_dir = data_dir.clone();
    registry.register_handler(DescribedTool::new(
        ToolDescriptor::new(
            "summarize_csv_file",
            "Summarize a CSV file by reporting its number of rows and columns. \
             Returns a string describing the file's dimensions.",
        )
        .param(ParamSpec::required(
            "filename",
            ValueKind::String,
            "Name of the CSV file in the data directory (e.g., 'sample.csv')",
        )),
        move |args| {
            let filename = args.string("filename")?;
            Ok(ToolValue::from(reader::read_csv_summary(&data_dir, filename)?))
        },
    ));

    Ok(())
}
