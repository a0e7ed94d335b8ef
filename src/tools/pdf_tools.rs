//! PDF tools: `read_pdf_file` for text content and `summarize_pdf_file` for
//! page count and metadata.
//!
//! Registration requires the data directory to exist. When it is missing at
//! startup the module is skipped and its tools stay unavailable for the life
//! of the process; the other modules still load.

use anyhow::{Context, Result};

use super::{DescribedTool, ParamSpec, ToolDescriptor, ToolRegistry, ToolValue, ValueKind};
use crate::reader::{self, DataDir};

const FILENAME_HELP: &str = "Name of the PDF file in the data directory (e.g., 'sample.pdf')";

/// Register the PDF tools against `data_dir`.
pub fn register(registry: &mut ToolRegistry, data_dir: &DataDir) -> Result<()> {
    data_dir
        .ensure_exists()
        .with_context(|| format!("data directory {} is unavailable", data_dir.root().display()))?;

    let content_dir = data_dir.clone();
    registry.register_handler(DescribedTool::new(
        ToolDescriptor::new(
            "read_pdf_file",
            "Read and extract text content from a PDF file. \
             Returns a string containing the PDF's text content with page separators.",
        )
        .param(ParamSpec::required("filename", ValueKind::String, FILENAME_HELP))
        .param(ParamSpec::optional(
            "page_limit",
            ValueKind::Integer,
            "Optional limit on number of pages to read (null for all pages)",
        )),
        move |args| {
            let filename = args.string("filename")?;
            let page_limit = args.optional_integer("page_limit")?;
            Ok(ToolValue::from(reader::read_pdf_content(
                &content_dir,
                filename,
                page_limit,
            )?))
        },
    ));

    let summary_dir = data_dir.clone();
    registry.register_handler(DescribedTool::new(
        ToolDescriptor::new(
            "summarize_pdf_file",
            "Summarize a PDF file by reporting its number of pages and metadata. \
             Returns a string describing the file's basic information.",
        )
        .param(ParamSpec::required("filename", ValueKind::String, FILENAME_HELP)),
        move |args| {
            let filename = args.string("filename")?;
            Ok(ToolValue::from(reader::read_pdf_summary(&summary_dir, filename)?))
        },
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::fixtures::build_pdf;
    use rmcp::model::{CallToolResult, JsonObject};
    use serde_json::{Value, json};

    fn registry_with_pdf(name: &str, bytes: &[u8]) -> (tempfile::TempDir, ToolRegistry) {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(name), bytes).unwrap();
        let mut registry = ToolRegistry::new();
        register(&mut registry, &DataDir::new(tmp.path())).unwrap();
        (tmp, registry)
    }

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn text_of(result: &CallToolResult) -> String {
        result.content[0].as_text().unwrap().text.clone()
    }

    #[tokio::test]
    async fn test_read_pdf_file_all_pages() {
        let pdf = build_pdf(&[Some("First page"), None, Some("Third page")], None);
        let (_tmp, registry) = registry_with_pdf("x.pdf", &pdf);

        let result = registry
            .call_tool("read_pdf_file", object(json!({ "filename": "x.pdf", "page_limit": null })))
            .await
            .unwrap();
        let text = text_of(&result);

        assert_eq!(result.is_error, Some(false));
        assert!(text.starts_with("PDF file 'x.pdf' contains 3 pages\n\n--- Page 1 ---\n"));
        assert!(text.contains("--- Page 3 ---"));
        assert!(!text.contains("--- Page 2 ---"));
    }

    #[tokio::test]
    async fn test_read_pdf_file_with_limit() {
        let pdf = build_pdf(&[Some("One"), Some("Two"), Some("Three")], None);
        let (_tmp, registry) = registry_with_pdf("x.pdf", &pdf);

        let result = registry
            .call_tool("read_pdf_file", object(json!({ "filename": "x.pdf", "page_limit": 1 })))
            .await
            .unwrap();

        assert!(text_of(&result).starts_with("PDF file 'x.pdf' contains 3 pages (showing first 1 pages)"));
    }

    #[tokio::test]
    async fn test_read_pdf_file_rejects_bad_limit() {
        let pdf = build_pdf(&[Some("One")], None);
        let (_tmp, registry) = registry_with_pdf("x.pdf", &pdf);

        let result = registry
            .call_tool("read_pdf_file", object(json!({ "filename": "x.pdf", "page_limit": "two" })))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("page_limit"));
    }

    #[tokio::test]
    async fn test_summarize_pdf_file() {
        let pdf = build_pdf(&[Some("A")], Some(("Handbook", "Ops Team")));
        let (_tmp, registry) = registry_with_pdf("h.pdf", &pdf);

        let result = registry
            .call_tool("summarize_pdf_file", object(json!({ "filename": "h.pdf" })))
            .await
            .unwrap();

        assert_eq!(
            text_of(&result),
            "PDF file 'h.pdf' has 1 pages. Title: Handbook, Author: Ops Team"
        );
    }

    #[tokio::test]
    async fn test_summarize_missing_pdf() {
        let (_tmp, registry) = registry_with_pdf("h.pdf", &build_pdf(&[None], None));

        let result = registry
            .call_tool("summarize_pdf_file", object(json!({ "filename": "nope.pdf" })))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Error executing tool summarize_pdf_file: PDF file 'nope.pdf' not found in data directory"
        );
    }
}
