//! PDF text extraction and metadata summaries.

use std::path::{Path, PathBuf};

use lopdf::{Dictionary, Document, Object};

use super::{DataDir, ReaderError};

const UNKNOWN: &str = "Unknown";

/// Read the text of a PDF, optionally limited to the first `page_limit` pages.
///
/// The result starts with a header line describing the page count, followed
/// by one `--- Page <n> ---` block per page that has extractable text. Pages
/// without text are still counted but get no block.
pub fn read_pdf_content(
    data_dir: &DataDir,
    filename: &str,
    page_limit: Option<i64>,
) -> Result<String, ReaderError> {
    let path = existing_pdf(data_dir, filename)?;
    let doc = load(&path, filename)?;

    let num_pages = doc.get_pages().len() as i64;
    let pages_to_read = match page_limit {
        Some(limit) => limit.min(num_pages),
        None => num_pages,
    };

    let mut blocks = Vec::new();
    for page_number in 1..=pages_to_read.max(0) {
        let text = doc
            .extract_text(&[page_number as u32])
            .map_err(|e| pdf_error(filename, e))?;
        if !text.trim().is_empty() {
            // lopdf terminates every page's text with a newline
            let text = text.strip_suffix('\n').unwrap_or(&text);
            blocks.push(format!("--- Page {} ---\n{}", page_number, text));
        }
    }

    let mut header = format!("PDF file '{}' contains {} pages", filename, num_pages);
    if matches!(page_limit, Some(limit) if limit < num_pages) {
        header.push_str(&format!(" (showing first {} pages)", pages_to_read));
    }

    Ok(format!("{}\n\n{}", header, blocks.join("\n\n")))
}

/// Summarize a PDF by its page count and its Title/Author metadata.
pub fn read_pdf_summary(data_dir: &DataDir, filename: &str) -> Result<String, ReaderError> {
    let path = existing_pdf(data_dir, filename)?;
    let doc = load(&path, filename)?;

    let num_pages = doc.get_pages().len();
    let info = info_dictionary(&doc);
    let title = info
        .and_then(|dict| info_entry(&doc, dict, b"Title"))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let author = info
        .and_then(|dict| info_entry(&doc, dict, b"Author"))
        .unwrap_or_else(|| UNKNOWN.to_string());

    Ok(format!(
        "PDF file '{}' has {} pages. Title: {}, Author: {}",
        filename, num_pages, title, author
    ))
}

fn existing_pdf(data_dir: &DataDir, filename: &str) -> Result<PathBuf, ReaderError> {
    let path = data_dir.resolve(filename)?;
    if !path.exists() {
        return Err(ReaderError::NotFound(filename.to_string()));
    }
    Ok(path)
}

fn load(path: &Path, filename: &str) -> Result<Document, ReaderError> {
    Document::load(path).map_err(|e| pdf_error(filename, e))
}

fn pdf_error(filename: &str, err: lopdf::Error) -> ReaderError {
    ReaderError::Pdf {
        filename: filename.to_string(),
        message: err.to_string(),
    }
}

/// The trailer's `/Info` dictionary, if the document has one.
fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn info_entry(doc: &Document, info: &Dictionary, key: &[u8]) -> Option<String> {
    let value = match info.get(key).ok()? {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };

    match value {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// Decode a PDF text string.
///
/// UTF-16BE and UTF-8 strings carry a byte order mark; anything else is
/// PDFDocEncoding, which agrees with Latin-1 for printable text.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    if let Some(utf8) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(utf8).into_owned();
    }
    bytes.iter().map(|&b| b as char).collect()
}
