//! File readers backing the data tools.
//!
//! Each reader resolves a filename against the [`DataDir`] and turns the file
//! into a short descriptive string. Format handling is delegated to `csv`,
//! `parquet` and `lopdf`.

mod data_dir;
mod error;
mod pdf;
mod tabular;

pub use data_dir::DataDir;
pub use error::ReaderError;
pub use pdf::{read_pdf_content, read_pdf_summary};
pub use tabular::{read_csv_summary, read_parquet_summary};

#[cfg(test)]
pub(crate) use pdf::fixtures;
