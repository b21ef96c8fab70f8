//! Error types for heartscore-core.
//!
//! Only source-level failures surface as errors: a missing or unreadable
//! data file aborts the load. Malformed cells and degenerate inputs are
//! absorbed by the coercion layer and never reach this enum.

use thiserror::Error;

/// Errors that can occur while loading a HEART dataset.
#[derive(Error, Debug)]
pub enum HeartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Sheet has no data rows")]
    EmptySheet,

    #[error("Unsupported data file format: {0:?}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, HeartError>;
