//! heartscore-core - Dataset model, sheet ingestion, and the record catalog.

pub mod dataset;
pub mod error;
pub mod sheet;

pub use dataset::{Catalog, CountryRecord, Dataset, GlobalMetrics};
pub use error::{HeartError, Result};

pub use heartscore_engine::score::RawValue;
