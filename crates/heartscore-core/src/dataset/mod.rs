//! Dataset derivation and the memoized catalog.

mod catalog;
mod derive;
mod record;

pub use catalog::{Catalog, Dataset};
pub use derive::{derive_records, global_metrics, WORLD_SENTINEL};
pub use record::{CountryRecord, GlobalMetrics};
