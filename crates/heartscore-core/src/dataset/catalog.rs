//! The loaded dataset and its memoizing catalog.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::derive::derive_records;
use super::record::{CountryRecord, GlobalMetrics};
use crate::error::{HeartError, Result};
use crate::sheet::{read_rows, RawRow};

/// A fully-derived dataset: the ordered record collection, the world
/// aggregates, and a case-insensitive name index. Read-only after
/// construction; the records sit behind an `Arc` so consumers can hold the
/// collection without copying it.
#[derive(Clone, Debug)]
pub struct Dataset {
    records: Arc<Vec<CountryRecord>>,
    globals: GlobalMetrics,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Derive a dataset from an already-read row stream.
    pub fn from_rows(rows: &[RawRow]) -> Result<Dataset> {
        let (records, globals) = derive_records(rows);
        if records.is_empty() {
            return Err(HeartError::EmptySheet);
        }
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            // Names are unique per dataset; keep the first on a collision.
            index.entry(record.country.to_lowercase()).or_insert(pos);
        }
        Ok(Dataset { records: Arc::new(records), globals, index })
    }

    /// Records in source order, aggregate row excluded.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// A shareable handle to the record collection.
    pub fn shared_records(&self) -> Arc<Vec<CountryRecord>> {
        Arc::clone(&self.records)
    }

    pub fn global_metrics(&self) -> GlobalMetrics {
        self.globals
    }

    /// Look a country up by name, case-insensitively. Exact match only.
    pub fn lookup(&self, name: &str) -> Option<&CountryRecord> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&pos| &self.records[pos])
    }

    /// All country names, sorted.
    pub fn country_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.iter().map(|r| r.country.clone()).collect();
        names.sort();
        names
    }
}

/// Owns the source path and the at-most-once parse of it.
///
/// The cache is populated on first use and never written again; invalidation
/// drops it wholesale so the next access re-reads the file.
pub struct Catalog {
    source: PathBuf,
    cache: Option<Dataset>,
}

impl Catalog {
    /// Create a catalog for a data file. Side-effect free: nothing is read
    /// until [`Catalog::get_or_load`].
    pub fn new(source: impl Into<PathBuf>) -> Catalog {
        Catalog { source: source.into(), cache: None }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.is_some()
    }

    /// Return the derived dataset, parsing the source on first call.
    ///
    /// A load failure leaves the catalog unloaded, so a later call retries
    /// rather than serving an empty dataset.
    pub fn get_or_load(&mut self) -> Result<&Dataset> {
        if self.cache.is_none() {
            let rows = read_rows(&self.source)?;
            self.cache = Some(Dataset::from_rows(&rows)?);
        }
        // Populated just above; the borrow checker cannot see that.
        Ok(self.cache.as_ref().expect("cache populated above"))
    }

    /// Drop the cached dataset; the next access re-reads the source.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}
