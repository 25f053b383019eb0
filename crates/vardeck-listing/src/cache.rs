//! Variant inventory cache keyed by SKU, plus the aggregations derived
//! from it.
//!
//! The cache distinguishes three situations per SKU:
//!
//! - no entry: the SKU has never been fetched (or was invalidated),
//! - [`CacheEntry::NoRecord`]: a fetch completed and the backend reported
//!   no inventory record for the SKU,
//! - [`CacheEntry::Record`]: a fetch completed with a record.
//!
//! The distinction matters for completeness: a SKU the backend does not
//! know about still counts as loaded, it just aggregates as zero stock.

use std::collections::HashMap;

use vardeck_core::{InventoryRecord, ProductVariant};

/// Outcome of the most recent fetch for a single SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    /// The backend returned an inventory record.
    Record(InventoryRecord),
    /// The backend completed the fetch but had no record for the SKU.
    NoRecord,
}

/// In-memory inventory cache for one listing session.
///
/// Entries are replaced wholesale when a batch lands; there is no partial
/// merge of individual fields.
#[derive(Debug, Default)]
pub struct VariantInventoryCache {
    entries: HashMap<String, CacheEntry>,
}

impl VariantInventoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a fetch has settled for `sku`, even when the backend had
    /// no record for it.
    #[must_use]
    pub fn is_loaded(&self, sku: &str) -> bool {
        self.entries.contains_key(sku)
    }

    /// The cached record for `sku`, or `None` when the SKU is unfetched or
    /// the backend reported no record.
    #[must_use]
    pub fn record(&self, sku: &str) -> Option<&InventoryRecord> {
        match self.entries.get(sku) {
            Some(CacheEntry::Record(record)) => Some(record),
            Some(CacheEntry::NoRecord) | None => None,
        }
    }

    /// Applies a completed batch fetch.
    ///
    /// Every returned record is inserted as a whole-record replacement.
    /// Requested SKUs absent from the response are recorded as
    /// [`CacheEntry::NoRecord`]: the omission is authoritative, not a gap
    /// to retry.
    pub fn apply_batch(&mut self, requested: &[String], records: HashMap<String, InventoryRecord>) {
        for sku in requested {
            if !records.contains_key(sku) {
                self.entries.insert(sku.clone(), CacheEntry::NoRecord);
            }
        }
        for (sku, record) in records {
            self.entries.insert(sku, CacheEntry::Record(record));
        }
    }

    /// Drops the entries for `skus` so the next expansion refetches them.
    pub fn invalidate(&mut self, skus: &[String]) {
        for sku in skus {
            self.entries.remove(sku);
        }
    }

    /// Drops every entry.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Number of SKUs with a settled fetch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // -----------------------------------------------------------------------
    // Aggregations
    // -----------------------------------------------------------------------

    /// Sum of available stock across a product's variants.
    ///
    /// Variants without a persisted SKU and SKUs without a cached record
    /// contribute zero. An empty variant list sums to zero.
    #[must_use]
    pub fn total_stock(&self, variants: &[ProductVariant]) -> u64 {
        variants
            .iter()
            .filter_map(|v| v.sku.as_deref())
            .filter_map(|sku| self.record(sku))
            .map(|record| u64::from(record.quantity_available))
            .sum()
    }

    /// True once every persisted SKU among `variants` has a settled fetch.
    ///
    /// Variants without a SKU are ignored, so an all-unsaved (or empty)
    /// variant list counts as fully loaded.
    #[must_use]
    pub fn is_fully_loaded(&self, variants: &[ProductVariant]) -> bool {
        variants
            .iter()
            .filter_map(|v| v.sku.as_deref())
            .all(|sku| self.is_loaded(sku))
    }

    /// Reserved quantity for `sku`, zero when absent or unfetched.
    #[must_use]
    pub fn reserved_count(&self, sku: &str) -> u32 {
        self.record(sku).map_or(0, |record| record.quantity_reserved)
    }
}
