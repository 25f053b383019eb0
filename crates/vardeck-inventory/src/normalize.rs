//! Normalization from batch-endpoint wire records to
//! [`vardeck_core::InventoryRecord`].
//!
//! The wire format keys records by SKU and leaves `reorderPoint` and
//! `updatedAt` optional; normalization attaches the key as the record's SKU
//! and defaults an absent reorder point to `0` (not tracked).

use std::collections::HashMap;

use vardeck_core::InventoryRecord;

use crate::types::{BatchInventoryResponse, InventoryRecordWire};

/// Converts one wire record into a domain record under the SKU the response
/// keyed it by.
#[must_use]
pub fn normalize_record(sku: &str, wire: InventoryRecordWire) -> InventoryRecord {
    InventoryRecord {
        sku: sku.to_owned(),
        quantity_available: wire.quantity_available,
        quantity_reserved: wire.quantity_reserved,
        reorder_point: wire.reorder_point.unwrap_or(0),
        updated_at: wire.updated_at,
    }
}

/// Converts a whole batch response into domain records keyed by SKU.
///
/// Entries under an empty key are dropped; they cannot correspond to any
/// requested SKU.
#[must_use]
pub fn normalize_response(response: BatchInventoryResponse) -> HashMap<String, InventoryRecord> {
    response
        .records
        .into_iter()
        .filter(|(sku, _)| !sku.is_empty())
        .map(|(sku, wire)| {
            let record = normalize_record(&sku, wire);
            (sku, record)
        })
        .collect()
}
