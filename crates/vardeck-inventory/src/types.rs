//! Wire types for the BFF's batch inventory endpoint.
//!
//! ## Observed shape from `POST /api/inventory/batch`
//!
//! ### Omitted SKUs
//! SKUs with no inventory record are omitted from `records` entirely rather
//! than returned as zeroed entries. Omission is authoritative: the SKU has no
//! record, and callers fold it into the cache as a loaded no-record entry
//! instead of leaving it missing.
//!
//! ### `reorderPoint`
//! Absent for SKUs nobody has configured restocking for. Normalization
//! defaults it to `0`, which `needs_reorder` treats as "not tracked".
//!
//! ### `updatedAt`
//! RFC 3339 timestamp of the last backend write. Observed absent for records
//! created by bulk imports, so it stays optional end to end.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/inventory/batch`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchInventoryRequest {
    pub skus: Vec<String>,
}

/// Top-level response from the batch endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchInventoryResponse {
    /// Records keyed by SKU. Requested SKUs without a record are omitted.
    pub records: HashMap<String, InventoryRecordWire>,
}

/// One inventory record as the service returns it. The SKU lives in the
/// response map key, not in the record body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecordWire {
    pub quantity_available: u32,

    pub quantity_reserved: u32,

    /// Restock threshold. Absent when nobody configured one for this SKU.
    #[serde(default)]
    pub reorder_point: Option<u32>,

    /// Last backend write. Absent on bulk-imported records.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
