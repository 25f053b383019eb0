use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// First quantity classified as in stock. Quantities above zero but below
/// this threshold classify as low. Display policy only; the backend has no
/// equivalent field.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Point-in-time inventory for one SKU, owned by the inventory service.
///
/// The console only ever reads these; a refetch replaces the whole record
/// rather than merging fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub sku: String,
    pub quantity_available: u32,
    pub quantity_reserved: u32,
    /// Threshold at or below which restocking is recommended. `0` when the
    /// backend does not track one for this SKU.
    pub reorder_point: u32,
    /// Backend-reported last update. Absent for records the service has
    /// never written to.
    pub updated_at: Option<DateTime<Utc>>,
}

impl InventoryRecord {
    /// Display classification of this record's available quantity.
    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        stock_status(self.quantity_available)
    }

    /// Returns `true` when available stock has fallen to the reorder point.
    ///
    /// Records without a tracked reorder point (`reorder_point == 0`) never
    /// flag, so SKUs the backend omits the field for do not light up the
    /// whole listing.
    #[must_use]
    pub fn needs_reorder(&self) -> bool {
        self.reorder_point > 0 && self.quantity_available <= self.reorder_point
    }
}

/// Three-way display classification of an available quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    Low,
    InStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::OutOfStock => write!(f, "out_of_stock"),
            StockStatus::Low => write!(f, "low"),
            StockStatus::InStock => write!(f, "in_stock"),
        }
    }
}

/// Classifies an available quantity: zero is out of stock, anything below
/// [`LOW_STOCK_THRESHOLD`] is low, the rest is in stock.
#[must_use]
pub fn stock_status(quantity_available: u32) -> StockStatus {
    if quantity_available == 0 {
        StockStatus::OutOfStock
    } else if quantity_available < LOW_STOCK_THRESHOLD {
        StockStatus::Low
    } else {
        StockStatus::InStock
    }
}
