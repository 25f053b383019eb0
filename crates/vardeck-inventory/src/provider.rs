//! Seam between listing-session logic and whatever supplies inventory data.

use std::collections::HashMap;
use std::future::Future;

use vardeck_core::InventoryRecord;

use crate::error::InventoryError;

/// Batch source of inventory records.
///
/// Implemented by [`crate::HttpInventoryClient`] against the BFF endpoint
/// and by scripted providers in session tests. A successful fetch resolves
/// every requested SKU it can: SKUs without a backend record are simply
/// absent from the returned map, which callers treat as authoritative
/// absence rather than as failure.
pub trait InventoryProvider {
    /// Fetches records for `skus`, keyed by SKU.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError`] when the underlying source fails as a
    /// whole; implementations must not return partial results on failure.
    fn fetch_batch(
        &self,
        skus: &[String],
    ) -> impl Future<Output = Result<HashMap<String, InventoryRecord>, InventoryError>> + Send;
}
