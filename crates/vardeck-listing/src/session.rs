//! Listing-session state: the shared inventory cache, per-product
//! expansion tracking, and batch-fetch de-duplication.
//!
//! A [`ListingSession`] is constructed once per product-listing view and
//! discarded when the user navigates away. All state lives behind one
//! lock; the lock is never held across an await. Missing SKUs are claimed
//! under the lock, the provider call runs unlocked, and the batch is
//! applied in a second critical section when it settles.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use vardeck_core::{InventoryRecord, ProductVariant};
use vardeck_inventory::{InventoryError, InventoryProvider};

use crate::cache::VariantInventoryCache;
use crate::expansion::ExpansionState;

#[derive(Default)]
struct SessionState {
    cache: VariantInventoryCache,
    /// SKUs with a batch fetch outstanding. A SKU in this set is never the
    /// subject of a second fetch until the first one settles.
    in_flight: HashSet<String>,
    expansion: HashMap<String, ExpansionState>,
}

/// State shared by every product row in one listing view.
///
/// Clones share the same underlying cache and expansion state, so a clone
/// can be handed to a spawned fetch task or a request handler.
pub struct ListingSession<P> {
    id: Uuid,
    provider: Arc<P>,
    state: Arc<RwLock<SessionState>>,
}

impl<P> Clone for ListingSession<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            provider: Arc::clone(&self.provider),
            state: Arc::clone(&self.state),
        }
    }
}

impl<P> fmt::Debug for ListingSession<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("ListingSession")
            .field("id", &self.id)
            .field("loaded_skus", &state.cache.len())
            .field("in_flight_skus", &state.in_flight.len())
            .finish_non_exhaustive()
    }
}

impl<P: InventoryProvider> ListingSession<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        let id = Uuid::new_v4();
        tracing::info!(session = %id, "listing session created");
        Self {
            id,
            provider: Arc::new(provider),
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Registers a product row so it carries an expansion state from first
    /// render. Products never registered read as collapsed anyway.
    pub fn register_product(&self, product_id: &str) {
        let mut state = self.state.write();
        state.expansion.entry(product_id.to_owned()).or_default();
    }

    #[must_use]
    pub fn expansion_state(&self, product_id: &str) -> ExpansionState {
        self.state
            .read()
            .expansion
            .get(product_id)
            .copied()
            .unwrap_or_default()
    }

    /// Flips a product's expansion state in response to a user toggle.
    ///
    /// Collapsing is immediate and never cancels an outstanding fetch; the
    /// fetch still lands in the cache, but a product collapsed mid-fetch
    /// stays collapsed. Expanding a product whose variants are all cached
    /// settles straight to `Expanded`; otherwise the row enters
    /// `Expanding` and the caller follows up with
    /// [`ensure_loaded`](Self::ensure_loaded).
    pub fn toggle_expansion(&self, product_id: &str, variant_skus: &[String]) -> ExpansionState {
        let mut state = self.state.write();
        let current = state
            .expansion
            .get(product_id)
            .copied()
            .unwrap_or_default();
        let next = match current {
            ExpansionState::Expanding | ExpansionState::Expanded => ExpansionState::Collapsed,
            ExpansionState::Collapsed => {
                if variant_skus.iter().all(|sku| state.cache.is_loaded(sku)) {
                    ExpansionState::Expanded
                } else {
                    ExpansionState::Expanding
                }
            }
        };
        state.expansion.insert(product_id.to_owned(), next);
        next
    }

    /// Loads inventory for a product's variants, fetching only SKUs that
    /// are neither cached nor already claimed by a concurrent expansion.
    ///
    /// When nothing needs fetching the expansion settles immediately with
    /// no provider call. Otherwise exactly one batch fetch is issued for
    /// the missing SKUs and its result is applied all at once. Requested
    /// SKUs the backend omits are recorded as authoritative absences.
    ///
    /// The product settles to `Expanded` whether the fetch succeeds or
    /// fails; on failure the row opens with placeholder stock instead of
    /// blocking the listing, and re-expanding later retries the same SKUs.
    ///
    /// # Errors
    ///
    /// Returns the provider error when the batch fetch fails. The cache is
    /// not mutated in that case.
    pub async fn ensure_loaded(
        &self,
        product_id: &str,
        variant_skus: &[String],
    ) -> Result<(), InventoryError> {
        let to_fetch: Vec<String> = {
            let mut state = self.state.write();
            let mut to_fetch = Vec::new();
            for sku in variant_skus {
                if state.cache.is_loaded(sku) || state.in_flight.contains(sku) {
                    continue;
                }
                state.in_flight.insert(sku.clone());
                to_fetch.push(sku.clone());
            }
            if to_fetch.is_empty() {
                Self::settle_expansion(&mut state, product_id);
                return Ok(());
            }
            to_fetch
        };

        tracing::debug!(
            session = %self.id,
            product = product_id,
            missing = to_fetch.len(),
            "fetching inventory for expanding product"
        );

        let result = self.provider.fetch_batch(&to_fetch).await;

        let mut state = self.state.write();
        for sku in &to_fetch {
            state.in_flight.remove(sku);
        }
        match result {
            Ok(records) => {
                let resolved = records.len();
                state.cache.apply_batch(&to_fetch, records);
                Self::settle_expansion(&mut state, product_id);
                drop(state);
                tracing::debug!(
                    session = %self.id,
                    product = product_id,
                    requested = to_fetch.len(),
                    resolved,
                    "inventory batch applied"
                );
                Ok(())
            }
            Err(e) => {
                Self::settle_expansion(&mut state, product_id);
                drop(state);
                tracing::warn!(
                    session = %self.id,
                    product = product_id,
                    error = %e,
                    "inventory batch fetch failed; row opens with placeholder stock"
                );
                Err(e)
            }
        }
    }

    /// Upgrades a product from `Expanding` to `Expanded`. A product the
    /// user collapsed while its fetch was outstanding stays collapsed.
    fn settle_expansion(state: &mut SessionState, product_id: &str) {
        if state.expansion.get(product_id).copied() == Some(ExpansionState::Expanding) {
            state
                .expansion
                .insert(product_id.to_owned(), ExpansionState::Expanded);
        }
    }

    // -----------------------------------------------------------------------
    // Cache reads
    // -----------------------------------------------------------------------

    /// Sum of available stock across a product's variants; unfetched SKUs
    /// count as zero.
    #[must_use]
    pub fn total_stock(&self, variants: &[ProductVariant]) -> u64 {
        self.state.read().cache.total_stock(variants)
    }

    /// True once every persisted SKU among `variants` has a settled fetch.
    #[must_use]
    pub fn is_fully_loaded(&self, variants: &[ProductVariant]) -> bool {
        self.state.read().cache.is_fully_loaded(variants)
    }

    /// Reserved quantity for `sku`, zero when absent or unfetched.
    #[must_use]
    pub fn reserved_count(&self, sku: &str) -> u32 {
        self.state.read().cache.reserved_count(sku)
    }

    /// The cached record for `sku`, if the backend returned one.
    #[must_use]
    pub fn record(&self, sku: &str) -> Option<InventoryRecord> {
        self.state.read().cache.record(sku).cloned()
    }

    #[must_use]
    pub fn loaded_sku_count(&self) -> usize {
        self.state.read().cache.len()
    }

    #[must_use]
    pub fn in_flight_sku_count(&self) -> usize {
        self.state.read().in_flight.len()
    }

    // -----------------------------------------------------------------------
    // Invalidation
    // -----------------------------------------------------------------------

    /// Drops the cached entries for `skus`. Expansion states and in-flight
    /// markers are untouched; the next `ensure_loaded` refetches them.
    pub fn invalidate(&self, skus: &[String]) {
        self.state.write().cache.invalidate(skus);
    }

    /// Drops every cached entry in the session.
    pub fn invalidate_all(&self) {
        self.state.write().cache.invalidate_all();
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
