pub mod cache;
pub mod expansion;
pub mod session;

pub use cache::{CacheEntry, VariantInventoryCache};
pub use expansion::ExpansionState;
pub use session::ListingSession;
