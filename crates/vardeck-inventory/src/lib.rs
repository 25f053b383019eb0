pub mod client;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod retry;
pub mod types;

pub use client::HttpInventoryClient;
pub use error::InventoryError;
pub use normalize::{normalize_record, normalize_response};
pub use provider::InventoryProvider;
pub use types::{BatchInventoryRequest, BatchInventoryResponse, InventoryRecordWire};
