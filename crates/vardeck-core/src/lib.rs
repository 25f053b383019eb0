use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod inventory;
pub mod sku;
pub mod variant;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use inventory::{stock_status, InventoryRecord, StockStatus, LOW_STOCK_THRESHOLD};
pub use sku::generate_sku;
pub use variant::{build_variant_previews, ProductVariant, VariantPreview};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
