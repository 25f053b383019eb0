use serde::{Deserialize, Serialize};

use crate::sku::generate_sku;

/// A color/size variant of a product as edited on the product-creation screen
/// and rendered on the listing screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Backend-assigned SKU. Absent while the variant only exists in the
    /// creation form; present once the product has been persisted.
    pub sku: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    /// Stock count entered at creation time; the inventory service owns the
    /// live number afterwards.
    pub initial_stock: u32,
}

impl ProductVariant {
    /// Returns `true` when the variant has at least one distinguishing axis.
    ///
    /// The creation form normalizes empty inputs to `None` before a variant
    /// is constructed, so presence of the `Option` is the whole check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.color.is_some() || self.size.is_some()
    }

    /// SKU preview for this variant's color/size under `product_name`.
    #[must_use]
    pub fn preview_sku(&self, product_name: &str) -> String {
        generate_sku(product_name, self.color.as_deref(), self.size.as_deref())
    }
}

/// One row of the variant preview matrix on the creation screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPreview {
    pub sku: String,
    pub color: Option<String>,
    pub size: Option<String>,
}

/// Builds the variant preview matrix: one row per color/size combination,
/// single-axis rows when only one list is populated.
///
/// Empty and whitespace-only entries are dropped before combining. Returns an
/// empty vector when both lists are empty after filtering, since a variant
/// needs at least one axis.
#[must_use]
pub fn build_variant_previews(
    product_name: &str,
    colors: &[String],
    sizes: &[String],
) -> Vec<VariantPreview> {
    let colors: Vec<&str> = colors
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    let sizes: Vec<&str> = sizes
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    match (colors.is_empty(), sizes.is_empty()) {
        (true, true) => Vec::new(),
        (false, true) => colors
            .iter()
            .map(|&color| preview(product_name, Some(color), None))
            .collect(),
        (true, false) => sizes
            .iter()
            .map(|&size| preview(product_name, None, Some(size)))
            .collect(),
        (false, false) => colors
            .iter()
            .flat_map(|&color| {
                sizes
                    .iter()
                    .map(move |&size| preview(product_name, Some(color), Some(size)))
            })
            .collect(),
    }
}

fn preview(product_name: &str, color: Option<&str>, size: Option<&str>) -> VariantPreview {
    VariantPreview {
        sku: generate_sku(product_name, color, size),
        color: color.map(str::to_owned),
        size: size.map(str::to_owned),
    }
}
