//! Per-product expansion lifecycle on the listing page.
//!
//! Each product row with at least one variant carries an [`ExpansionState`].
//! A row is `Collapsed` until the user opens it, `Expanding` while a batch
//! inventory fetch for its variants is outstanding, and `Expanded` once the
//! fetch settles. Fetch failure also settles to `Expanded`: the row opens
//! with placeholder stock rather than blocking the rest of the list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Expansion lifecycle of a single product row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionState {
    /// Variant rows are hidden. The initial state for every product.
    #[default]
    Collapsed,
    /// Variant rows were requested and an inventory fetch is outstanding.
    Expanding,
    /// Variant rows are shown, whether or not every SKU resolved.
    Expanded,
}

impl fmt::Display for ExpansionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Collapsed => "collapsed",
            Self::Expanding => "expanding",
            Self::Expanded => "expanded",
        };
        write!(f, "{s}")
    }
}
