use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product category with its share of total transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category name, unique within the dataset
    pub name: String,
    /// Share of total transactions in percent (0-100)
    pub value: f64,
    /// Color token resolved by the chart renderer
    pub color_token: String,
    /// Brand breakdown within the category (may be empty)
    pub brands: Vec<BrandShare>,
}

/// One brand's share within its parent category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandShare {
    pub name: String,
    /// Share in percent (0-100); a category's brand values are expected to
    /// sum to roughly the category's own value. Advisory only, never checked.
    pub value: f64,
    pub color_token: String,
}

/// Node of the derived display tree handed to the treemap renderer.
///
/// Rebuilt from scratch on every aggregation call; the renderer diffs by
/// reference, so nodes are never shared between successive trees. Depth is a
/// property of tree position and is not stored per node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixTreeNode {
    pub name: String,
    /// Layout weight for the proportional-area renderer. Raw share value,
    /// passed through unmodified (including 0).
    pub size: f64,
    pub color_token: String,
    pub children: Vec<MixTreeNode>,
}

/// SKU counters shown above the chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkuStats {
    pub total_skus: u32,
    pub active_skus: u32,
    pub new_skus: u32,
}

/// Response for the product mix dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMixResponse {
    pub categories: Vec<CategoryShare>,
    pub sku_stats: SkuStats,
    /// Server-side timestamp of the aggregation
    pub as_of: DateTime<Utc>,
}
