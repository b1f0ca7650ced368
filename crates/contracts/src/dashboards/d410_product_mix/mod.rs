pub mod dto;
pub mod tree;

pub use dto::{BrandShare, CategoryShare, MixTreeNode, ProductMixResponse, SkuStats};
pub use tree::{build_tree, select_category};
