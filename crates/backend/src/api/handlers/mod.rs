pub mod assistant;
pub mod d410_product_mix;
