use axum::Json;
use contracts::dashboards::d410_product_mix::ProductMixResponse;

use crate::dashboards::d410_product_mix::service;

/// GET /api/d410/product-mix
pub async fn get_product_mix() -> Json<ProductMixResponse> {
    Json(service::product_mix())
}
