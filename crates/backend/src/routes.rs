use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARD ROUTES
        // ========================================
        .route(
            "/api/d410/product-mix",
            get(handlers::d410_product_mix::get_product_mix),
        )
        // ========================================
        // ASSISTANT ROUTES
        // ========================================
        .route(
            "/api/assistant/completions",
            post(handlers::assistant::create_completion),
        )
        // Статика: бандл фронтенда и ассеты рендереров дашбордов
        .nest_service("/assets", ServeDir::new("assets"))
        .fallback_service(ServeDir::new("dist"))
}
