use axum::{routing::get, Router};

use crate::domain::product::service::ProductService;
use crate::handlers;

/// Состояние приложения: зависимости собираются в main и передаются
/// роутеру явно.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Product catalog
        .route(
            "/api/v1/product",
            get(handlers::product::get_all_products).post(handlers::product::save),
        )
        .route(
            "/api/v1/product/:id",
            get(handlers::product::get_product).delete(handlers::product::delete_product),
        )
        .with_state(state)
}
