use axum::{routing::get, Router};
use crate::{
    handlers::{ad, category},
    state::AppState,
};

pub fn create_routes(state: AppState) -> Router {
    // Todo es público y de solo lectura; la gestión de categorías vive en el panel de admin
    Router::new()
        .route("/api/categories", get(category::list_categories_handler))
        .route(
            "/api/categories/:slug/descendants",
            get(category::category_descendants_handler),
        )
        .route("/api/ads", get(ad::list_ads_handler))
        .with_state(state)
}
