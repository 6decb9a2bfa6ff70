use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::{
    models::category::{Category, CategoryDescendants},
    state::AppState,
};

// GET /api/categories
pub async fn list_categories_handler(State(state): State<AppState>) -> impl IntoResponse {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, slug, description, parent_slug FROM categories ORDER BY id ASC",
    )
    .fetch_all(&state.pool)
    .await;

    match categories {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            tracing::error!("Error fetching categories: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error interno").into_response()
        }
    }
}

// GET /api/categories/:slug/descendants
// Siempre 200: si la jerarquía no se puede leer, la lista trae solo el slug pedido
pub async fn category_descendants_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let slugs = state.hierarchy.resolve_descendant_slugs(&slug).await;
    (StatusCode::OK, Json(CategoryDescendants { slug, slugs }))
}
