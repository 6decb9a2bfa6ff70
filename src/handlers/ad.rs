use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::{
    models::ad::{Ad, AdFilterOptions, STATUS_APPROVED},
    state::AppState,
};

// GET /api/ads (Soporta ?category=electronics&search=texto&limit=10)
pub async fn list_ads_handler(
    Query(opts): Query<AdFilterOptions>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    // La categoría pedida se expande a ella misma + todas sus subcategorías
    let category_slugs = match opts.category_slug() {
        Some(slug) => Some(state.hierarchy.resolve_descendant_slugs(slug).await),
        None => None,
    };

    // ($1::text[] IS NULL OR ...): sin categoría, no se filtra por categoría.
    // Solo anuncios aprobados por moderación.
    let result = sqlx::query_as::<_, Ad>(
        r#"
        SELECT
            id,
            title,
            description,
            price,
            category_slug,
            location,
            status,
            created_at
        FROM ads
        WHERE
            ($1::text[] IS NULL OR category_slug = ANY($1))
            AND status = $2
            AND ($3::text IS NULL OR (title ILIKE '%' || $3 || '%' OR description ILIKE '%' || $3 || '%'))
        ORDER BY created_at DESC
        LIMIT $4
        "#,
    )
    .bind(category_slugs)
    .bind(STATUS_APPROVED)
    .bind(opts.search_term())
    .bind(opts.effective_limit())
    .fetch_all(&state.pool)
    .await;

    match result {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            tracing::error!("Error buscando anuncios: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error de base de datos").into_response()
        }
    }
}
