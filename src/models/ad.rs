use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_APPROVED: &str = "approved";

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 50;

// Fila de la tabla `ads`
#[derive(Debug, Deserialize, Serialize, FromRow)]
pub struct Ad {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_slug: String,
    pub location: Option<String>,
    pub status: String, // pending | approved | rejected | sold
    pub created_at: Option<DateTime<Utc>>,
}

// Query string de GET /api/ads (ej: ?category=electronics&search=iphone&limit=10)
#[derive(Debug, Default, Deserialize)]
pub struct AdFilterOptions {
    pub category: Option<String>,
    pub search: Option<String>,
    // Texto crudo: un limit mal escrito no puede tumbar los demás filtros
    pub limit: Option<String>,
}

impl AdFilterOptions {
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT)
    }

    // Texto vacío o solo espacios no filtra nada
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::Query, http::Uri};

    use super::*;

    #[test]
    fn test_limit_defaults_and_clamps() {
        let opts = AdFilterOptions::default();
        assert_eq!(opts.effective_limit(), 20);

        let opts = AdFilterOptions { limit: Some("500".to_string()), ..Default::default() };
        assert_eq!(opts.effective_limit(), 50);

        let opts = AdFilterOptions { limit: Some("0".to_string()), ..Default::default() };
        assert_eq!(opts.effective_limit(), 1);

        let opts = AdFilterOptions { limit: Some(" 7".to_string()), ..Default::default() };
        assert_eq!(opts.effective_limit(), 7);
    }

    #[test]
    fn test_unparseable_limit_falls_back_to_default() {
        let opts = AdFilterOptions { limit: Some("abc".to_string()), ..Default::default() };
        assert_eq!(opts.effective_limit(), 20);
    }

    #[test]
    fn test_bad_limit_keeps_category_and_search() {
        let uri: Uri = "/api/ads?category=phones&search=iphone&limit=abc".parse().unwrap();
        let Query(opts) = Query::<AdFilterOptions>::try_from_uri(&uri).unwrap();

        assert_eq!(opts.category_slug(), Some("phones"));
        assert_eq!(opts.search_term(), Some("iphone"));
        assert_eq!(opts.effective_limit(), 20);
    }

    #[test]
    fn test_missing_query_string_means_no_filters() {
        let uri: Uri = "/api/ads".parse().unwrap();
        let Query(opts) = Query::<AdFilterOptions>::try_from_uri(&uri).unwrap();

        assert_eq!(opts.category_slug(), None);
        assert_eq!(opts.search_term(), None);
        assert_eq!(opts.effective_limit(), 20);
    }

    #[test]
    fn test_blank_filters_are_ignored() {
        let opts = AdFilterOptions {
            category: Some("  ".to_string()),
            search: Some("".to_string()),
            limit: None,
        };
        assert_eq!(opts.category_slug(), None);
        assert_eq!(opts.search_term(), None);

        let opts = AdFilterOptions {
            category: Some(" phones".to_string()),
            search: Some(" iphone ".to_string()),
            limit: None,
        };
        assert_eq!(opts.category_slug(), Some("phones"));
        assert_eq!(opts.search_term(), Some("iphone"));
    }
}
