use async_trait::async_trait;
use thiserror::Error;

use crate::{
    db::DbPool,
    models::category::{CategoryLink, CategoryLinkRow},
};

#[derive(Debug, Error)]
pub enum CategoryRepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("malformed category row: {0}")]
    MalformedRow(String),
}

// Foto completa de los pares (slug, parent_slug), sin filtro ni orden garantizado
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn fetch_all_parent_child_pairs(
        &self,
    ) -> Result<Vec<CategoryLink>, CategoryRepositoryError>;
}

#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: DbPool,
}

impl PgCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn fetch_all_parent_child_pairs(
        &self,
    ) -> Result<Vec<CategoryLink>, CategoryRepositoryError> {
        let rows = sqlx::query_as::<_, CategoryLinkRow>("SELECT slug, parent_slug FROM categories")
            .fetch_all(&self.pool)
            .await?;

        validate_rows(rows)
    }
}

// Una sola fila rota invalida toda la foto: preferimos no expandir a expandir mal
fn validate_rows(rows: Vec<CategoryLinkRow>) -> Result<Vec<CategoryLink>, CategoryRepositoryError> {
    rows.into_iter()
        .map(|row| CategoryLink::try_from(row).map_err(CategoryRepositoryError::MalformedRow))
        .collect()
}
