use std::sync::Arc;

use crate::{
    db::DbPool,
    repository::category::PgCategoryRepository,
    services::category_hierarchy::CategoryHierarchyResolver,
};

pub type HierarchyResolver = CategoryHierarchyResolver<PgCategoryRepository>;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub hierarchy: Arc<HierarchyResolver>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let hierarchy = CategoryHierarchyResolver::new(PgCategoryRepository::new(pool.clone()));
        Self {
            pool,
            hierarchy: Arc::new(hierarchy),
        }
    }
}
