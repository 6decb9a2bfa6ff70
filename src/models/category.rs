use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Deserialize, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_slug: Option<String>,
}

// Fila tal cual llega de `SELECT slug, parent_slug FROM categories`.
// Sin validar: el slug podría venir vacío si alguien cargó datos a mano.
#[derive(Debug, FromRow)]
pub struct CategoryLinkRow {
    pub slug: Option<String>,
    pub parent_slug: Option<String>,
}

// Arista hijo -> padre; parent_slug es None en las categorías raíz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    pub slug: String,
    pub parent_slug: Option<String>,
}

#[cfg(test)]
impl CategoryLink {
    pub fn new(slug: impl Into<String>, parent_slug: Option<&str>) -> Self {
        Self {
            slug: slug.into(),
            parent_slug: parent_slug.map(str::to_string),
        }
    }
}

impl TryFrom<CategoryLinkRow> for CategoryLink {
    type Error = String;

    fn try_from(row: CategoryLinkRow) -> Result<Self, Self::Error> {
        // Sin trim: ads.category_slug se compara tal cual contra estos slugs
        let slug = row
            .slug
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| format!("categoría sin slug (parent_slug = {:?})", row.parent_slug))?;

        // Un parent_slug vacío equivale a "sin padre"
        let parent_slug = row.parent_slug.filter(|s| !s.trim().is_empty());

        Ok(Self { slug, parent_slug })
    }
}

// Respuesta de GET /api/categories/:slug/descendants
#[derive(Debug, Serialize)]
pub struct CategoryDescendants {
    pub slug: String,
    pub slugs: Vec<String>,
}
