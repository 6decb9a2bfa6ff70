use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, error, warn};

use crate::{
    models::category::CategoryLink,
    repository::category::CategoryRepository,
};

pub struct CategoryHierarchyResolver<R> {
    repository: R,
}

impl<R: CategoryRepository> CategoryHierarchyResolver<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    // start_slug primero y después sus descendientes, en anchura.
    // Nunca falla: sin jerarquía el listado queda acotado a la categoría exacta.
    pub async fn resolve_descendant_slugs(&self, start_slug: &str) -> Vec<String> {
        match self.repository.fetch_all_parent_child_pairs().await {
            Ok(links) => {
                let slugs = descendant_slugs(&links, start_slug);
                debug!(
                    start_slug,
                    categories = links.len(),
                    resolved = slugs.len(),
                    "Category hierarchy resolved"
                );
                slugs
            }
            Err(e) => {
                error!(start_slug, error = %e, "Error leyendo jerarquía de categorías");
                vec![start_slug.to_string()]
            }
        }
    }
}

// Un slug ya visitado no se vuelve a emitir ni a expandir (ciclos, dos padres)
pub fn descendant_slugs<'a>(links: &'a [CategoryLink], start_slug: &'a str) -> Vec<String> {
    let children = children_by_parent(links);

    let mut visited: HashSet<&str> = HashSet::from([start_slug]);
    let mut queue: VecDeque<&str> = VecDeque::from([start_slug]);
    let mut slugs = Vec::new();
    let mut revisits = 0usize;

    while let Some(slug) = queue.pop_front() {
        slugs.push(slug.to_string());

        let Some(kids) = children.get(slug) else {
            continue;
        };
        for &child in kids {
            if visited.insert(child) {
                queue.push_back(child);
            } else {
                revisits += 1;
            }
        }
    }

    if revisits > 0 {
        warn!(
            start_slug,
            revisits, "Category hierarchy is not a forest (cycle or duplicate parent)"
        );
    }

    slugs
}

// parent_slug -> hijos directos, en el orden en que llegaron las filas
fn children_by_parent(links: &[CategoryLink]) -> HashMap<&str, Vec<&str>> {
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for link in links {
        if let Some(parent) = link.parent_slug.as_deref() {
            children.entry(parent).or_default().push(link.slug.as_str());
        }
    }
    children
}
