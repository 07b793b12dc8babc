use std::sync::Arc;

use tokio::sync::OnceCell;

use super::Catalog;
use crate::services::providers::CatalogProvider;

/// Process-scoped holder of the catalog.
///
/// The first `get` loads the catalog; concurrent first callers wait on the
/// same load. Every later call is served from memory.
pub struct CatalogStore {
    provider: Option<Arc<dyn CatalogProvider>>,
    catalog: OnceCell<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(provider: Option<Arc<dyn CatalogProvider>>) -> Self {
        Self {
            provider,
            catalog: OnceCell::new(),
        }
    }

    /// Store that serves the built-in catalog
    pub fn builtin() -> Self {
        Self::new(None)
    }

    /// Store that is already populated, skipping the load entirely
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            provider: None,
            catalog: OnceCell::new_with(Some(Arc::new(catalog))),
        }
    }

    pub async fn get(&self) -> Arc<Catalog> {
        self.catalog
            .get_or_init(|| async {
                let catalog = Catalog::load(self.provider.as_deref()).await;
                Arc::new(catalog)
            })
            .await
            .clone()
    }

    /// The catalog if it has been loaded already; never triggers a load
    pub fn loaded(&self) -> Option<Arc<Catalog>> {
        self.catalog.get().cloned()
    }
}
