/// Catalog data provider abstraction
///
/// A provider hands back the raw movies and ratings CSV payloads; parsing and
/// fallback live in the catalog module. Providers are picked from configuration:
/// `http://` / `https://` sources go through [`HttpProvider`], anything else is
/// read from disk by [`FileProvider`].
use std::sync::Arc;

use crate::{config::Config, error::AppResult};

pub mod file;
pub mod http;

pub use file::FileProvider;
pub use http::HttpProvider;

/// Trait for catalog data providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the movies CSV (`movieId,title,genres`)
    async fn fetch_movies_csv(&self) -> AppResult<String>;

    /// Fetch the ratings CSV (`userId,movieId,rating,timestamp`), if this
    /// provider has one configured
    async fn fetch_ratings_csv(&self) -> AppResult<Option<String>>;

    /// Provider name for logging and the catalog's recorded source
    fn name(&self) -> &'static str;
}

fn is_http_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Builds the provider described by `MOVIES_SOURCE` / `RATINGS_SOURCE`.
///
/// Returns `None` when no movies source is configured; the built-in catalog is
/// used in that case. The ratings source goes through the same kind of
/// provider as the movies source.
pub fn from_config(config: &Config) -> Option<Arc<dyn CatalogProvider>> {
    let movies = config.movies_source.clone()?;
    let ratings = config.ratings_source.clone();

    if is_http_source(&movies) {
        Some(Arc::new(HttpProvider::new(movies, ratings)))
    } else {
        Some(Arc::new(FileProvider::new(movies, ratings)))
    }
}
