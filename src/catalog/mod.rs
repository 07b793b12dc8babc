//! In-memory movie catalog
//!
//! The catalog is built once per process: from the configured provider's CSV
//! payloads when one is set and loads cleanly, otherwise from the built-in
//! sample. Fetch and parse failures never reach callers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::{apply_average_ratings, Movie},
    services::providers::CatalogProvider,
};

mod builtin;
pub mod parse;
mod store;

pub use builtin::{builtin_movies, builtin_ratings};
pub use store::CatalogStore;

pub const BUILTIN_SOURCE: &str = "builtin";

/// Ordered, id-unique sequence of movies
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    source: &'static str,
    loaded_at: DateTime<Utc>,
}

/// Summary reported by the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CatalogInfo {
    pub source: &'static str,
    pub movies: usize,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Builds a catalog, keeping the first occurrence of each movie id
    pub fn from_movies(movies: Vec<Movie>, source: &'static str) -> Self {
        let total = movies.len();
        let mut seen = HashSet::with_capacity(total);
        let movies: Vec<Movie> = movies.into_iter().filter(|m| seen.insert(m.id)).collect();

        if movies.len() < total {
            tracing::warn!(
                source = source,
                dropped = total - movies.len(),
                "Dropped movies with duplicate ids"
            );
        }

        Self {
            movies,
            source,
            loaded_at: Utc::now(),
        }
    }

    pub fn builtin() -> Self {
        Self::from_movies(builtin_movies(), BUILTIN_SOURCE)
    }

    /// Loads the catalog from `provider`, falling back to the built-in data on
    /// any failure. Without a provider no I/O happens.
    pub async fn load(provider: Option<&dyn CatalogProvider>) -> Self {
        let Some(provider) = provider else {
            tracing::info!("No catalog source configured, using built-in catalog");
            return Self::builtin();
        };

        match Self::fetch(provider).await {
            Ok(catalog) => {
                tracing::info!(
                    provider = provider.name(),
                    movies = catalog.len(),
                    "Catalog loaded"
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    provider = provider.name(),
                    error = %e,
                    "Catalog fetch failed, using built-in catalog"
                );
                Self::builtin()
            }
        }
    }

    async fn fetch(provider: &dyn CatalogProvider) -> AppResult<Self> {
        // Movies are mandatory: any failure here means the built-in fallback
        let movies_csv = provider.fetch_movies_csv().await?;
        let mut movies = parse::parse_movies(&movies_csv)?.rows;

        if movies.is_empty() {
            return Err(AppError::CatalogSource(
                "movies payload contained no usable rows".to_string(),
            ));
        }

        // Ratings are optional; a bad ratings payload only loses the averages
        let ratings = match provider.fetch_ratings_csv().await {
            Ok(Some(text)) => parse::parse_ratings(&text).map(|parsed| Some(parsed.rows)),
            Ok(None) => Ok(None),
            Err(e) => Err(e),
        };

        match ratings {
            Ok(Some(ratings)) => {
                let rated = apply_average_ratings(&mut movies, &ratings);
                tracing::info!(ratings = ratings.len(), rated_movies = rated, "Applied ratings");
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Ratings unavailable, serving movies without averages");
            }
        }

        Ok(Self::from_movies(movies, provider.name()))
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, id: u32) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn info(&self) -> CatalogInfo {
        CatalogInfo {
            source: self.source,
            movies: self.movies.len(),
            loaded_at: self.loaded_at,
        }
    }
}
