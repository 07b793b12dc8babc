/// HTTP catalog provider
///
/// Downloads the MovieLens-style CSV files, e.g. a static host serving
/// `ml-latest-small/movies.csv` and `ml-latest-small/ratings.csv`.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    services::providers::CatalogProvider,
};

#[derive(Clone)]
pub struct HttpProvider {
    http_client: HttpClient,
    movies_url: String,
    ratings_url: Option<String>,
}

impl HttpProvider {
    pub fn new(movies_url: String, ratings_url: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            movies_url,
            ratings_url,
        }
    }

    async fn fetch_text(&self, url: &str) -> AppResult<String> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::CatalogSource(format!(
                "GET {} returned status {}",
                url, status
            )));
        }

        let body = response.text().await?;

        tracing::info!(
            url = %url,
            bytes = body.len(),
            provider = "http",
            "Catalog payload downloaded"
        );

        Ok(body)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for HttpProvider {
    async fn fetch_movies_csv(&self) -> AppResult<String> {
        self.fetch_text(&self.movies_url).await
    }

    async fn fetch_ratings_csv(&self) -> AppResult<Option<String>> {
        match &self.ratings_url {
            Some(url) => self.fetch_text(url).await.map(Some),
            None => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
