/// Local file catalog provider
use std::path::PathBuf;

use crate::{error::AppResult, services::providers::CatalogProvider};

#[derive(Debug, Clone)]
pub struct FileProvider {
    movies_path: PathBuf,
    ratings_path: Option<PathBuf>,
}

impl FileProvider {
    pub fn new(movies_path: impl Into<PathBuf>, ratings_path: Option<impl Into<PathBuf>>) -> Self {
        Self {
            movies_path: movies_path.into(),
            ratings_path: ratings_path.map(Into::into),
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for FileProvider {
    async fn fetch_movies_csv(&self) -> AppResult<String> {
        let text = tokio::fs::read_to_string(&self.movies_path).await?;
        tracing::debug!(path = %self.movies_path.display(), bytes = text.len(), "Read movies file");
        Ok(text)
    }

    async fn fetch_ratings_csv(&self) -> AppResult<Option<String>> {
        let Some(path) = &self.ratings_path else {
            return Ok(None);
        };
        let text = tokio::fs::read_to_string(path).await?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "Read ratings file");
        Ok(Some(text))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_both_files() {
        let mut movies = tempfile::NamedTempFile::new().unwrap();
        writeln!(movies, "movieId,title,genres").unwrap();
        writeln!(movies, "1,Toy Story (1995),Adventure|Animation").unwrap();
        let mut ratings = tempfile::NamedTempFile::new().unwrap();
        writeln!(ratings, "userId,movieId,rating,timestamp").unwrap();

        let provider = FileProvider::new(movies.path(), Some(ratings.path()));

        let movies_csv = provider.fetch_movies_csv().await.unwrap();
        assert!(movies_csv.contains("Toy Story (1995)"));

        let ratings_csv = provider.fetch_ratings_csv().await.unwrap().unwrap();
        assert!(ratings_csv.starts_with("userId,movieId"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let provider = FileProvider::new("/nonexistent/movies.csv", None::<PathBuf>);
        let err = provider.fetch_movies_csv().await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
        tokio_test::assert_ok!(provider.fetch_ratings_csv().await);
    }
}
