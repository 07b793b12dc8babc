use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Movie, Rating},
};

const MOVIE_COLUMNS: &[&str] = &["movieId", "title", "genres"];
const RATING_COLUMNS: &[&str] = &["userId", "movieId", "rating", "timestamp"];

/// Rows parsed from a CSV payload, plus how many malformed rows were skipped
#[derive(Debug)]
pub struct Parsed<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    #[serde(rename = "movieId")]
    movie_id: u32,
    title: String,
    genres: String,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Movie::new(record.movie_id, record.title, record.genres.as_str())
    }
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
}

fn check_columns(reader: &mut csv::Reader<&[u8]>, required: &[&str], table: &str) -> AppResult<()> {
    let headers = reader.headers()?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(AppError::CatalogSource(format!(
                "{} CSV is missing the `{}` column",
                table, column
            )));
        }
    }
    Ok(())
}

fn parse_rows<T, R>(text: &str, required: &[&str], table: &str) -> AppResult<Parsed<T>>
where
    R: for<'de> Deserialize<'de>,
    T: From<R>,
{
    let mut reader = reader(text);
    check_columns(&mut reader, required, table)?;

    let mut rows = Vec::new();
    let mut skipped = 0;
    for result in reader.deserialize::<R>() {
        match result {
            Ok(record) => rows.push(T::from(record)),
            Err(e) => {
                skipped += 1;
                tracing::debug!(table = table, error = %e, "Skipping malformed CSV row");
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(table = table, skipped, parsed = rows.len(), "Skipped malformed CSV rows");
    }

    Ok(Parsed { rows, skipped })
}

/// Parses a MovieLens `movies.csv` payload (`movieId,title,genres`).
///
/// Titles may contain commas when quoted. The year is taken from the title's
/// `(YYYY)` suffix.
pub fn parse_movies(text: &str) -> AppResult<Parsed<Movie>> {
    parse_rows::<Movie, MovieRecord>(text, MOVIE_COLUMNS, "movies")
}

/// Parses a MovieLens `ratings.csv` payload (`userId,movieId,rating,timestamp`)
pub fn parse_ratings(text: &str) -> AppResult<Parsed<Rating>> {
    parse_rows::<Rating, Rating>(text, RATING_COLUMNS, "ratings")
}
