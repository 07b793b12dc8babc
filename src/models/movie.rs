use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::HashSet, fmt::Display};

/// Marker MovieLens uses for movies without any genre
pub const NO_GENRES_LISTED: &str = "(no genres listed)";

static YEAR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\((\d{4})\)\s*$").expect("valid year suffix pattern"));

/// Ordered, duplicate-free list of genre tags.
///
/// Serialized as the pipe-delimited string used by the source data,
/// e.g. `"Action|Sci-Fi|Thriller"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Genres(Vec<String>);

impl Genres {
    /// Parses a pipe-delimited genre string. Empty segments and the
    /// `(no genres listed)` marker are dropped, repeated tags collapse to one.
    pub fn parse(raw: &str) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for tag in raw.split('|').map(str::trim) {
            if tag.is_empty() || tag == NO_GENRES_LISTED {
                continue;
            }
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        Self(tags)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_set(&self) -> HashSet<&str> {
        self.tags().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Genres {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Display for Genres {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("|"))
    }
}

impl Serialize for Genres {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Genres {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Genres::parse(&raw))
    }
}

/// A catalog entry. Immutable once the catalog is loaded.
///
/// The stored title keeps its `(YYYY)` suffix as it appears in the source
/// data; the year is additionally extracted into `year`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "movieId")]
    pub id: u32,
    pub title: String,
    pub genres: Genres,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(
        rename = "avgRating",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub average_rating: Option<f64>,
}

impl Movie {
    /// Builds a movie, taking the year from the title suffix when present
    pub fn new(id: u32, title: impl Into<String>, genres: impl Into<Genres>) -> Self {
        let title = title.into();
        let year = year_from_title(&title);
        Self {
            id,
            title,
            genres: genres.into(),
            year,
            average_rating: None,
        }
    }

    /// Title without its trailing `(YYYY)` suffix
    pub fn clean_title(&self) -> &str {
        strip_year_suffix(&self.title)
    }
}

/// Extracts the year from a trailing `(YYYY)` suffix
pub fn year_from_title(title: &str) -> Option<i32> {
    YEAR_SUFFIX
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Returns the title with a trailing `(YYYY)` suffix removed
pub fn strip_year_suffix(title: &str) -> &str {
    match YEAR_SUFFIX.find(title) {
        Some(m) => &title[..m.start()],
        None => title,
    }
}
