mod movie;
mod rating;

pub use movie::{strip_year_suffix, year_from_title, Genres, Movie, NO_GENRES_LISTED};
pub use rating::{apply_average_ratings, average_ratings, Rating};
