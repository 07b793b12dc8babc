use serde::Deserialize;
use std::collections::HashMap;

use super::Movie;

/// One row of the MovieLens ratings table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: u32,
    pub movie_id: u32,
    pub rating: f64,
    pub timestamp: i64,
}

/// Mean rating per movie id
pub fn average_ratings(ratings: &[Rating]) -> HashMap<u32, f64> {
    let mut totals: HashMap<u32, (f64, u32)> = HashMap::new();
    for rating in ratings {
        let entry = totals.entry(rating.movie_id).or_insert((0.0, 0));
        entry.0 += rating.rating;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(movie_id, (sum, count))| (movie_id, sum / f64::from(count)))
        .collect()
}

/// Fills in `average_rating` for every movie that has at least one rating.
/// Movies without ratings keep whatever they already carried.
pub fn apply_average_ratings(movies: &mut [Movie], ratings: &[Rating]) -> usize {
    let averages = average_ratings(ratings);
    let mut rated = 0;
    for movie in movies.iter_mut() {
        if let Some(avg) = averages.get(&movie.id) {
            movie.average_rating = Some(*avg);
            rated += 1;
        }
    }
    rated
}
