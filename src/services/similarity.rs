use crate::models::Genres;

/// Jaccard similarity between two genre sets: `|a ∩ b| / |a ∪ b|`.
///
/// Returns a value in `[0, 1]`; two empty sets score 0.
pub fn jaccard(a: &Genres, b: &Genres) -> f64 {
    let a = a.as_set();
    let b = b.as_set();

    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}
