use crate::{models::Movie, services::similarity::jaccard};

/// A candidate movie paired with its genre similarity to the target
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub movie: &'a Movie,
    pub score: f64,
}

/// Scores every catalog movie except the target and keeps those sharing at
/// least one genre, best first.
///
/// Ties keep catalog order (`sort_by` is stable). The target is excluded by
/// id, so other movies sharing its title are still candidates.
pub fn rank_candidates<'a>(target: &Movie, catalog: &'a [Movie]) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = catalog
        .iter()
        .filter(|movie| movie.id != target.id)
        .map(|movie| ScoredCandidate {
            movie,
            score: jaccard(&target.genres, &movie.genres),
        })
        .filter(|candidate| candidate.score > 0.0)
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Generates content-based recommendations for a target movie
///
/// Returns at most `limit` movies ranked by Jaccard similarity of genres.
/// An empty result means nothing in the catalog shares a genre with the target.
pub fn recommend(target: &Movie, catalog: &[Movie], limit: usize) -> Vec<Movie> {
    let ranked = rank_candidates(target, catalog);

    if let Some(best) = ranked.first() {
        tracing::debug!(
            target_id = target.id,
            candidates = ranked.len(),
            best_score = best.score,
            "Ranked recommendation candidates"
        );
    }

    ranked
        .into_iter()
        .take(limit)
        .map(|candidate| candidate.movie.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_movies;

    fn movie(id: u32, title: &str, genres: &str) -> Movie {
        Movie::new(id, title, genres)
    }

    fn find<'a>(catalog: &'a [Movie], title: &str) -> &'a Movie {
        catalog.iter().find(|m| m.title == title).unwrap()
    }

    #[test]
    fn test_excludes_target_and_zero_scores() {
        let catalog = vec![
            movie(1, "Toy Story (1995)", "Adventure|Animation|Children|Comedy|Fantasy"),
            movie(2, "Jumanji (1995)", "Adventure|Children|Fantasy"),
            movie(3, "Heat (1995)", "Action|Crime|Thriller"),
        ];

        let results = recommend(&catalog[0], &catalog, 10);
        assert_eq!(results, vec![catalog[1].clone()]);
    }

    #[test]
    fn test_excludes_target_by_id_not_title() {
        let catalog = vec![
            movie(1, "Hamlet (1990)", "Drama"),
            movie(2, "Hamlet (1990)", "Drama"),
        ];

        let results = recommend(&catalog[0], &catalog, 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 2);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let target = movie(100, "Target (2000)", "Action|Sci-Fi");
        let catalog = vec![
            movie(1, "Half A (2001)", "Action|Drama"),
            movie(2, "Exact (2002)", "Action|Sci-Fi"),
            movie(3, "Half B (2003)", "Sci-Fi|Horror"),
            movie(4, "None (2004)", "Romance"),
            movie(5, "Half C (2005)", "Action|Comedy"),
        ];

        let ids: Vec<u32> = recommend(&target, &catalog, 10).iter().map(|m| m.id).collect();
        // 1, 3 and 5 all score 1/3 and keep catalog order
        assert_eq!(ids, vec![2, 1, 3, 5]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let target = movie(100, "Target (2000)", "Drama");
        let catalog: Vec<Movie> = (1..=10)
            .map(|id| movie(id, &format!("Drama {id}"), "Drama"))
            .collect();

        assert_eq!(recommend(&target, &catalog, 3).len(), 3);
        assert!(recommend(&target, &catalog, 0).is_empty());
    }

    #[test]
    fn test_no_overlap_returns_empty() {
        let target = movie(100, "Odd One (2000)", "Documentary");
        let catalog = builtin_movies();
        assert!(recommend(&target, &catalog, 5).is_empty());
    }

    #[test]
    fn test_target_without_genres_returns_empty() {
        let target = movie(100, "Untagged (2000)", "(no genres listed)");
        let catalog = builtin_movies();
        assert!(recommend(&target, &catalog, 5).is_empty());
    }

    #[test]
    fn test_matrix_recommendations_share_a_genre() {
        let catalog = builtin_movies();
        let matrix = find(&catalog, "Matrix, The (1999)");

        let results = recommend(matrix, &catalog, 5);
        assert!(!results.is_empty());
        assert!(results.len() <= 5);

        let scores: Vec<f64> = results
            .iter()
            .map(|m| jaccard(&matrix.genres, &m.genres))
            .collect();
        for (movie, score) in results.iter().zip(&scores) {
            assert_ne!(movie.id, matrix.id);
            assert!(*score > 0.0, "{} shares no genre", movie.title);
            assert!(movie
                .genres
                .tags()
                .any(|g| ["Action", "Sci-Fi", "Thriller"].contains(&g)));
        }
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        // Jurassic Park carries all three of The Matrix's genres
        assert_eq!(results[0].title, "Jurassic Park (1993)");
    }

    #[test]
    fn test_rank_candidates_exposes_scores() {
        let catalog = builtin_movies();
        let toy_story = find(&catalog, "Toy Story (1995)");

        let ranked = rank_candidates(toy_story, &catalog);
        let jumanji = ranked
            .iter()
            .find(|c| c.movie.title == "Jumanji (1995)")
            .unwrap();
        assert_eq!(jumanji.score, 0.6);
        assert!(ranked.iter().all(|c| c.score > 0.0 && c.score <= 1.0));
    }
}
