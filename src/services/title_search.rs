use crate::models::Movie;

fn title_contains(movie: &Movie, needle_lower: &str) -> bool {
    movie.title.to_lowercase().contains(needle_lower)
}

/// Case-insensitive substring search over titles
///
/// Results follow catalog order and are capped at `limit`. An empty query
/// matches every title.
pub fn find_by_title_substring<'a>(
    catalog: &'a [Movie],
    query: &str,
    limit: usize,
) -> Vec<&'a Movie> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|movie| title_contains(movie, &needle))
        .take(limit)
        .collect()
}

/// First movie, in catalog order, whose title contains `query` (case-insensitive)
pub fn find_first_by_title_substring<'a>(
    catalog: &'a [Movie],
    query: &str,
) -> Option<&'a Movie> {
    let needle = query.to_lowercase();
    catalog.iter().find(|movie| title_contains(movie, &needle))
}

/// Resolves free-text input to a recommendation target.
///
/// An exact case-insensitive title match wins, with or without the `(YYYY)`
/// suffix; otherwise falls back to the first substring hit. A blank query
/// resolves to nothing.
pub fn resolve_target<'a>(catalog: &'a [Movie], query: &str) -> Option<&'a Movie> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    // Exact title wins over an earlier partial hit
    let needle = query.to_lowercase();
    catalog
        .iter()
        .find(|movie| {
            movie.title.to_lowercase() == needle || movie.clean_title().to_lowercase() == needle
        })
        .or_else(|| find_first_by_title_substring(catalog, &needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_movies;

    #[test]
    fn test_find_first_is_case_insensitive() {
        let catalog = builtin_movies();
        let movie = find_first_by_title_substring(&catalog, "toy story").unwrap();
        assert_eq!(movie.title, "Toy Story (1995)");

        let movie = find_first_by_title_substring(&catalog, "MATRIX").unwrap();
        assert_eq!(movie.title, "Matrix, The (1999)");
    }

    #[test]
    fn test_find_first_not_found() {
        let catalog = builtin_movies();
        assert!(find_first_by_title_substring(&catalog, "Casablanca").is_none());
    }

    #[test]
    fn test_find_by_substring_follows_catalog_order() {
        let catalog = vec![
            Movie::new(1, "Star Wars: Episode IV - A New Hope (1977)", "Action"),
            Movie::new(2, "Heat (1995)", "Action"),
            Movie::new(3, "Lone Star (1996)", "Drama"),
        ];

        let titles: Vec<&str> = find_by_title_substring(&catalog, "star", 20)
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Star Wars: Episode IV - A New Hope (1977)", "Lone Star (1996)"]);
    }

    #[test]
    fn test_find_by_substring_respects_limit() {
        let catalog = builtin_movies();
        // Every built-in title carries a "(19" year suffix
        assert_eq!(find_by_title_substring(&catalog, "(19", 8).len(), 8);
        assert_eq!(find_by_title_substring(&catalog, "(19", 3).len(), 3);
    }

    #[test]
    fn test_empty_query_matches_catalog_prefix() {
        let catalog = builtin_movies();
        let results = find_by_title_substring(&catalog, "", 8);
        let expected: Vec<&Movie> = catalog.iter().take(8).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_resolve_target_prefers_exact_title() {
        let catalog = vec![
            Movie::new(1, "Heat and Dust (1983)", "Drama|Romance"),
            Movie::new(6, "Heat (1995)", "Action|Crime|Thriller"),
        ];

        assert_eq!(resolve_target(&catalog, "heat").unwrap().id, 6);
        assert_eq!(resolve_target(&catalog, "Heat (1995)").unwrap().id, 6);
        assert_eq!(resolve_target(&catalog, "  HEAT  ").unwrap().id, 6);
    }

    #[test]
    fn test_resolve_target_falls_back_to_substring() {
        let catalog = builtin_movies();
        let movie = resolve_target(&catalog, "shawshank").unwrap();
        assert_eq!(movie.title, "Shawshank Redemption, The (1994)");
    }

    #[test]
    fn test_resolve_target_blank_query() {
        let catalog = builtin_movies();
        assert!(resolve_target(&catalog, "   ").is_none());
    }
}
