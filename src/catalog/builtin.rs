use crate::models::{apply_average_ratings, Movie, Rating};

/// (movieId, title, genres) in MovieLens `ml-latest-small` form
const MOVIES: &[(u32, &str, &str)] = &[
    (1, "Toy Story (1995)", "Adventure|Animation|Children|Comedy|Fantasy"),
    (2, "Jumanji (1995)", "Adventure|Children|Fantasy"),
    (3, "Grumpier Old Men (1995)", "Comedy|Romance"),
    (4, "Waiting to Exhale (1995)", "Comedy|Drama|Romance"),
    (5, "Father of the Bride Part II (1995)", "Comedy"),
    (6, "Heat (1995)", "Action|Crime|Thriller"),
    (7, "Sabrina (1995)", "Comedy|Romance"),
    (8, "Tom and Huck (1995)", "Adventure|Children"),
    (9, "Sudden Death (1995)", "Action"),
    (10, "GoldenEye (1995)", "Action|Adventure|Thriller"),
    (150, "Apollo 13 (1995)", "Adventure|Drama|IMAX"),
    (153, "Batman Forever (1995)", "Action|Adventure|Comedy|Crime"),
    (260, "Star Wars: Episode IV - A New Hope (1977)", "Action|Adventure|Sci-Fi"),
    (296, "Pulp Fiction (1994)", "Comedy|Crime|Drama|Thriller"),
    (318, "Shawshank Redemption, The (1994)", "Crime|Drama"),
    (356, "Forrest Gump (1994)", "Comedy|Drama|Romance|War"),
    (364, "Lion King, The (1994)", "Adventure|Animation|Children|Drama|Musical|IMAX"),
    (367, "Mask, The (1994)", "Action|Comedy|Crime|Fantasy"),
    (377, "Speed (1994)", "Action|Romance|Thriller"),
    (480, "Jurassic Park (1993)", "Action|Adventure|Sci-Fi|Thriller"),
    (2571, "Matrix, The (1999)", "Action|Sci-Fi|Thriller"),
];

/// (userId, movieId, rating, timestamp)
const RATINGS: &[(u32, u32, f64, i64)] = &[
    (1, 1, 4.0, 964982703),
    (1, 3, 4.0, 964981247),
    (1, 6, 4.0, 964982224),
    (2, 1, 4.0, 964982931),
    (2, 2, 3.0, 964982400),
    (2, 5, 3.0, 964982123),
    (3, 260, 5.0, 964982931),
    (3, 296, 4.5, 964982401),
    (3, 318, 5.0, 964982405),
    (3, 356, 4.5, 964982421),
];

pub fn builtin_ratings() -> Vec<Rating> {
    RATINGS
        .iter()
        .map(|&(user_id, movie_id, rating, timestamp)| Rating {
            user_id,
            movie_id,
            rating,
            timestamp,
        })
        .collect()
}

/// Fallback catalog used when no external source is configured or it fails
pub fn builtin_movies() -> Vec<Movie> {
    let mut movies: Vec<Movie> = MOVIES
        .iter()
        .map(|&(id, title, genres)| Movie::new(id, title, genres))
        .collect();
    apply_average_ratings(&mut movies, &builtin_ratings());
    movies
}
