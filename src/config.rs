use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Movies CSV location (http(s) URL or file path). Unset means the built-in catalog.
    #[serde(default)]
    pub movies_source: Option<String>,

    /// Ratings CSV location, used to fill in average ratings
    #[serde(default)]
    pub ratings_source: Option<String>,

    /// Recommendations returned when the request omits `count`
    #[serde(default = "default_recommendation_count")]
    pub default_recommendation_count: usize,

    /// Upper bound for a requested `count`; larger values are clamped
    #[serde(default = "default_max_recommendation_count")]
    pub max_recommendation_count: usize,

    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    #[serde(default = "default_autocomplete_limit")]
    pub autocomplete_limit: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_recommendation_count() -> usize {
    20
}

fn default_max_recommendation_count() -> usize {
    100
}

fn default_search_limit() -> usize {
    20
}

fn default_autocomplete_limit() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            movies_source: None,
            ratings_source: None,
            default_recommendation_count: default_recommendation_count(),
            max_recommendation_count: default_max_recommendation_count(),
            search_limit: default_search_limit(),
            autocomplete_limit: default_autocomplete_limit(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.movies_source, None);
        assert_eq!(config.ratings_source, None);
        assert_eq!(config.default_recommendation_count, 20);
        assert_eq!(config.max_recommendation_count, 100);
        assert_eq!(config.search_limit, 20);
        assert_eq!(config.autocomplete_limit, 8);
    }

    #[test]
    fn test_overrides_from_environment() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("MOVIES_SOURCE".to_string(), "data/movies.csv".to_string()),
            ("AUTOCOMPLETE_LIMIT".to_string(), "5".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.movies_source.as_deref(), Some("data/movies.csv"));
        assert_eq!(config.autocomplete_limit, 5);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
