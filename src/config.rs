//! Application configuration loaded from environment variables.

use crate::error::BlogError;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1:8080").
    pub bind_addr: String,

    /// Prismic API v2 endpoint, e.g. "https://my-blog.cdn.prismic.io/api/v2".
    pub prismic_api_endpoint: String,

    /// Access token for private repositories.
    pub prismic_access_token: Option<String>,

    /// Posts per page on the home listing.
    pub posts_page_size: u32,

    /// GitHub repository holding the utterances comment issues ("owner/repo").
    pub utterances_repo: String,

    /// utterances theme name.
    pub utterances_theme: String,

    /// Shown in the header and page titles.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `PRISMIC_API_ENDPOINT`
    ///
    /// Optional:
    /// - `BIND_ADDR` (default: "127.0.0.1:8080")
    /// - `PRISMIC_ACCESS_TOKEN`
    /// - `POSTS_PAGE_SIZE` (default: 1)
    /// - `UTTERANCES_REPO` (default: "ettoreMB/utterances_comments")
    /// - `UTTERANCES_THEME` (default: "photon-dark")
    /// - `SITE_NAME` (default: "spacetraveling")
    pub fn from_env() -> Result<Self, BlogError> {
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        log::info!(
            "configuration loaded: bind_addr={} prismic_api_endpoint={} posts_page_size={}",
            config.bind_addr,
            config.prismic_api_endpoint,
            config.posts_page_size
        );

        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, BlogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let prismic_api_endpoint = var("PRISMIC_API_ENDPOINT")
            .ok_or_else(|| BlogError::Config("PRISMIC_API_ENDPOINT is not set".to_string()))?
            .trim_end_matches('/')
            .to_string();

        let posts_page_size = match var("POSTS_PAGE_SIZE") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|size| (1..=100).contains(size))
                .ok_or_else(|| {
                    BlogError::Config(format!("POSTS_PAGE_SIZE must be between 1 and 100, got {raw}"))
                })?,
            None => 1,
        };

        Ok(Self {
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            prismic_api_endpoint,
            prismic_access_token: var("PRISMIC_ACCESS_TOKEN"),
            posts_page_size,
            utterances_repo: var("UTTERANCES_REPO")
                .unwrap_or_else(|| "ettoreMB/utterances_comments".to_string()),
            utterances_theme: var("UTTERANCES_THEME").unwrap_or_else(|| "photon-dark".to_string()),
            site_name: var("SITE_NAME").unwrap_or_else(|| "spacetraveling".to_string()),
        })
    }
}
