use std::sync::Arc;

use crate::config::Config;
use crate::prismic::ContentSource;

/// Shared by every worker through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    pub config: Config,
}

impl AppState {
    pub fn new(source: Arc<dyn ContentSource>, config: Config) -> AppState {
        AppState { source, config }
    }
}

#[cfg(test)]
pub fn test_state(source: crate::prismic::memory::InMemorySource) -> AppState {
    let config = Config::from_lookup(|key| match key {
        "PRISMIC_API_ENDPOINT" => Some("http://localhost/api/v2".to_string()),
        "POSTS_PAGE_SIZE" => Some("2".to_string()),
        "SITE_NAME" => Some("Space Log".to_string()),
        _ => None,
    })
    .expect("test config");

    AppState::new(Arc::new(source), config)
}
