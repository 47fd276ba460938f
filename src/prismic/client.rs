use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{ContentSource, Predicate, QueryOptions};
use crate::error::BlogError;
use crate::types::{Post, PostPagination};

// A page render issues several searches; they share one ref lookup.
const MASTER_REF_TTL: Duration = Duration::from_secs(5);

/// Prismic REST API v2 client.
#[derive(Debug, Clone)]
pub struct PrismicClient {
    http: Client,
    endpoint: String,
    access_token: Option<String>,
    master_ref: Arc<Mutex<Option<CachedRef>>>,
}

#[derive(Debug)]
struct CachedRef {
    reference: String,
    fetched_at: Instant,
}

#[derive(Debug, Deserialize)]
struct ApiInfo {
    refs: Vec<ApiRef>,
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(rename = "isMasterRef", default)]
    is_master_ref: bool,
}

impl PrismicClient {
    pub fn new(http: Client, endpoint: &str, access_token: Option<String>) -> PrismicClient {
        PrismicClient {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_token,
            master_ref: Arc::new(Mutex::new(None)),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/documents/search", self.endpoint)
    }

    fn token_param(&self) -> Vec<(&'static str, String)> {
        self.access_token
            .iter()
            .map(|token| ("access_token", token.clone()))
            .collect()
    }

    fn cached_ref(&self) -> Option<String> {
        let cached = self.master_ref.lock().ok()?;
        cached
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < MASTER_REF_TTL)
            .map(|c| c.reference.clone())
    }

    /// The ref of the currently published content.
    async fn master_ref(&self) -> Result<String, BlogError> {
        if let Some(reference) = self.cached_ref() {
            return Ok(reference);
        }

        let api: ApiInfo = self
            .http
            .get(&self.endpoint)
            .query(&self.token_param())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let reference = api
            .refs
            .into_iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference)
            .ok_or(BlogError::MissingMasterRef)?;

        if let Ok(mut cached) = self.master_ref.lock() {
            *cached = Some(CachedRef {
                reference: reference.clone(),
                fetched_at: Instant::now(),
            });
        }

        Ok(reference)
    }
}

#[async_trait]
impl ContentSource for PrismicClient {
    async fn query(
        &self,
        predicates: &[Predicate],
        options: &QueryOptions,
    ) -> Result<PostPagination, BlogError> {
        let master_ref = self.master_ref().await?;

        let mut params = vec![("ref", master_ref), ("q", Predicate::to_query(predicates))];
        params.extend(options.to_params());
        params.extend(self.token_param());

        log::debug!("querying {} with {:?}", self.search_url(), predicates);

        let page = self
            .http
            .get(self.search_url())
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page)
    }

    async fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<Option<Post>, BlogError> {
        let predicates = [Predicate::at(format!("my.{doc_type}.uid"), uid)];
        let page = self.query(&predicates, &QueryOptions::new().page_size(1)).await?;

        Ok(page.results.into_iter().find(|post| post.doc_type == doc_type))
    }

    async fn fetch_page(&self, url: &str) -> Result<PostPagination, BlogError> {
        // next_page already carries ref, q and token.
        let page = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page)
    }
}
