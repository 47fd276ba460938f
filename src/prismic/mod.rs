//! Access to the headless content API.
//!
//! Handlers only see [`ContentSource`]; the HTTP client lives in
//! [`client`] and is injected at startup.

mod client;
#[cfg(test)]
pub mod memory;
mod query;

use async_trait::async_trait;

use crate::error::BlogError;
use crate::types::{Post, PostListing, PostPagination};

pub use client::PrismicClient;
pub use query::{Predicate, QueryOptions, SortOrder};

/// Custom type holding blog posts.
pub const POST_TYPE: &str = "posts";
pub const FIRST_PUBLICATION_DATE: &str = "document.first_publication_date";

// Largest page the search endpoint serves.
const LISTING_PAGE_SIZE: u32 = 100;

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Runs a search and returns the requested page.
    async fn query(
        &self,
        predicates: &[Predicate],
        options: &QueryOptions,
    ) -> Result<PostPagination, BlogError>;

    /// Looks a document up by its uid. `None` if it does not exist.
    async fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<Option<Post>, BlogError>;

    /// Follows a `next_page` cursor from a previous result.
    async fn fetch_page(&self, url: &str) -> Result<PostPagination, BlogError>;
}

/// Every published post, oldest first, for previous/next navigation.
pub async fn fetch_listing(source: &dyn ContentSource) -> Result<PostListing, BlogError> {
    let options = QueryOptions::new()
        .page_size(LISTING_PAGE_SIZE)
        .order_by(SortOrder::asc(FIRST_PUBLICATION_DATE))
        .fetch(format!("{POST_TYPE}.title"));

    let mut pagination = source
        .query(&[Predicate::at("document.type", POST_TYPE)], &options)
        .await?;

    while let Some(next_page) = pagination.next_page.take() {
        let page = source.fetch_page(&next_page).await?;
        pagination.merge(page);
    }

    let listing = PostListing::from_posts(&pagination.results);
    log::debug!(
        "post listing loaded: {} published of {} documents",
        listing.len(),
        pagination.results.len()
    );

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::memory::{published_post, InMemorySource};
    use super::*;

    #[actix_web::test]
    async fn listing_follows_every_page() {
        let posts = (1..=250)
            .map(|day| published_post(&format!("post-{day}"), day))
            .collect();
        let source = InMemorySource::new(posts);

        let listing = fetch_listing(&source).await.unwrap();

        assert_eq!(listing.len(), 250);
        assert_eq!(listing.as_slice()[0].uid, "post-1");
        assert_eq!(listing.as_slice()[249].uid, "post-250");
    }

    #[actix_web::test]
    async fn listing_skips_drafts() {
        let mut draft = published_post("draft", 3);
        draft.first_publication_date = None;
        let source = InMemorySource::new(vec![published_post("a", 1), draft, published_post("b", 2)]);

        let listing = fetch_listing(&source).await.unwrap();

        let uids: Vec<&str> = listing.as_slice().iter().map(|r| r.uid.as_str()).collect();
        assert_eq!(uids, vec!["a", "b"]);
    }

    #[actix_web::test]
    async fn listing_surfaces_source_failures() {
        let source = InMemorySource::failing();
        let err = fetch_listing(&source).await.unwrap_err();
        assert!(matches!(err, BlogError::MissingMasterRef));
    }
}
