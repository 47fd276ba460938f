//! In-memory content source used by tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::{ContentSource, Predicate, QueryOptions};
use crate::error::BlogError;
use crate::types::{ContentBlock, Post, PostData, PostPagination};

const CURSOR_PREFIX: &str = "memory://search?";

/// Serves a fixed set of posts with the same paging rules as the real API.
pub struct InMemorySource {
    posts: Vec<Post>,
    failing: bool,
}

/// A published post dated 2021-01-01 plus `day` days.
pub fn published_post(uid: &str, day: i64) -> Post {
    let published = Utc.with_ymd_and_hms(2021, 1, 1, 12, 0, 0).unwrap() + chrono::Duration::days(day);
    Post {
        id: format!("id-{uid}"),
        uid: Some(uid.to_string()),
        doc_type: super::POST_TYPE.to_string(),
        first_publication_date: Some(published),
        last_publication_date: Some(published),
        data: PostData {
            title: format!("Title of {uid}"),
            subtitle: format!("Subtitle of {uid}"),
            author: "Joseph Oliveira".to_string(),
            banner: Default::default(),
            content: vec![ContentBlock::new("Intro", &["Hello"])],
        },
    }
}

impl InMemorySource {
    pub fn new(posts: Vec<Post>) -> InMemorySource {
        InMemorySource {
            posts,
            failing: false,
        }
    }

    /// Every call fails as if the API metadata were broken.
    pub fn failing() -> InMemorySource {
        InMemorySource {
            posts: Vec::new(),
            failing: true,
        }
    }

    fn check(&self) -> Result<(), BlogError> {
        if self.failing {
            Err(BlogError::MissingMasterRef)
        } else {
            Ok(())
        }
    }

    fn matches(post: &Post, predicates: &[Predicate]) -> bool {
        predicates.iter().all(|predicate| match predicate {
            Predicate::At { path, value } if path == "document.type" => &post.doc_type == value,
            Predicate::At { path, value } if path.ends_with(".uid") => {
                post.uid.as_deref() == Some(value.as_str())
            }
            Predicate::At { .. } => false,
        })
    }

    fn page(&self, descending: bool, page_size: usize, page: usize) -> PostPagination {
        let mut matching: Vec<&Post> = self
            .posts
            .iter()
            .filter(|post| post.doc_type == super::POST_TYPE)
            .collect();
        // sort_by_key is stable, ties stay in insertion order
        matching.sort_by_key(|post| post.first_publication_date);
        if descending {
            matching.reverse();
        }

        let total_pages = ((matching.len() + page_size - 1) / page_size).max(1);
        let results = matching
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect();
        let next_page = (page < total_pages).then(|| {
            format!(
                "{CURSOR_PREFIX}page={}&pageSize={page_size}&desc={descending}",
                page + 1
            )
        });

        PostPagination {
            page: page as u32,
            total_pages: total_pages as u32,
            next_page,
            results,
        }
    }
}

#[async_trait]
impl ContentSource for InMemorySource {
    async fn query(
        &self,
        predicates: &[Predicate],
        options: &QueryOptions,
    ) -> Result<PostPagination, BlogError> {
        self.check()?;

        let only_posts = predicates
            .iter()
            .all(|p| matches!(p, Predicate::At { path, value } if path == "document.type" && value == super::POST_TYPE));
        if !only_posts {
            let results = self
                .posts
                .iter()
                .filter(|post| Self::matches(post, predicates))
                .cloned()
                .collect();
            return Ok(PostPagination {
                page: 1,
                total_pages: 1,
                next_page: None,
                results,
            });
        }

        let descending = options.orderings.first().map_or(false, |o| o.descending);
        let page_size = options.page_size.unwrap_or(20) as usize;
        let page = options.page.unwrap_or(1) as usize;
        Ok(self.page(descending, page_size, page))
    }

    async fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<Option<Post>, BlogError> {
        self.check()?;

        Ok(self
            .posts
            .iter()
            .find(|post| post.doc_type == doc_type && post.uid.as_deref() == Some(uid))
            .cloned())
    }

    async fn fetch_page(&self, url: &str) -> Result<PostPagination, BlogError> {
        self.check()?;

        let mut page = 1;
        let mut page_size = 20;
        let mut descending = false;
        for pair in url.trim_start_matches(CURSOR_PREFIX).split('&') {
            match pair.split_once('=') {
                Some(("page", v)) => page = v.parse().unwrap_or(1),
                Some(("pageSize", v)) => page_size = v.parse().unwrap_or(20),
                Some(("desc", v)) => descending = v == "true",
                _ => {}
            }
        }
        Ok(self.page(descending, page_size, page))
    }
}
