use chrono::{DateTime, Utc};

use super::Post;

/// Lightweight reference to a published post, enough to link to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRef {
    pub uid: String,
    pub title: String,
    pub first_publication_date: DateTime<Utc>,
}

/// Published posts in ascending publication order.
#[derive(Debug, Clone, Default)]
pub struct PostListing {
    refs: Vec<PostRef>,
}

impl PostRef {
    /// Drafts and documents without a uid cannot be linked to.
    pub fn from_post(post: &Post) -> Option<PostRef> {
        Some(PostRef {
            uid: post.uid.clone()?,
            title: post.data.title.clone(),
            first_publication_date: post.first_publication_date?,
        })
    }
}

impl PostListing {
    /// Sorts by publication date. The sort is stable, so equal dates keep
    /// the order the source returned them in.
    pub fn new(mut refs: Vec<PostRef>) -> PostListing {
        refs.sort_by_key(|post_ref| post_ref.first_publication_date);
        PostListing { refs }
    }

    pub fn from_posts<'a>(posts: impl IntoIterator<Item = &'a Post>) -> PostListing {
        PostListing::new(posts.into_iter().filter_map(PostRef::from_post).collect())
    }

    pub fn as_slice(&self) -> &[PostRef] {
        &self.refs
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }
}
