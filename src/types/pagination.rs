use serde::Deserialize;

use super::Post;

/// One page of search results from the content API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    // null once the last page has been served
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub results: Vec<Post>,
}

impl PostPagination {
    /// Appends the following page after the results already loaded.
    pub fn merge(&mut self, next: PostPagination) {
        self.page = next.page;
        self.total_pages = next.total_pages;
        self.next_page = next.next_page;
        self.results.extend(next.results);
    }

    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }
}
