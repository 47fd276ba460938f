use maud::{html, Markup};

use super::{layout, post_href};
use crate::types::{Post, PostPagination};
use crate::utils::format_date;

/// Home listing. `pages` is how many result pages are already merged in,
/// so the "load more" link asks for one more.
pub fn render(pagination: &PostPagination, pages: u32, site_name: &str) -> Markup {
    let body = html! {
        main class="container" {
            div class="content" {
                @for post in &pagination.results {
                    (post_item(post))
                }
                @if pagination.has_more() {
                    a class="more-posts" href=(format!("/?pages={}", pages + 1)) {
                        "Carregar mais posts"
                    }
                }
            }
        }
    };

    layout::page_shell("Home", site_name, body)
}

fn post_item(post: &Post) -> Markup {
    let href = post.uid.as_deref().map(post_href);

    html! {
        a class="post-item" href=[href] {
            strong { (post.data.title) }
            p { (post.data.subtitle) }
            div class="info" {
                @if let Some(published) = &post.first_publication_date {
                    time datetime=(published.to_rfc3339()) { (format_date(published)) }
                }
                span { (post.data.author) }
            }
        }
    }
}
