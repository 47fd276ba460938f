use maud::{html, Markup};

use super::{comments, layout, post_href};
use crate::config::Config;
use crate::types::{ContentBlock, Post, PostRef, RichTextFragment};
use crate::utils::{format_date, format_edited_at, Neighbors};

/// Everything the post page shows besides the document itself.
pub struct PostPage<'a> {
    pub post: &'a Post,
    pub reading_time: usize,
    pub neighbors: Neighbors<'a>,
}

pub fn render(page: &PostPage<'_>, config: &Config) -> Markup {
    let post = page.post;

    let body = html! {
        @if let Some(url) = &post.data.banner.url {
            div class="banner" {
                img src=(url) alt=(post.data.banner.alt.as_deref().unwrap_or(""));
            }
        }
        main class="container" {
            article class="content post" {
                h1 { (post.data.title) }
                div class="info" {
                    @if let Some(published) = &post.first_publication_date {
                        time datetime=(published.to_rfc3339()) { (format_date(published)) }
                    }
                    span { (post.data.author) }
                    span class="reading-time" { (page.reading_time) " min" }
                }
                @if post.was_edited() {
                    @if let Some(edited) = &post.last_publication_date {
                        p class="edited" { (format_edited_at(edited)) }
                    }
                }
                @for block in &post.data.content {
                    (content_block(block))
                }
            }
            div class="content" {
                @if !page.neighbors.is_empty() {
                    (neighbors(&page.neighbors))
                }
                (comments::utterances(&config.utterances_repo, &config.utterances_theme))
            }
        }
    };

    layout::page_shell(&post.data.title, &config.site_name, body)
}

fn content_block(block: &ContentBlock) -> Markup {
    html! {
        section class="block" {
            h2 { (block.heading) }
            div class="block-body" { (rich_text(&block.body)) }
        }
    }
}

enum Group<'a> {
    Single(&'a RichTextFragment),
    List {
        ordered: bool,
        items: Vec<&'a RichTextFragment>,
    },
}

/// Consecutive list items of the same kind share one list element.
fn group_fragments(fragments: &[RichTextFragment]) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();

    for fragment in fragments {
        if !fragment.is_list_item() {
            groups.push(Group::Single(fragment));
            continue;
        }

        let ordered = fragment.kind == "o-list-item";
        if let Some(Group::List { ordered: current, items }) = groups.last_mut() {
            if *current == ordered {
                items.push(fragment);
                continue;
            }
        }
        groups.push(Group::List {
            ordered,
            items: vec![fragment],
        });
    }

    groups
}

fn rich_text(fragments: &[RichTextFragment]) -> Markup {
    html! {
        @for group in group_fragments(fragments) {
            @match group {
                Group::Single(fragment) => {
                    (text_block(fragment))
                }
                Group::List { ordered: true, items } => {
                    ol { @for item in items { li { (item.text) } } }
                }
                Group::List { ordered: false, items } => {
                    ul { @for item in items { li { (item.text) } } }
                }
            }
        }
    }
}

fn text_block(fragment: &RichTextFragment) -> Markup {
    let text = &fragment.text;
    match fragment.kind.as_str() {
        "heading1" | "heading2" => html! { h2 { (text) } },
        "heading3" => html! { h3 { (text) } },
        "heading4" => html! { h4 { (text) } },
        "heading5" => html! { h5 { (text) } },
        "heading6" => html! { h6 { (text) } },
        "preformatted" => html! { pre { (text) } },
        _ => html! { p { (text) } },
    }
}

fn neighbors(neighbors: &Neighbors<'_>) -> Markup {
    html! {
        nav class="neighbors" {
            @if let Some(previous) = neighbors.previous {
                (neighbor_link(previous, "Post anterior", "previous"))
            }
            @if let Some(next) = neighbors.next {
                (neighbor_link(next, "Próximo post", "next"))
            }
        }
    }
}

fn neighbor_link(post_ref: &PostRef, label: &str, class: &str) -> Markup {
    html! {
        a class=(class) href=(post_href(&post_ref.uid)) {
            (post_ref.title)
            span { (label) }
        }
    }
}
