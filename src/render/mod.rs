//! HTML pages, built with [maud](https://maud.lambda.xyz/).
//!
//! Every dynamic value passes through maud's escaping; nothing coming from
//! the content API is emitted raw.

pub mod comments;
pub mod home;
pub mod layout;
pub mod post;

use maud::{html, Markup};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

// Characters that cannot appear verbatim in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Link to a post page.
pub fn post_href(uid: &str) -> String {
    format!("/post/{}", utf8_percent_encode(uid, PATH_SEGMENT))
}

/// Standalone page for error responses.
pub fn error_page(title: &str, message: &str, site_name: &str) -> Markup {
    let body = html! {
        main class="container" {
            div class="content error-page" {
                h1 { (title) }
                p { (message) }
                a href="/" { "Voltar para a página inicial" }
            }
        }
    };

    layout::page_shell(title, site_name, body)
}
