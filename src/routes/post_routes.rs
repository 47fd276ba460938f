use actix_web::{web, HttpResponse};

use crate::error::{BlogError, ErrorPage};
use crate::prismic::{fetch_listing, POST_TYPE};
use crate::render;
use crate::render::post::PostPage;
use crate::state::AppState;
use crate::utils::{calculate_reading_time, resolve_neighbors};

async fn show_post(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ErrorPage> {
    load_post(slug.into_inner(), &state)
        .await
        .map_err(|err| err.into_page(&state.config.site_name))
}

async fn load_post(slug: String, state: &AppState) -> Result<HttpResponse, BlogError> {
    let source = &*state.source;

    let (post, listing) =
        futures::try_join!(source.get_by_uid(POST_TYPE, &slug), fetch_listing(source))?;

    let post = post.ok_or_else(|| BlogError::NotFound(slug.clone()))?;
    // Drafts have no place in the timeline and nothing to show yet.
    if post.first_publication_date.is_none() {
        return Err(BlogError::NotFound(slug));
    }

    let reading_time = calculate_reading_time(&post.data.content);
    let neighbors = resolve_neighbors(&slug, &listing);

    log::debug!(
        "rendering post {} [{}] ({} min, previous={:?}, next={:?})",
        slug,
        post.id,
        reading_time,
        neighbors.previous.map(|r| &r.uid),
        neighbors.next.map(|r| &r.uid)
    );

    let page = PostPage {
        post: &post,
        reading_time,
        neighbors,
    };
    let markup = render::post::render(&page, &state.config);

    Ok(HttpResponse::Ok()
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(markup.into_string()))
}

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/post/{slug}").route(web::get().to(show_post)));
}
