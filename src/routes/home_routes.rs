use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{BlogError, ErrorPage};
use crate::prismic::{Predicate, QueryOptions, SortOrder, FIRST_PUBLICATION_DATE, POST_TYPE};
use crate::render;
use crate::state::AppState;

// Upper bound on cursors followed for a single render.
const MAX_PAGES: u32 = 50;

// Kept as text so a malformed value falls back to the first page.
#[derive(Debug, Deserialize)]
struct HomeParams {
    pages: Option<String>,
}

impl HomeParams {
    fn pages(&self) -> u32 {
        let requested = self
            .pages
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1);

        requested.clamp(1, MAX_PAGES as i64) as u32
    }
}

async fn home(
    params: web::Query<HomeParams>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ErrorPage> {
    load_home(params.pages(), &state)
        .await
        .map_err(|err| err.into_page(&state.config.site_name))
}

async fn load_home(pages: u32, state: &AppState) -> Result<HttpResponse, BlogError> {
    let options = QueryOptions::new()
        .page_size(state.config.posts_page_size)
        .order_by(SortOrder::desc(FIRST_PUBLICATION_DATE));
    let mut pagination = state
        .source
        .query(&[Predicate::at("document.type", POST_TYPE)], &options)
        .await?;

    let mut loaded = 1;
    while loaded < pages {
        let Some(next_page) = pagination.next_page.clone() else {
            break;
        };
        let page = state.source.fetch_page(&next_page).await?;
        pagination.merge(page);
        loaded += 1;
    }

    log::debug!(
        "home rendered with {} posts, page {} of {}",
        pagination.results.len(),
        pagination.page,
        pagination.total_pages
    );

    let markup = render::home::render(&pagination, loaded, &state.config.site_name);
    Ok(HttpResponse::Ok()
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(markup.into_string()))
}

pub fn home_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)));
}
