use std::sync::Arc;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;

mod config;
mod error;
mod prismic;
mod render;
mod routes;
mod state;
mod types;
mod utils;

use config::Config;
use prismic::PrismicClient;
use routes::{health_routes, home_routes, post_routes};
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let bind_addr = config.bind_addr.clone();

    let client = PrismicClient::new(
        reqwest::Client::new(),
        &config.prismic_api_endpoint,
        config.prismic_access_token.clone(),
    );
    let state = AppState::new(Arc::new(client), config);

    log::info!("starting server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(state.clone()))
            .configure(home_routes)
            .configure(post_routes)
            .configure(health_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
