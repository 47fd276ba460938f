//! Errors surfaced while serving pages.
//!
//! Handlers turn a [`BlogError`] into an [`ErrorPage`], which renders the
//! same shell the rest of the site uses, so a failed fetch never shows a
//! blank response.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::render;

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// No published post with this uid.
    #[error("post not found: {0}")]
    NotFound(String),

    /// The content API could not be reached or answered with an error status.
    #[error("content source request failed: {0}")]
    Request(reqwest::Error),

    /// The API metadata did not advertise a master ref to query against.
    #[error("content source has no master ref")]
    MissingMasterRef,

    #[error("invalid configuration: {0}")]
    Config(String),
}

// Request URLs carry the access token; keep them out of messages and logs.
impl From<reqwest::Error> for BlogError {
    fn from(err: reqwest::Error) -> Self {
        BlogError::Request(err.without_url())
    }
}

impl BlogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Request(_) | Self::MissingMasterRef => StatusCode::BAD_GATEWAY,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attaches the site name the error page is rendered under.
    pub fn into_page(self, site_name: &str) -> ErrorPage {
        ErrorPage {
            error: self,
            site_name: site_name.to_string(),
        }
    }
}

/// A [`BlogError`] ready to be answered as HTML.
#[derive(Debug)]
pub struct ErrorPage {
    error: BlogError,
    site_name: String,
}

impl fmt::Display for ErrorPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl ResponseError for ErrorPage {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let (title, message) = match &self.error {
            BlogError::NotFound(uid) => {
                log::info!("post not found: {}", uid);
                (
                    "Post não encontrado",
                    "O post que você procura não existe ou ainda não foi publicado.",
                )
            }
            BlogError::Request(_) | BlogError::MissingMasterRef => {
                log::error!("content source error: {}", self.error);
                (
                    "Conteúdo indisponível",
                    "Não foi possível carregar o conteúdo agora. Tente novamente em instantes.",
                )
            }
            BlogError::Config(_) => {
                log::error!("{}", self.error);
                (
                    "Erro interno",
                    "Ocorreu um erro inesperado. Tente novamente mais tarde.",
                )
            }
        };

        HttpResponse::build(self.status_code())
            .content_type(mime::TEXT_HTML_UTF_8)
            .body(render::error_page(title, message, &self.site_name).into_string())
    }
}
