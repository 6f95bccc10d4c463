use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::pagination::PageOutOfRange;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Terminal request outcomes for the public pages.
///
/// `NotFound` covers an absent slug, an out-of-range page number and an
/// empty taxonomy listing; all three short-circuit the request the same
/// way. A store failure is never masked into an empty listing.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Not found")]
    NotFound,

    #[error("Content store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl From<PageOutOfRange> for PageError {
    fn from(_: PageOutOfRange) -> Self {
        PageError::NotFound
    }
}

impl actix_web::ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            PageError::NotFound => HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body("Not found"),
            PageError::Store(e) => {
                log::error!("content store failure: {e}");
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Content store unavailable")
            }
        }
    }
}
