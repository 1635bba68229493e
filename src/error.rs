use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::pkg::server::uispec::ErrorBanner;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("missing or invalid fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("gateway error: {0}")]
    Gateway(String),

    #[error("job not found: {0}")]
    JobNotFound(Uuid),

    #[error("page {page} is out of range, {total_pages} pages available")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("page size must be greater than zero")]
    InvalidPageSize,

    #[error("about paragraph {0} does not exist")]
    ParagraphNotFound(usize),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for BoardError {
    fn from(e: sqlx::Error) -> Self {
        BoardError::Gateway(e.to_string())
    }
}

impl BoardError {
    pub fn status(&self) -> StatusCode {
        match self {
            BoardError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BoardError::Gateway(_) => StatusCode::BAD_GATEWAY,
            BoardError::JobNotFound(_) | BoardError::ParagraphNotFound(_) => StatusCode::NOT_FOUND,
            BoardError::PageOutOfRange { .. } | BoardError::InvalidPageSize => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", &self);
        } else {
            tracing::warn!("request rejected: {}", &self);
        }
        let message = self.to_string();
        match (ErrorBanner { message: &message }).render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("could not render error banner: {}", e);
                status.into_response()
            }
        }
    }
}
