use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};
use sqlx::Error as SqlxError;
use std::num::ParseIntError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum ScoopError {
    #[error("Invalid recipe ID: {0}")]
    InvalidId(#[from] ParseIntError),

    #[error("Invalid form: {0}")]
    InvalidForm(String),

    #[error("Recipe not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Template render error: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Template setup error: {0}")]
    TemplateSetup(#[from] Box<handlebars::TemplateError>),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScoopError {
    pub fn status(&self) -> StatusCode {
        match self {
            ScoopError::InvalidId(_) | ScoopError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            ScoopError::NotFound => StatusCode::NOT_FOUND,
            ScoopError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ScoopError::DatabaseError(_)
            | ScoopError::Template(_)
            | ScoopError::TemplateSetup(_)
            | ScoopError::Config(_)
            | ScoopError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<handlebars::TemplateError> for ScoopError {
    fn from(e: handlebars::TemplateError) -> Self {
        ScoopError::TemplateSetup(Box::new(e))
    }
}

impl From<figment::Error> for ScoopError {
    fn from(e: figment::Error) -> Self {
        ScoopError::Config(Box::new(e))
    }
}

/// Errors are answered as plain text carrying the error's own message.
/// Storage and template failures keep the underlying driver text in the body.
impl IntoResponse for ScoopError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
