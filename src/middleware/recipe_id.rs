use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use crate::error::ScoopError;

/// Recipe id taken from the single `{id}` path segment.
///
/// A segment that is not an integer is rejected with 400 before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeId(pub i64);

impl<S> FromRequestParts<S> for RecipeId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = match Path::<String>::from_request_parts(parts, state).await {
            Ok(p) => p,
            Err(rejection) => return Err(rejection.into_response()),
        };
        raw.parse::<i64>()
            .map(RecipeId)
            .map_err(|e| ScoopError::from(e).into_response())
    }
}
