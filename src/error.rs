use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use tracing::debug;

use crate::models::Envelope;

/// Error type of all REST handlers. The display text is the `message` sent
/// back to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed")]
    Parse,
    /// Empty `id` path segment. Answered with 500, as existing clients expect.
    #[error("{0}")]
    MissingId(&'static str),
    /// Any failed store call, including a record that does not exist.
    #[error("{0}")]
    Store(&'static str),
    #[error("invalid email or password")]
    Unauthorized,
    #[error("failed to generate token")]
    Token,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Parse => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MissingId(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Token => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Envelope::message(self.to_string()))
    }
}

/// Error handler for the actix JSON extractor, turns every malformed body
/// into a 422.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "Rejected request body");
    InternalError::from_response(err, ApiError::Parse.error_response()).into()
}

/// The raw `id` path segment, empty if the route captured none.
pub fn path_id(req: &HttpRequest) -> &str {
    req.match_info().get("id").unwrap_or_default()
}

/// Parses the raw `id` path segment.
///
/// An empty segment is a [`ApiError::MissingId`]; anything that is not an
/// integer can never match a row and is reported like a failed lookup.
pub fn parse_id(
    raw: &str,
    missing: &'static str,
    failed: &'static str,
) -> Result<i64, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::MissingId(missing));
    }
    raw.parse().map_err(|_| ApiError::Store(failed))
}
