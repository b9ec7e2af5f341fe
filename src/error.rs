//!
//! # Error Handling
//!
//! This module defines the custom error type `ApiError` used throughout the
//! application. It centralizes error management, providing one consistent
//! mapping from internal failures to HTTP responses.
//!
//! `ApiError` implements `actix_web::error::ResponseError` so handlers and
//! middleware can return it directly and have it converted into a JSON
//! response with a fixed status code and a stable, generic message. `From`
//! implementations for `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error`, and `bcrypt::BcryptError` allow conversion
//! with the `?` operator. Internal detail is logged server-side and never
//! included in a client-visible payload.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// All failures the API can surface to a client.
#[derive(Debug)]
pub enum ApiError {
    /// The request body is missing or violates a required input rule (HTTP 400).
    Validation(String),
    /// Login failed. Deliberately carries no detail: an unknown username and a
    /// wrong password produce the same response (HTTP 401).
    InvalidCredentials,
    /// No bearer token was presented on a protected route (HTTP 403).
    MissingToken,
    /// A bearer token was presented but is malformed, has a bad signature, or
    /// has expired (HTTP 401).
    InvalidToken,
    /// The addressed resource does not exist for this caller (HTTP 404).
    /// Also covers resources owned by someone else.
    NotFound(String),
    /// Any unexpected server-side fault (HTTP 500). The payload is the
    /// internal detail, which is logged and replaced by a generic message in
    /// the response.
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            ApiError::InvalidCredentials => write!(f, "Invalid credentials"),
            ApiError::MissingToken => write!(f, "No token provided"),
            ApiError::InvalidToken => write!(f, "Invalid token"),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            ApiError::InvalidCredentials => HttpResponse::Unauthorized().json(json!({
                "error": "Invalid credentials"
            })),
            ApiError::MissingToken => HttpResponse::Forbidden().json(json!({
                "error": "No token provided"
            })),
            ApiError::InvalidToken => HttpResponse::Unauthorized().json(json!({
                "error": "Invalid token"
            })),
            ApiError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            ApiError::Internal(detail) => {
                log::error!("internal error: {}", detail);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Something went wrong!"
                }))
            }
        }
    }
}

/// Converts `validator::ValidationErrors` into `ApiError::Validation`.
///
/// Only the first per-field message is kept, so clients see the stable string
/// declared on the field (e.g. "Title is required") rather than validator's
/// own formatting.
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> ApiError {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field| field.iter())
            .find_map(|error| error.message.clone())
            .map(|msg| msg.into_owned())
            .unwrap_or_else(|| "Invalid request body".to_string());
        ApiError::Validation(message)
    }
}

/// Converts `jsonwebtoken::errors::Error` into `ApiError::InvalidToken`.
///
/// Bad signature, malformed token, and expired token all collapse into the
/// same client-visible failure.
impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(_: jsonwebtoken::errors::Error) -> ApiError {
        ApiError::InvalidToken
    }
}

/// Converts `bcrypt::BcryptError` into `ApiError::Internal`.
///
/// Hash verification only errors on a corrupt stored hash, which is a server
/// fault, not a client one.
impl From<bcrypt::BcryptError> for ApiError {
    fn from(error: bcrypt::BcryptError) -> ApiError {
        ApiError::Internal(error.to_string())
    }
}
