//! Error handling - every failure becomes a redirect or an HTML page.
//!
//! Validation and authorization failures never render an error body: the
//! redirect target is the signal.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header};
use std::fmt;

use chirp_core::error::{DomainError, RepoError};
use chirp_core::ports::AuthError;

use crate::views;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// No session; send the client to the login page.
    Unauthenticated,
    /// Session user does not own the resource; back to the post list.
    Forbidden,
    /// A submitted form was rejected; send the client back to it.
    Invalid { redirect_to: String, reason: String },
    NotFound(String),
    Internal(String),
}

impl AppError {
    pub fn invalid(redirect_to: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Invalid {
            redirect_to: redirect_to.into(),
            reason: reason.into(),
        }
    }

    /// Where the client is sent, for errors answered with a redirect.
    pub fn location(&self) -> Option<&str> {
        match self {
            AppError::Unauthenticated => Some("/login"),
            AppError::Forbidden => Some("/posts"),
            AppError::Invalid { redirect_to, .. } => Some(redirect_to),
            AppError::NotFound(_) | AppError::Internal(_) => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthenticated => write!(f, "Login required"),
            AppError::Forbidden => write!(f, "Not the owner"),
            AppError::Invalid { reason, .. } => write!(f, "Invalid submission: {}", reason),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated | AppError::Forbidden | AppError::Invalid { .. } => {
                StatusCode::FOUND
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) => views::not_found(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                views::internal_error()
            }
            AppError::Unauthenticated | AppError::Forbidden | AppError::Invalid { .. } => {
                let location = self.location().unwrap_or("/");
                tracing::debug!(%location, reason = %self, "Redirecting");
                return HttpResponse::Found()
                    .insert_header((header::LOCATION, location))
                    .finish();
            }
        };

        HttpResponse::build(self.status_code())
            .content_type(header::ContentType::html())
            .body(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, key } => {
                AppError::NotFound(format!("{} {} does not exist", entity_type, key))
            }
            DomainError::Validation(msg) | DomainError::Duplicate(msg) => {
                AppError::invalid("/", msg)
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => {
                tracing::warn!("Constraint violation: {}", msg);
                AppError::Internal("Database constraint violated".to_string())
            }
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::invalid("/login", "invalid credentials"),
            other => {
                tracing::error!("Password check failed: {}", other);
                AppError::Internal("Password check failed".to_string())
            }
        }
    }
}

/// Turn a domain validation failure into a redirect back to the submitting form.
pub trait OrRedirect<T> {
    fn or_redirect_to(self, location: impl Into<String>) -> AppResult<T>;
}

impl<T> OrRedirect<T> for Result<T, DomainError> {
    fn or_redirect_to(self, location: impl Into<String>) -> AppResult<T> {
        self.map_err(|err| match err {
            DomainError::Validation(reason) | DomainError::Duplicate(reason) => {
                AppError::invalid(location, reason)
            }
            other => other.into(),
        })
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
