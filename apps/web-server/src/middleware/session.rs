//! Cookie sessions and the `SessionContext` extractor.
//!
//! Handlers receive the session explicitly and only deal with the signed-in
//! user's id.

use actix_session::{
    Session, SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};
use uuid::Uuid;

use crate::middleware::error::{AppError, AppResult};

pub const SESSION_COOKIE: &str = "chirp_session";
pub(crate) const USER_ID_KEY: &str = "user_id";

/// Build the cookie session middleware.
///
/// Cookie content is encrypted, so the stored user id cannot be read or
/// forged by the client.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_path("/".to_string())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// The current request's session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind the session to `user_id`, issuing a fresh session.
    pub fn persist_user(&self, user_id: Uuid) -> AppResult<()> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.to_string())
            .map_err(|e| AppError::Internal(format!("failed to persist session: {e}")))
    }

    /// The signed-in user's id, if any. Unreadable values count as signed out.
    pub fn user_id(&self) -> Option<Uuid> {
        let raw = match self.0.get::<String>(USER_ID_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("unreadable session: {e}");
                return None;
            }
        };

        match Uuid::parse_str(&raw) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("invalid user id in session cookie: {e}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id().is_some()
    }

    /// The signed-in user's id, or `AppError::Unauthenticated`.
    pub fn require_user_id(&self) -> AppResult<Uuid> {
        self.user_id().ok_or(AppError::Unauthenticated)
    }

    /// Drop everything stored in the session.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        ready(
            Session::from_request(req, payload)
                .into_inner()
                .map(SessionContext::new),
        )
    }
}
