//! Sign up, log in and log out.

use actix_web::{HttpResponse, web};

use chirp_core::DomainError;
use chirp_core::domain::User;
use chirp_core::domain::user::slugify;
use chirp_core::error::RepoError;
use chirp_core::ports::AuthError;
use chirp_shared::dto::{LoginForm, SignupForm};

use super::{html, redirect};
use crate::middleware::error::{AppError, AppResult, OrRedirect};
use crate::middleware::session::SessionContext;
use crate::state::AppState;
use crate::views;

/// GET /
pub async fn index() -> HttpResponse {
    html(views::index())
}

/// GET /signup
pub async fn signup_page(session: SessionContext) -> HttpResponse {
    if session.is_authenticated() {
        return redirect("/posts");
    }
    html(views::signup_form())
}

/// POST /signup
pub async fn signup(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<SignupForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if form.has_blank_field() {
        return Err(AppError::invalid(
            "/signup",
            "username, email and password are required",
        ));
    }

    let username = form.username.trim();
    if state.users.find_by_username(username).await?.is_some()
        || state.users.find_by_slug(&slugify(username)).await?.is_some()
    {
        tracing::info!(%username, "Rejected sign-up for a taken username");
        return Err(DomainError::Duplicate(format!("username {username} is taken")))
            .or_redirect_to("/signup");
    }

    let password_hash = state.passwords.hash(&form.password)?;
    let user = User::new(username, form.email, password_hash).or_redirect_to("/signup")?;

    let user = match state.users.insert(user).await {
        Ok(user) => user,
        // Lost a race with a concurrent sign-up for the same name
        Err(RepoError::Constraint(reason)) => {
            return Err(DomainError::Duplicate(reason)).or_redirect_to("/signup");
        }
        Err(e) => return Err(e.into()),
    };

    session.persist_user(user.id)?;
    tracing::info!(username = %user.username, user_id = %user.id, "User signed up");

    Ok(redirect("/posts"))
}

/// GET /login
pub async fn login_page(session: SessionContext) -> HttpResponse {
    if session.is_authenticated() {
        return redirect("/posts");
    }
    html(views::login_form())
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if form.has_blank_field() {
        return Err(AppError::invalid("/login", "username and password are required"));
    }

    let Some(user) = state.users.find_by_username(form.username.trim()).await? else {
        state.passwords.verify_unknown(&form.password);
        return Err(AuthError::InvalidCredentials.into());
    };

    state
        .passwords
        .verify(&form.password, &user.password_hash)
        .inspect_err(|e| {
            if matches!(e, AuthError::InvalidCredentials) {
                tracing::info!(username = %user.username, "Rejected login");
            }
        })?;

    session.persist_user(user.id)?;
    tracing::info!(username = %user.username, user_id = %user.id, "User logged in");

    Ok(redirect("/posts"))
}

/// GET /logout
pub async fn logout(session: SessionContext) -> HttpResponse {
    match session.user_id() {
        Some(user_id) => {
            session.clear();
            tracing::info!(%user_id, "User logged out");
            redirect("/login")
        }
        None => redirect("/"),
    }
}
