//! Public user profiles.

use actix_web::{HttpResponse, web};

use chirp_core::DomainError;

use super::html;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET /users/{slug} - no session required.
pub async fn show(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let user = state
        .users
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| DomainError::not_found("User", &slug))?;
    let posts = state.posts.find_by_user_id(user.id).await?;

    Ok(html(views::user_profile(&user, &posts)))
}
