//! Post CRUD. Every action requires a session; edit, update and delete
//! also require the session user to own the post.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use chirp_core::DomainError;
use chirp_core::domain::{Post, User};
use chirp_shared::dto::PostForm;

use super::{html, redirect};
use crate::middleware::error::{AppError, AppResult, OrRedirect};
use crate::middleware::session::SessionContext;
use crate::state::AppState;
use crate::views;

/// Load the signed-in user. A session pointing at a vanished user is dropped.
async fn current_user(state: &AppState, session: &SessionContext) -> AppResult<User> {
    let user_id = session.require_user_id()?;
    match state.users.find_by_id(user_id).await? {
        Some(user) => Ok(user),
        None => {
            tracing::warn!(%user_id, "Session refers to unknown user");
            session.clear();
            Err(AppError::Unauthenticated)
        }
    }
}

fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DomainError::not_found("Post", raw).into())
}

async fn find_post(state: &AppState, raw_id: &str) -> AppResult<Post> {
    let id = parse_post_id(raw_id)?;
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Post", id).into())
}

/// Load a post the signed-in user owns; anyone else is sent back to `/posts`.
async fn find_owned_post(state: &AppState, user_id: Uuid, raw_id: &str) -> AppResult<Post> {
    let post = find_post(state, raw_id).await?;
    if !post.is_owned_by(user_id) {
        tracing::info!(%user_id, post_id = %post.id, "Rejected access to another user's post");
        return Err(AppError::Forbidden);
    }
    Ok(post)
}

async fn render_post(state: &AppState, post: &Post) -> AppResult<HttpResponse> {
    let author = state.users.find_by_id(post.user_id).await?;
    Ok(html(views::show_post(post, author.as_ref())))
}

/// GET /posts
pub async fn index(
    state: web::Data<AppState>,
    session: SessionContext,
) -> AppResult<HttpResponse> {
    let user = current_user(&state, &session).await?;
    let posts = state.posts.find_all().await?;

    Ok(html(views::posts_index(&user, &posts)))
}

/// GET /posts/new
pub async fn new_form(session: SessionContext) -> AppResult<HttpResponse> {
    session.require_user_id()?;
    Ok(html(views::new_post_form()))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let user = current_user(&state, &session).await?;

    let post = Post::new(user.id, form.into_inner().content).or_redirect_to("/posts/new")?;
    let post = state.posts.insert(post).await?;
    tracing::info!(post_id = %post.id, user_id = %user.id, "Post created");

    Ok(redirect(format!("/posts/{}", post.id)))
}

/// GET /posts/{id}
pub async fn show(
    state: web::Data<AppState>,
    session: SessionContext,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    session.require_user_id()?;
    let post = find_post(&state, &path).await?;

    render_post(&state, &post).await
}

/// GET /posts/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    session: SessionContext,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let post = find_owned_post(&state, user_id, &path).await?;

    Ok(html(views::edit_post_form(&post)))
}

/// POST|PUT|PATCH /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    session: SessionContext,
    path: web::Path<String>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let mut post = find_owned_post(&state, user_id, &path).await?;

    post.edit(form.into_inner().content)
        .or_redirect_to(format!("/posts/{}/edit", post.id))?;
    let post = state.posts.update(post).await?;
    tracing::info!(post_id = %post.id, %user_id, "Post updated");

    render_post(&state, &post).await
}

/// DELETE /posts/{id}, POST /posts/{id}/delete
pub async fn destroy(
    state: web::Data<AppState>,
    session: SessionContext,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let post = find_owned_post(&state, user_id, &path).await?;

    state.posts.delete(post.id).await?;
    tracing::info!(post_id = %post.id, %user_id, "Post deleted");

    Ok(html(views::post_deleted()))
}
