//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod users;


use actix_web::http::header;
use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(auth::index))
        .route("/health", web::get().to(health::health_check))
        // Auth routes
        .service(
            web::resource("/signup")
                .route(web::get().to(auth::signup_page))
                .route(web::post().to(auth::signup)),
        )
        .service(
            web::resource("/login")
                .route(web::get().to(auth::login_page))
                .route(web::post().to(auth::login)),
        )
        .route("/logout", web::get().to(auth::logout))
        // Post routes; `/posts/new` must be registered before `/posts/{id}`
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::index))
                .route(web::post().to(posts::create)),
        )
        .route("/posts/new", web::get().to(posts::new_form))
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(posts::show))
                .route(web::post().to(posts::update))
                .route(web::put().to(posts::update))
                .route(web::patch().to(posts::update))
                .route(web::delete().to(posts::destroy)),
        )
        .route("/posts/{id}/edit", web::get().to(posts::edit_form))
        .route("/posts/{id}/delete", web::post().to(posts::destroy))
        // Public profiles
        .route("/users/{slug}", web::get().to(users::show));
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("No such page".to_string()))
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body)
}

pub(crate) fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}
