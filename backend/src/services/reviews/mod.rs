//! # Review Pages
//!
//! Every route that reads or writes reviews. Handlers are stateless: each one
//! builds a `ReviewRepository` over the shared `Database` and renders HTML from
//! `crate::templates`.
//!
//! ## Registered Routes:
//!
//! *   **`GET /`**: table of all reviews.
//! *   **`GET /new`**, **`POST /new`**: creation form and its submission. A
//!     successful submission redirects to `/` with `303 See Other`.
//! *   **`GET /edit/{review_id}`**, **`POST /edit/{review_id}`**: pre-filled form
//!     and its submission. Unknown ids answer `404 Review not found`.
//! *   **`GET /review/{review_id}`**: detail page, `404` for unknown ids.
//! *   **`POST /delete/{review_id}`**: always `204 No Content`, whether or not the
//!     review existed.
//!
//! A `rating` that is not an integer, or a title longer than 60 characters, is
//! rejected with `400 Bad Request`.

mod delete;
mod edit;
mod list;
mod new;
mod view;

use crate::services::ServiceError;
use actix_web::http::header;
use actix_web::web::{get, post, resource, scope};
use actix_web::{HttpResponse, Scope};
use common::model::review::TITLE_MAX_LEN;
use common::requests::ReviewForm;

/// Each path is a `resource`, so a known path hit with the wrong method gets 405.
pub fn configure_routes() -> Scope {
    scope("")
        .service(resource("/").route(get().to(list::process)))
        .service(
            resource("/new")
                .route(get().to(new::form))
                .route(post().to(new::process)),
        )
        .service(
            resource("/edit/{review_id}")
                .route(get().to(edit::form))
                .route(post().to(edit::process)),
        )
        .service(resource("/delete/{review_id}").route(post().to(delete::process)))
        .service(resource("/review/{review_id}").route(get().to(view::process)))
}

/// Field values of a submitted form after coercion.
struct ReviewInput<'a> {
    title: &'a str,
    text: &'a str,
    rating: i64,
}

fn parse_form(form: &ReviewForm) -> Result<ReviewInput<'_>, ServiceError> {
    let rating = form
        .rating()
        .map_err(|_| ServiceError::InvalidRating(form.rating.clone()))?;
    let title_len = form.title.chars().count();
    if title_len > TITLE_MAX_LEN {
        return Err(ServiceError::TitleTooLong(title_len));
    }
    Ok(ReviewInput {
        title: &form.title,
        text: &form.text,
        rating,
    })
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn redirect_to_index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
