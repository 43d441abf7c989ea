//! HTTP handlers, grouped by area.
//!
//! - `reviews`: list, create, edit, view and delete.
//! - `admin`: the `/reset-db` maintenance endpoint.

pub mod admin;
mod error;
pub mod reviews;

pub use error::ServiceError;

use actix_web::web;

/// Registers every route on the app.
///
/// `admin` goes first: the reviews scope is mounted at the root and would
/// otherwise answer `/reset-db` with its own 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin::configure_routes())
        .service(reviews::configure_routes());
}
