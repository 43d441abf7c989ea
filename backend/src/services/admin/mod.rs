//! # Maintenance Endpoints
//!
//! `GET|POST /reset-db` drops the `thereviews` table, recreates it and seeds the
//! sample review. There is no authentication in front of it.

mod reset;

use actix_web::web::{get, post, resource};
use actix_web::Resource;

pub fn configure_routes() -> Resource {
    resource("/reset-db")
        .route(get().to(reset::process))
        .route(post().to(reset::process))
}
