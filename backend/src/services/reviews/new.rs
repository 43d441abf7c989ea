use super::{html, parse_form, redirect_to_index};
use crate::db::reviews::ReviewRepository;
use crate::db::Database;
use crate::services::ServiceError;
use crate::templates::render_new_form;
use actix_web::{web, HttpResponse};
use common::requests::ReviewForm;
use log::info;

pub async fn form() -> HttpResponse {
    html(render_new_form())
}

pub async fn process(
    db: web::Data<Database>,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, ServiceError> {
    let input = parse_form(&form)?;
    let id = ReviewRepository::new(&db).create(input.title, input.text, input.rating)?;
    info!("Created review {}", id);
    Ok(redirect_to_index())
}
