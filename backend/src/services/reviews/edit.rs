use super::{html, parse_form, redirect_to_index};
use crate::db::reviews::ReviewRepository;
use crate::db::Database;
use crate::services::ServiceError;
use crate::templates::render_edit_form;
use actix_web::{web, HttpResponse};
use common::requests::ReviewForm;
use log::warn;

pub async fn form(
    db: web::Data<Database>,
    review_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let review_id = review_id.into_inner();
    match ReviewRepository::new(&db).get(review_id)? {
        Some(review) => Ok(html(render_edit_form(&review))),
        None => {
            warn!("Edit requested for unknown review {}", review_id);
            Err(ServiceError::NotFound)
        }
    }
}

/// Checks the review exists before looking at the body, so an unknown id is a
/// 404 even when the form is missing, partial or malformed.
pub async fn process(
    db: web::Data<Database>,
    review_id: web::Path<i64>,
    form: Result<web::Form<ReviewForm>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let review_id = review_id.into_inner();
    let repo = ReviewRepository::new(&db);
    if repo.get(review_id).map_err(ServiceError::from)?.is_none() {
        warn!("Update requested for unknown review {}", review_id);
        return Err(ServiceError::NotFound.into());
    }
    let form = form?;
    let input = parse_form(&form)?;
    repo.update(review_id, input.title, input.text, input.rating)
        .map_err(ServiceError::from)?;
    Ok(redirect_to_index())
}
