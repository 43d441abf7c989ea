use super::html;
use crate::db::reviews::ReviewRepository;
use crate::db::Database;
use crate::services::ServiceError;
use crate::templates::render_detail;
use actix_web::{web, HttpResponse};
use log::warn;

pub async fn process(
    db: web::Data<Database>,
    review_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let review_id = review_id.into_inner();
    let review = ReviewRepository::new(&db).get(review_id)?.ok_or_else(|| {
        warn!("Unknown review {}", review_id);
        ServiceError::NotFound
    })?;
    Ok(html(render_detail(&review)))
}
