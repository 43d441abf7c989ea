use crate::db::reviews::ReviewRepository;
use crate::db::Database;
use crate::services::ServiceError;
use actix_web::{web, HttpResponse};
use log::info;

pub async fn process(
    db: web::Data<Database>,
    review_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let review_id = review_id.into_inner();
    if ReviewRepository::new(&db).delete(review_id)? {
        info!("Deleted review {}", review_id);
    }
    Ok(HttpResponse::NoContent().finish())
}
