use crate::db::Database;
use crate::services::ServiceError;
use actix_web::{web, HttpResponse};

pub async fn process(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    db.reset()?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Database has been reset!"))
}
