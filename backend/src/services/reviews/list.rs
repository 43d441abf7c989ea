use super::html;
use crate::db::reviews::ReviewRepository;
use crate::db::Database;
use crate::services::ServiceError;
use crate::templates::render_list;
use actix_web::{web, HttpResponse};

pub async fn process(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let reviews = ReviewRepository::new(&db).list()?;
    Ok(html(render_list(&reviews)))
}
