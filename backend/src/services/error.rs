use crate::db;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

/// Failures a review handler can surface to the client.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Review not found")]
    NotFound,

    #[error("Invalid rating: {0:?}")]
    InvalidRating(String),

    #[error("Title must be at most 60 characters, got {0}")]
    TitleTooLong(usize),

    #[error(transparent)]
    Database(#[from] db::Error),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::InvalidRating(_) | ServiceError::TitleTooLong(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ServiceError::Database(e) => {
                error!("{}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(body)
    }
}
