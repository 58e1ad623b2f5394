use actix_web::{web, HttpResponse};

use crate::models::request::{ErrorCode, ErrorResponse};

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;

/// JSON extractor config that answers malformed bodies with a structured 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        log::warn!("{message}");
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse {
                code: ErrorCode::ValidationError,
                error: message,
            }),
        )
        .into()
    })
}
