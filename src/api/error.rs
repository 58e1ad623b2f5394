use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::data::StoreError;
use crate::models::request::{ErrorCode, ErrorResponse};

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::PositionOccupied | ErrorCode::PlotFull => StatusCode::CONFLICT,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            code: self.code(),
            error: self.to_string(),
        })
    }
}
