use actix_web::{get, post, web, HttpResponse, Responder};

use crate::{
    data::{GardenStore, StoreError},
    models::{request::NewArea, AreaId},
};

/// GET /api/areas
#[utoipa::path(
    get,
    path = "/api/areas",
    tag = "areas",
    responses((status = 200, description = "All growing areas", body = [Area]))
)]
#[get("/areas")]
pub async fn list_areas(store: web::Data<GardenStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list_areas().await)
}

/// GET /api/areas/{id}
#[utoipa::path(
    get,
    path = "/api/areas/{id}",
    tag = "areas",
    params(("id" = i64, Path, description = "Area id")),
    responses(
        (status = 200, description = "The area", body = Area),
        (status = 404, description = "Unknown area", body = ErrorResponse),
    )
)]
#[get("/areas/{id}")]
pub async fn get_area(
    store: web::Data<GardenStore>,
    path: web::Path<AreaId>,
) -> Result<HttpResponse, StoreError> {
    let area = store.get_area(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(area))
}

/// POST /api/areas
#[utoipa::path(
    post,
    path = "/api/areas",
    tag = "areas",
    request_body = NewArea,
    responses(
        (status = 200, description = "Created area", body = Area),
        (status = 400, description = "Invalid area", body = ErrorResponse),
    )
)]
#[post("/areas")]
pub async fn create_area(
    store: web::Data<GardenStore>,
    body: web::Json<NewArea>,
) -> Result<HttpResponse, StoreError> {
    let area = store.create_area(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(area))
}
