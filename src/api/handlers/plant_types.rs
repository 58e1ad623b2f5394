use actix_web::{get, post, web, HttpResponse, Responder};

use crate::{
    data::{GardenStore, StoreError},
    models::{request::NewPlantType, PlantTypeId},
};

#[utoipa::path(
    get,
    path = "/api/plant-types",
    tag = "plant-types",
    responses((status = 200, description = "Species catalogue", body = [PlantType]))
)]
#[get("/plant-types")]
pub async fn list_plant_types(store: web::Data<GardenStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list_plant_types().await)
}

#[utoipa::path(
    get,
    path = "/api/plant-types/{id}",
    tag = "plant-types",
    params(("id" = i64, Path, description = "Plant type id")),
    responses(
        (status = 200, description = "The species", body = PlantType),
        (status = 404, description = "Unknown species", body = ErrorResponse),
    )
)]
#[get("/plant-types/{id}")]
pub async fn get_plant_type(
    store: web::Data<GardenStore>,
    path: web::Path<PlantTypeId>,
) -> Result<HttpResponse, StoreError> {
    let plant_type = store.get_plant_type(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plant_type))
}

#[utoipa::path(
    post,
    path = "/api/plant-types",
    tag = "plant-types",
    request_body = NewPlantType,
    responses(
        (status = 200, description = "Created species", body = PlantType),
        (status = 400, description = "Invalid species", body = ErrorResponse),
    )
)]
#[post("/plant-types")]
pub async fn create_plant_type(
    store: web::Data<GardenStore>,
    body: web::Json<NewPlantType>,
) -> Result<HttpResponse, StoreError> {
    let plant_type = store.create_plant_type(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plant_type))
}
