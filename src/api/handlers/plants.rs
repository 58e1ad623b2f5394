use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use crate::{
    data::{GardenStore, StoreError},
    models::{
        request::{PlantCreateRequest, PlantMoveRequest, PlantUpdateRequest},
        AreaId, PlantId, PlotId,
    },
};

/// GET /api/plants
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    responses((status = 200, description = "All plants", body = [Plant]))
)]
#[get("/plants")]
pub async fn list_plants(store: web::Data<GardenStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list_plants().await)
}

#[utoipa::path(
    get,
    path = "/api/plants/area/{area_id}",
    tag = "plants",
    params(("area_id" = i64, Path, description = "Area id")),
    responses((status = 200, description = "Plants of the area", body = [Plant]))
)]
#[get("/plants/area/{area_id}")]
pub async fn plants_by_area(
    store: web::Data<GardenStore>,
    path: web::Path<AreaId>,
) -> impl Responder {
    HttpResponse::Ok().json(store.plants_in_area(path.into_inner()).await)
}

#[utoipa::path(
    get,
    path = "/api/plants/plot/{plot_id}",
    tag = "plants",
    params(("plot_id" = i64, Path, description = "Plot id")),
    responses((status = 200, description = "Plants of the plot", body = [Plant]))
)]
#[get("/plants/plot/{plot_id}")]
pub async fn plants_by_plot(
    store: web::Data<GardenStore>,
    path: web::Path<PlotId>,
) -> impl Responder {
    HttpResponse::Ok().json(store.plants_in_plot(path.into_inner()).await)
}

/// GET /api/plants/{id}
#[utoipa::path(
    get,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = i64, Path, description = "Plant id")),
    responses(
        (status = 200, description = "The plant", body = Plant),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{id}")]
pub async fn get_plant(
    store: web::Data<GardenStore>,
    path: web::Path<PlantId>,
) -> Result<HttpResponse, StoreError> {
    let plant = store.get_plant(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plant))
}

/// POST /api/plants
/// A plot without coordinates gets its first free cell.
#[utoipa::path(
    post,
    path = "/api/plants",
    tag = "plants",
    request_body = PlantCreateRequest,
    responses(
        (status = 200, description = "Created plant", body = Plant),
        (status = 400, description = "Invalid plant or placement", body = ErrorResponse),
        (status = 404, description = "Unknown area, plot or species", body = ErrorResponse),
        (status = 409, description = "Position occupied or plot full", body = ErrorResponse),
    )
)]
#[post("/plants")]
pub async fn create_plant(
    store: web::Data<GardenStore>,
    body: web::Json<PlantCreateRequest>,
) -> Result<HttpResponse, StoreError> {
    let request = body.into_inner();
    log::debug!("Creating plant: {request:?}");
    let plant = store.create_plant(request).await?;
    Ok(HttpResponse::Ok().json(plant))
}

/// PUT /api/plants/{id}
#[utoipa::path(
    put,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = i64, Path, description = "Plant id")),
    request_body = PlantUpdateRequest,
    responses(
        (status = 200, description = "Updated plant", body = Plant),
        (status = 404, description = "Unknown plant or species", body = ErrorResponse),
    )
)]
#[put("/plants/{id}")]
pub async fn update_plant(
    store: web::Data<GardenStore>,
    path: web::Path<PlantId>,
    body: web::Json<PlantUpdateRequest>,
) -> Result<HttpResponse, StoreError> {
    let id = path.into_inner();
    let update = body.into_inner();
    log::debug!("Updating plant {id} with {update:?}");
    let plant = store.update_plant(id, update).await?;
    Ok(HttpResponse::Ok().json(plant))
}

/// PUT /api/plants/{id}/move
#[utoipa::path(
    put,
    path = "/api/plants/{id}/move",
    tag = "plants",
    params(("id" = i64, Path, description = "Plant id")),
    request_body = PlantMoveRequest,
    responses(
        (status = 200, description = "Moved plant", body = Plant),
        (status = 400, description = "Invalid placement", body = ErrorResponse),
        (status = 404, description = "Unknown plant, area or plot", body = ErrorResponse),
        (status = 409, description = "Position occupied or plot full", body = ErrorResponse),
    )
)]
#[put("/plants/{id}/move")]
pub async fn move_plant(
    store: web::Data<GardenStore>,
    path: web::Path<PlantId>,
    body: web::Json<PlantMoveRequest>,
) -> Result<HttpResponse, StoreError> {
    let id = path.into_inner();
    let request = body.into_inner();
    log::debug!("Moving plant {id} to {request:?}");
    let plant = store.move_plant(id, request).await?;
    Ok(HttpResponse::Ok().json(plant))
}

/// DELETE /api/plants/{id}
#[utoipa::path(
    delete,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = i64, Path, description = "Plant id")),
    responses(
        (status = 200, description = "Plant removed", body = PlantRemoval),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[delete("/plants/{id}")]
pub async fn remove_plant(
    store: web::Data<GardenStore>,
    path: web::Path<PlantId>,
) -> Result<HttpResponse, StoreError> {
    let removal = store.remove_plant(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(removal))
}
