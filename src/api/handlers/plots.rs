use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use crate::{
    data::{GardenStore, StoreError},
    models::{request::NewPlot, AreaId, PlotId},
};

/// GET /api/plots
#[utoipa::path(
    get,
    path = "/api/plots",
    tag = "plots",
    responses((status = 200, description = "All plots", body = [Plot]))
)]
#[get("/plots")]
pub async fn list_plots(store: web::Data<GardenStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list_plots().await)
}

/// GET /api/plots/area/{areaId}
#[utoipa::path(
    get,
    path = "/api/plots/area/{area_id}",
    tag = "plots",
    params(("area_id" = i64, Path, description = "Area id")),
    responses((status = 200, description = "Plots of the area", body = [Plot]))
)]
#[get("/plots/area/{area_id}")]
pub async fn plots_by_area(
    store: web::Data<GardenStore>,
    path: web::Path<AreaId>,
) -> impl Responder {
    HttpResponse::Ok().json(store.plots_in_area(path.into_inner()).await)
}

/// GET /api/plots/{id}
#[utoipa::path(
    get,
    path = "/api/plots/{id}",
    tag = "plots",
    params(("id" = i64, Path, description = "Plot id")),
    responses(
        (status = 200, description = "The plot", body = Plot),
        (status = 404, description = "Unknown plot", body = ErrorResponse),
    )
)]
#[get("/plots/{id}")]
pub async fn get_plot(
    store: web::Data<GardenStore>,
    path: web::Path<PlotId>,
) -> Result<HttpResponse, StoreError> {
    let plot = store.get_plot(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plot))
}

/// POST /api/plots
#[utoipa::path(
    post,
    path = "/api/plots",
    tag = "plots",
    request_body = NewPlot,
    responses(
        (status = 200, description = "Created plot", body = Plot),
        (status = 400, description = "Invalid dimensions or name", body = ErrorResponse),
        (status = 404, description = "Unknown area", body = ErrorResponse),
    )
)]
#[post("/plots")]
pub async fn create_plot(
    store: web::Data<GardenStore>,
    body: web::Json<NewPlot>,
) -> Result<HttpResponse, StoreError> {
    let plot = store.create_plot(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plot))
}

/// PUT /api/plots/{id}
/// Shrinking a plot below an occupied cell is refused.
#[utoipa::path(
    put,
    path = "/api/plots/{id}",
    tag = "plots",
    params(("id" = i64, Path, description = "Plot id")),
    request_body = NewPlot,
    responses(
        (status = 200, description = "Updated plot", body = Plot),
        (status = 400, description = "Invalid update", body = ErrorResponse),
        (status = 404, description = "Unknown plot", body = ErrorResponse),
    )
)]
#[put("/plots/{id}")]
pub async fn update_plot(
    store: web::Data<GardenStore>,
    path: web::Path<PlotId>,
    body: web::Json<NewPlot>,
) -> Result<HttpResponse, StoreError> {
    let plot = store.update_plot(path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plot))
}

/// DELETE /api/plots/{id}
/// Plants of the plot become free-standing.
#[utoipa::path(
    delete,
    path = "/api/plots/{id}",
    tag = "plots",
    params(("id" = i64, Path, description = "Plot id")),
    responses(
        (status = 200, description = "Plot removed", body = PlotRemoval),
        (status = 404, description = "Unknown plot", body = ErrorResponse),
    )
)]
#[delete("/plots/{id}")]
pub async fn remove_plot(
    store: web::Data<GardenStore>,
    path: web::Path<PlotId>,
) -> Result<HttpResponse, StoreError> {
    let removal = store.remove_plot(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(removal))
}
