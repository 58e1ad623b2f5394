use utoipa::OpenApi;

use crate::models::{
    garden::{Area, Plot},
    plant::{HealthStatus, Plant, PlantType, WateringSchedule},
    request::{
        ErrorCode, ErrorResponse, NewArea, NewPlantType, NewPlot, PlantCreateRequest,
        PlantMoveRequest, PlantRemoval, PlantUpdateRequest, PlotRemoval,
    },
    Position,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pots & Plots API",
        description = "Garden management: growing areas, rectangular plots with a cell grid, a species catalogue and the plants placed in them. Placement writes are checked against the plot's occupancy.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::areas::list_areas,
        crate::api::handlers::areas::get_area,
        crate::api::handlers::areas::create_area,
        crate::api::handlers::plots::list_plots,
        crate::api::handlers::plots::plots_by_area,
        crate::api::handlers::plots::get_plot,
        crate::api::handlers::plots::create_plot,
        crate::api::handlers::plots::update_plot,
        crate::api::handlers::plots::remove_plot,
        crate::api::handlers::plant_types::list_plant_types,
        crate::api::handlers::plant_types::get_plant_type,
        crate::api::handlers::plant_types::create_plant_type,
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::plants_by_area,
        crate::api::handlers::plants::plants_by_plot,
        crate::api::handlers::plants::get_plant,
        crate::api::handlers::plants::create_plant,
        crate::api::handlers::plants::update_plant,
        crate::api::handlers::plants::move_plant,
        crate::api::handlers::plants::remove_plant,
    ),
    components(
        schemas(
            // Enums
            HealthStatus, WateringSchedule, ErrorCode,
            // Entities
            Area, Plot, PlantType, Plant, Position,
            // Requests
            NewArea, NewPlot, NewPlantType, PlantCreateRequest, PlantUpdateRequest, PlantMoveRequest,
            // Responses
            PlantRemoval, PlotRemoval, ErrorResponse,
        )
    ),
    tags(
        (name = "areas",       description = "Growing areas"),
        (name = "plots",       description = "Plots with grid dimensions; removal converts plants to free-standing"),
        (name = "plant-types", description = "Species catalogue"),
        (name = "plants",      description = "Plant records and their placement"),
    )
)]
pub struct ApiDoc;
