use actix_web::web;

use crate::api::handlers::{areas, plant_types, plants, plots};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(areas::list_areas)
            .service(areas::get_area)
            .service(areas::create_area)
            .service(plots::list_plots)
            .service(plots::plots_by_area)
            .service(plots::get_plot)
            .service(plots::create_plot)
            .service(plots::update_plot)
            .service(plots::remove_plot)
            .service(plant_types::list_plant_types)
            .service(plant_types::get_plant_type)
            .service(plant_types::create_plant_type)
            .service(plants::list_plants)
            .service(plants::plants_by_area)
            .service(plants::plants_by_plot)
            .service(plants::get_plant)
            .service(plants::create_plant)
            .service(plants::update_plant)
            .service(plants::move_plant)
            .service(plants::remove_plant),
    );
}
