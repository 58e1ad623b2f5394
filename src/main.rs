use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpServer};
use anyhow::Context;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use potsandplots::api::{self, openapi::ApiDoc};
use potsandplots::config::Settings;
use potsandplots::data::GardenStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = web::Data::new(if settings.seed {
        GardenStore::with_sample_data()
    } else {
        GardenStore::default()
    });

    let bind_addr = settings.bind_addr.clone();
    log::info!("🌱 Pots & Plots API started at http://{bind_addr}");
    log::info!("   /api/areas, /api/plots, /api/plant-types, /api/plants");
    log::info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    log::info!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    let cors_origin = settings.cors_origin.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600);
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(store.clone())
            .app_data(api::json_config())
            .configure(api::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&bind_addr)
    .with_context(|| format!("failed to bind {bind_addr}"))?
    .run()
    .await
    .context("server error")
}
