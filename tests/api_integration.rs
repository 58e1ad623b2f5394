use actix_web::{test, web, App};
use potsandplots::api::{json_config, routes::configure};
use potsandplots::data::GardenStore;

fn build_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(GardenStore::with_sample_data()))
        .app_data(json_config())
        .configure(configure)
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_areas_returns_seeded_areas() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/areas").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|a| a["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Living Room", "Front Garden", "Greenhouse"]);
}

#[actix_web::test]
async fn test_plants_use_camel_case_fields() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants/1").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Cherry Tom");
    assert_eq!(body["speciesId"], 1);
    assert_eq!(body["plotId"], 1);
    assert_eq!(body["positionX"], 0);
    assert_eq!(body["positionY"], 0);
    assert_eq!(body["healthStatus"], "healthy");
    assert_eq!(body["wateringSchedule"], "weekly");
}

#[actix_web::test]
async fn test_plants_by_plot_filters() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants/plot/2").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let plants = body.as_array().unwrap();
    assert_eq!(plants.len(), 2);
    assert!(plants.iter().all(|p| p["plotId"] == 2));
}

#[actix_web::test]
async fn test_plots_by_area_filters() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plots/area/2").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let plots = body.as_array().unwrap();
    assert_eq!(plots.len(), 1);
    assert_eq!(plots[0]["name"], "Tomato Bed");
    assert_eq!(plots[0]["width"], 4);
    assert_eq!(plots[0]["length"], 2);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_unknown_plant_returns_404_with_code() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Plant 999 not found");
}

#[actix_web::test]
async fn test_create_on_occupied_cell_returns_409() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/plants")
        .set_json(serde_json::json!({
            "name": "Roma",
            "speciesId": 1,
            "areaId": 2,
            "plotId": 1,
            "positionX": 2,
            "positionY": 1
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "POSITION_OCCUPIED");
    assert_eq!(body["error"], "Position (2, 1) is already occupied");
}

#[actix_web::test]
async fn test_create_without_position_takes_first_free_cell() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/plants")
        .set_json(serde_json::json!({
            "name": "Roma",
            "speciesId": 1,
            "areaId": 2,
            "plotId": 1
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["positionX"], 1);
    assert_eq!(body["positionY"], 0);
    assert_eq!(body["healthStatus"], "healthy");
}

#[actix_web::test]
async fn test_malformed_json_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/plants")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ \"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("JSON deserialization error"));
}

#[actix_web::test]
async fn test_blank_name_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/plants")
        .set_json(serde_json::json!({ "name": "  ", "speciesId": 1, "areaId": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// Move / remove
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_move_to_free_standing_clears_position() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::put()
        .uri("/api/plants/3/move")
        .set_json(serde_json::json!({
            "areaId": 1,
            "plotId": null,
            "positionX": null,
            "positionY": null
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["areaId"], 1);
    assert!(body["plotId"].is_null());
    assert!(body["positionX"].is_null());
    assert!(body["positionY"].is_null());
}

#[actix_web::test]
async fn test_move_onto_other_plant_returns_409() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::put()
        .uri("/api/plants/1/move")
        .set_json(serde_json::json!({
            "areaId": 2,
            "plotId": 1,
            "positionX": 2,
            "positionY": 1
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn test_remove_plot_converts_its_plants() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::delete().uri("/api/plots/1").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["plantsConverted"], 2);

    let req = test::TestRequest::get().uri("/api/plants/2").to_request();
    let plant: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(plant["plotId"].is_null());
    assert!(plant["positionX"].is_null());
}

#[actix_web::test]
async fn test_remove_plant_then_404() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::delete().uri("/api/plants/5").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["plantId"], 5);

    let req = test::TestRequest::delete().uri("/api/plants/5").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
