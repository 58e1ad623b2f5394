use std::sync::Arc;

use potsandplots::dashboard::{Action, Dashboard, SubmitError};
use potsandplots::data::GardenStore;
use potsandplots::gateway::{Gateway, GatewayError, LocalGateway};
use potsandplots::logic::occupancy::PlacementError;
use potsandplots::logic::validation::ValidationError;
use potsandplots::models::{plant::HealthStatus, request::NewPlot, Position};

const FRONT_GARDEN: i64 = 2;
const GREENHOUSE: i64 = 3;
const LIVING_ROOM: i64 = 1;
const TOMATO_BED: i64 = 1;
const HERB_ROW: i64 = 2;
const TOMATO: i64 = 1;

async fn dashboard_on(store: Arc<GardenStore>) -> Dashboard<LocalGateway> {
    let mut dashboard = Dashboard::new(LocalGateway::new(store));
    dashboard.load().await.unwrap();
    dashboard
}

async fn seeded() -> Dashboard<LocalGateway> {
    dashboard_on(Arc::new(GardenStore::with_sample_data())).await
}

// ---------------------------------------------------------------------------
// Loading and views
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_load_groups_plots_and_free_standing_plants() {
    let dashboard = seeded().await;
    let views = dashboard.area_views();
    assert_eq!(views.len(), 3);

    let living_room = views.iter().find(|v| v.area.id == LIVING_ROOM).unwrap();
    assert!(living_room.plots.is_empty());
    let names: Vec<&str> = living_room.free_standing.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Spider-1", "Golden Pothos"]);

    let greenhouse = views.iter().find(|v| v.area.id == GREENHOUSE).unwrap();
    assert_eq!(greenhouse.plots.len(), 1);
    assert!(greenhouse.free_standing.is_empty());
}

#[tokio::test]
async fn test_plot_grid_marks_occupied_cells() {
    let dashboard = seeded().await;
    let grid = dashboard.plot_grid(TOMATO_BED, None).unwrap();
    assert_eq!(grid.rows, 2);
    assert_eq!(grid.cols, 4);
    let occupied: Vec<Position> = grid
        .cells
        .iter()
        .flatten()
        .filter(|c| !c.available)
        .map(|c| c.position)
        .collect();
    assert_eq!(occupied, vec![Position::new(0, 0), Position::new(2, 1)]);
}

#[tokio::test]
async fn test_plant_type_name_falls_back_to_unknown() {
    let dashboard = seeded().await;
    assert_eq!(dashboard.plant_type_name(TOMATO), "Tomato");
    assert_eq!(dashboard.plant_type_name(404), "Unknown");
}

// ---------------------------------------------------------------------------
// Add plant
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_add_dialog_preselects_first_free_cell() {
    let dashboard = seeded().await;
    let dialog = dashboard
        .open_add_dialog(FRONT_GARDEN, Some(TOMATO_BED), None)
        .unwrap();
    assert_eq!(dialog.selected(), Some(Position::new(1, 0)));
}

#[tokio::test]
async fn test_add_dialog_rejects_occupied_cell() {
    let dashboard = seeded().await;
    let mut dialog = dashboard
        .open_add_dialog(FRONT_GARDEN, Some(TOMATO_BED), None)
        .unwrap();
    let err = dashboard
        .select_add_cell(&mut dialog, Position::new(2, 1))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Position (2, 1) is already occupied"
    );
    assert_eq!(dialog.selected(), Some(Position::new(1, 0)), "Selection kept");
}

#[tokio::test]
async fn test_add_plant_lands_on_selected_cell() {
    let mut dashboard = seeded().await;
    let mut dialog = dashboard
        .open_add_dialog(FRONT_GARDEN, Some(TOMATO_BED), None)
        .unwrap();
    dashboard
        .select_add_cell(&mut dialog, Position::new(3, 1))
        .unwrap();
    dialog.name = "Roma".into();
    dialog.species_id = Some(TOMATO);

    let id = dashboard.submit_add(&mut dialog).await.unwrap();

    assert!(!dialog.is_open());
    let plant = dashboard.plant(id).unwrap();
    assert_eq!(plant.position(), Some(Position::new(3, 1)));
    assert_eq!(plant.health_status, Some(HealthStatus::Healthy));
}

#[tokio::test]
async fn test_add_requires_name_and_species() {
    let mut dashboard = seeded().await;
    let mut dialog = dashboard.open_add_dialog(LIVING_ROOM, None, None).unwrap();

    let err = dashboard.submit_add(&mut dialog).await.unwrap_err();
    assert_eq!(err, SubmitError::Validation(ValidationError::MissingName));

    dialog.name = "Fern".into();
    let err = dashboard.submit_add(&mut dialog).await.unwrap_err();
    assert_eq!(err, SubmitError::Validation(ValidationError::MissingSpecies));
    assert!(dialog.is_open());
    assert!(!dialog.is_in_flight());
}

#[tokio::test]
async fn test_full_plot_refuses_add_dialog() {
    let store = Arc::new(GardenStore::with_sample_data());
    let gateway = LocalGateway::new(store.clone());
    let mut filler = Dashboard::new(gateway);
    filler.load().await.unwrap();
    for i in 0..6 {
        let mut dialog = filler
            .open_add_dialog(FRONT_GARDEN, Some(TOMATO_BED), None)
            .unwrap();
        dialog.name = format!("Filler {i}");
        dialog.species_id = Some(TOMATO);
        filler.submit_add(&mut dialog).await.unwrap();
    }

    let err = filler
        .open_add_dialog(FRONT_GARDEN, Some(TOMATO_BED), None)
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::Placement(PlacementError::PlotFull { plot_id: TOMATO_BED })
    );
}

#[tokio::test]
async fn test_concurrent_add_reports_conflict_verbatim() {
    let store = Arc::new(GardenStore::with_sample_data());
    let mut alice = dashboard_on(store.clone()).await;
    let mut bob = dashboard_on(store.clone()).await;

    let mut first = alice
        .open_add_dialog(FRONT_GARDEN, Some(TOMATO_BED), None)
        .unwrap();
    first.name = "First".into();
    first.species_id = Some(TOMATO);
    let mut second = bob
        .open_add_dialog(FRONT_GARDEN, Some(TOMATO_BED), None)
        .unwrap();
    second.name = "Second".into();
    second.species_id = Some(TOMATO);
    assert_eq!(first.selected(), second.selected());

    alice.submit_add(&mut first).await.unwrap();
    let err = bob.submit_add(&mut second).await.unwrap_err();

    assert!(matches!(err, SubmitError::Gateway(GatewayError::PositionOccupied(_))));
    assert_eq!(
        err.notice(Action::AddPlant).message,
        "Position (1, 0) is already occupied"
    );
    assert!(second.is_open(), "Dialog stays open for another pick");
    assert!(!second.is_in_flight());
    assert_eq!(bob.plants().len(), 6, "Snapshot untouched by a failed write");
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_busy() {
    let mut dashboard = seeded().await;
    let mut dialog = dashboard.open_add_dialog(LIVING_ROOM, None, None).unwrap();
    dialog.name = "Fern".into();
    dialog.species_id = Some(TOMATO);

    let _ticket = dialog.begin().unwrap();
    let err = dashboard.submit_add(&mut dialog).await.unwrap_err();
    assert_eq!(err, SubmitError::Busy);
    assert_eq!(dashboard.plants().len(), 6);
}

#[tokio::test]
async fn test_completion_after_close_keeps_dialog_closed() {
    let mut dashboard = seeded().await;
    let mut dialog = dashboard.open_add_dialog(LIVING_ROOM, None, None).unwrap();
    dialog.name = "Fern".into();
    dialog.species_id = Some(TOMATO);

    let request = dashboard.prepare_add(&dialog).unwrap();
    let ticket = dialog.begin().unwrap();
    dialog.close();
    let result = dashboard.gateway().create_plant(&request).await;
    let id = dashboard.complete_add(&mut dialog, ticket, result).unwrap();

    assert!(!dialog.is_open());
    assert!(!dialog.is_in_flight());
    assert!(dashboard.plant(id).is_some(), "Confirmed plant still shown");
    assert_eq!(dialog.begin(), Err(SubmitError::Closed));
}

#[tokio::test]
async fn test_repeated_completion_keeps_one_copy() {
    let mut dashboard = seeded().await;
    let mut dialog = dashboard.open_add_dialog(LIVING_ROOM, None, None).unwrap();
    dialog.name = "Fern".into();
    dialog.species_id = Some(TOMATO);

    let request = dashboard.prepare_add(&dialog).unwrap();
    let ticket = dialog.begin().unwrap();
    let plant = dashboard.gateway().create_plant(&request).await.unwrap();
    let id = dashboard
        .complete_add(&mut dialog, ticket, Ok(plant.clone()))
        .unwrap();
    dashboard.complete_add(&mut dialog, ticket, Ok(plant)).unwrap();

    assert_eq!(dashboard.plants().iter().filter(|p| p.id == id).count(), 1);
    assert_eq!(dashboard.plants().len(), 7);
}

// ---------------------------------------------------------------------------
// Move plant
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_moving_plant_may_keep_its_own_cell() {
    let mut dashboard = seeded().await;
    let mut dialog = dashboard.open_move_dialog(1).unwrap();
    assert_eq!(dialog.selected(), Some(Position::new(0, 0)));

    dashboard
        .select_move_cell(&mut dialog, Position::new(0, 0))
        .unwrap();
    let err = dashboard
        .select_move_cell(&mut dialog, Position::new(2, 1))
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::Placement(PlacementError::PositionOccupied(Position::new(2, 1)))
    );

    dashboard
        .select_move_cell(&mut dialog, Position::new(3, 0))
        .unwrap();
    dashboard.submit_move(&mut dialog).await.unwrap();
    assert_eq!(
        dashboard.plant(1).unwrap().position(),
        Some(Position::new(3, 0))
    );
    assert!(!dialog.is_open());
}

#[tokio::test]
async fn test_move_into_other_plot_requires_a_cell() {
    let mut dashboard = seeded().await;
    let mut dialog = dashboard.open_move_dialog(1).unwrap();
    dialog.set_area(GREENHOUSE);
    assert_eq!(dialog.plot_id(), None);
    dialog.set_plot(Some(HERB_ROW));
    assert_eq!(dialog.selected(), None);

    let err = dashboard.submit_move(&mut dialog).await.unwrap_err();
    assert_eq!(
        err,
        SubmitError::Validation(ValidationError::PositionNotSelected)
    );

    dashboard
        .select_move_cell(&mut dialog, Position::new(1, 5))
        .unwrap();
    dashboard.submit_move(&mut dialog).await.unwrap();
    let plant = dashboard.plant(1).unwrap();
    assert_eq!(plant.area_id, GREENHOUSE);
    assert_eq!(plant.plot_id, Some(HERB_ROW));
    assert_eq!(plant.position(), Some(Position::new(1, 5)));
}

#[tokio::test]
async fn test_move_to_free_standing_clears_position() {
    let mut dashboard = seeded().await;
    let mut dialog = dashboard.open_move_dialog(3).unwrap();
    dialog.set_area(LIVING_ROOM);
    dashboard.submit_move(&mut dialog).await.unwrap();

    let plant = dashboard.plant(3).unwrap();
    assert!(plant.is_free_standing());
    assert_eq!(plant.position(), None);
    let stored = dashboard.gateway().store().get_plant(3).await.unwrap();
    assert_eq!(stored.area_id, LIVING_ROOM);
    assert_eq!(stored.position_x, None);
}

#[tokio::test]
async fn test_move_completion_after_close_keeps_dialog_closed() {
    let mut dashboard = seeded().await;
    let mut dialog = dashboard.open_move_dialog(1).unwrap();
    dashboard
        .select_move_cell(&mut dialog, Position::new(3, 0))
        .unwrap();

    let request = dashboard.prepare_move(&dialog).unwrap();
    let ticket = dialog.begin().unwrap();
    dialog.close();
    let result = dashboard.gateway().move_plant(1, &request).await;
    dashboard.complete_move(&mut dialog, ticket, result).unwrap();

    assert!(!dialog.is_open());
    assert!(!dialog.is_in_flight());
    assert_eq!(
        dashboard.plant(1).unwrap().position(),
        Some(Position::new(3, 0)),
        "Confirmed move still shown"
    );
    assert_eq!(dialog.begin(), Err(SubmitError::Closed));
}

// ---------------------------------------------------------------------------
// Details, plots, removal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_details_update_refreshes_snapshot() {
    let mut dashboard = seeded().await;
    let mut form = dashboard.open_details(4).await.unwrap();
    form.health_status = HealthStatus::Flowering;
    form.notes = "Trimmed back".into();

    dashboard.submit_details(&mut form).await.unwrap();

    let plant = dashboard.plant(4).unwrap();
    assert_eq!(plant.health_status, Some(HealthStatus::Flowering));
    assert_eq!(plant.notes.as_deref(), Some("Trimmed back"));
    assert_eq!(plant.position(), Some(Position::new(1, 2)), "Placement untouched");
    assert!(!form.is_open());
}

#[tokio::test]
async fn test_details_completion_after_close_keeps_form_closed() {
    let mut dashboard = seeded().await;
    let mut form = dashboard.open_details(4).await.unwrap();
    form.health_status = HealthStatus::Dormant;

    let request = form.to_request().unwrap();
    let ticket = form.begin().unwrap();
    form.close();
    let result = dashboard.gateway().update_plant(4, &request).await;
    dashboard.complete_details(&mut form, ticket, result).unwrap();

    assert!(!form.is_open());
    assert!(!form.is_in_flight());
    assert_eq!(
        dashboard.plant(4).unwrap().health_status,
        Some(HealthStatus::Dormant)
    );
    assert_eq!(form.begin(), Err(SubmitError::Closed));
}

#[tokio::test]
async fn test_remove_plot_converts_local_plants() {
    let mut dashboard = seeded().await;
    let converted = dashboard.remove_plot(HERB_ROW).await.unwrap();
    assert_eq!(converted, 2);
    assert!(dashboard.plot(HERB_ROW).is_none());
    let greenhouse = dashboard
        .area_views()
        .into_iter()
        .find(|v| v.area.id == GREENHOUSE)
        .unwrap();
    assert_eq!(greenhouse.free_standing.len(), 2);
}

#[tokio::test]
async fn test_add_plot_validates_dimensions() {
    let mut dashboard = seeded().await;
    let mut plot = NewPlot {
        name: "Bean Row".into(),
        area_id: FRONT_GARDEN,
        plot_type: "row".into(),
        width: 0,
        length: 3,
        soil_type: None,
        drainage_level: None,
        ph: None,
    };
    let err = dashboard.add_plot(plot.clone()).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Validation(ValidationError::InvalidDimensions { .. })
    ));

    plot.width = 1;
    let id = dashboard.add_plot(plot).await.unwrap();
    let grid = dashboard.plot_grid(id, None).unwrap();
    assert_eq!(grid.free_cells().count(), 3);
}

#[tokio::test]
async fn test_remove_unknown_plant_reports_failure() {
    let mut dashboard = seeded().await;
    let err = dashboard.remove_plant(999).await.unwrap_err();
    assert_eq!(
        err.notice(Action::RemovePlant).message,
        "Failed to remove plant: Plant 999 not found"
    );
    assert_eq!(dashboard.plants().len(), 6);
}
