use chrono::NaiveDate;

use crate::data::store::{GardenStore, Inner};
use crate::models::{
    garden::{Area, Plot},
    plant::{HealthStatus, Plant, PlantType, WateringSchedule},
    AreaId, PlantTypeId, PlotId, Position,
};

impl GardenStore {
    /// A small demo garden: three areas, two plots, seven species, six plants.
    #[rustfmt::skip]
    pub fn with_sample_data() -> Self {
        let mut inner = Inner::default();

        let living_room = area(&mut inner, "Living Room", "indoor", true, false, "medium");
        let front_garden = area(&mut inner, "Front Garden", "outdoor", false, false, "high");
        let greenhouse = area(&mut inner, "Greenhouse", "outdoor", true, true, "high");

        let tomato_bed = plot(&mut inner, "Tomato Bed", front_garden, "raised_bed", (4, 2), ("loam", "good", 6.8));
        let herb_row = plot(&mut inner, "Herb Row", greenhouse, "row", (2, 6), ("sandy_loam", "excellent", 7.0));

        let tomato = species(&mut inner, "Tomato", "Solanum lycopersicum", true, "full sun", "regular, deep watering", "rich, well-draining", "tomato");
        let basil = species(&mut inner, "Basil", "Ocimum basilicum", true, "full sun", "regular, but not waterlogged", "well-draining, fertile", "basil");
        let rosemary = species(&mut inner, "Rosemary", "Rosmarinus officinalis", true, "full sun", "infrequent, drought tolerant", "well-draining, sandy", "rosemary");
        let spider = species(&mut inner, "Spider Plant", "Chlorophytum comosum", false, "bright, indirect light", "weekly, allow to dry between waterings", "well-draining potting mix", "spider-plant");
        let pothos = species(&mut inner, "Pothos", "Epipremnum aureum", false, "low to moderate light", "weekly, allow to dry between waterings", "well-draining potting mix", "pothos");
        species(&mut inner, "Mint", "Mentha", true, "partial sun", "frequent", "moist, rich", "mint");
        species(&mut inner, "Lavender", "Lavandula", false, "full sun", "weekly", "well-draining, sandy", "lavender");

        plant(&mut inner, "Cherry Tom", tomato, front_garden, Some((tomato_bed, Position::new(0, 0))), (2024, 3, 15), Some("Planted from seedling, growing well"));
        plant(&mut inner, "Big Boy", tomato, front_garden, Some((tomato_bed, Position::new(2, 1))), (2024, 3, 20), None);
        plant(&mut inner, "Sweet Basil", basil, greenhouse, Some((herb_row, Position::new(0, 0))), (2024, 4, 1), None);
        plant(&mut inner, "Herb Garden Rosemary", rosemary, greenhouse, Some((herb_row, Position::new(1, 2))), (2024, 2, 10), None);
        plant(&mut inner, "Spider-1", spider, living_room, None, (2024, 1, 5), Some("Hanging plant near window"));
        plant(&mut inner, "Golden Pothos", pothos, living_room, None, (2024, 2, 14), Some("Trailing plant on shelf"));

        log::info!(
            "Sample data initialized: {} areas, {} plots, {} plant types, {} plants",
            inner.areas.len(),
            inner.plots.len(),
            inner.plant_types.len(),
            inner.plants.len()
        );
        GardenStore::from_inner(inner)
    }
}

fn area(
    inner: &mut Inner,
    name: &str,
    location_type: &str,
    is_covered: bool,
    is_greenhouse: bool,
    brightness: &str,
) -> AreaId {
    let id = inner.next_area_id();
    inner.areas.insert(
        id,
        Area {
            id,
            name: name.into(),
            location_type: location_type.into(),
            is_covered,
            is_greenhouse,
            brightness: brightness.into(),
        },
    );
    id
}

fn plot(
    inner: &mut Inner,
    name: &str,
    area_id: AreaId,
    plot_type: &str,
    (width, length): (u32, u32),
    (soil, drainage, ph): (&str, &str, f64),
) -> PlotId {
    let id = inner.next_plot_id();
    inner.plots.insert(
        id,
        Plot {
            id,
            name: name.into(),
            area_id,
            plot_type: plot_type.into(),
            width,
            length,
            soil_type: Some(soil.into()),
            drainage_level: Some(drainage.into()),
            ph: Some(ph),
        },
    );
    id
}

#[allow(clippy::too_many_arguments)]
fn species(
    inner: &mut Inner,
    common_name: &str,
    latin_name: &str,
    is_edible: bool,
    light: &str,
    water: &str,
    soil: &str,
    image: &str,
) -> PlantTypeId {
    let id = inner.next_plant_type_id();
    inner.plant_types.insert(
        id,
        PlantType {
            id,
            common_name: common_name.into(),
            latin_name: Some(latin_name.into()),
            light_requirements: Some(light.into()),
            water_requirements: Some(water.into()),
            soil_requirements: Some(soil.into()),
            image_url: Some(format!("https://example.com/{image}.jpg")),
            is_edible,
        },
    );
    id
}

fn plant(
    inner: &mut Inner,
    name: &str,
    species_id: PlantTypeId,
    area_id: AreaId,
    placement: Option<(PlotId, Position)>,
    (year, month, day): (i32, u32, u32),
    notes: Option<&str>,
) {
    let id = inner.next_plant_id();
    let mut plant = Plant {
        id,
        name: name.into(),
        species_id,
        area_id,
        plot_id: None,
        position_x: None,
        position_y: None,
        planted_date: NaiveDate::from_ymd_opt(year, month, day),
        health_status: Some(HealthStatus::Healthy),
        notes: notes.map(str::to_string),
        watering_schedule: Some(WateringSchedule::Weekly),
    };
    plant.set_placement(placement.map(|(plot, _)| plot), placement.map(|(_, pos)| pos));
    inner.plants.insert(id, plant);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_data_counts() {
        let store = GardenStore::with_sample_data();
        assert_eq!(store.list_areas().await.len(), 3);
        assert_eq!(store.list_plots().await.len(), 2);
        assert_eq!(store.list_plant_types().await.len(), 7);
        assert_eq!(store.list_plants().await.len(), 6);
    }

    #[tokio::test]
    async fn test_sample_positions_fit_their_plots() {
        let store = GardenStore::with_sample_data();
        let plots = store.list_plots().await;
        for plant in store.list_plants().await {
            let Some(plot_id) = plant.plot_id else {
                assert_eq!(plant.position(), None);
                continue;
            };
            let plot = plots.iter().find(|p| p.id == plot_id).unwrap();
            assert!(plot.contains(plant.position().unwrap()), "{} out of bounds", plant.name);
        }
    }
}
