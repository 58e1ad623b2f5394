use std::collections::BTreeMap;

use chrono::Local;
use tokio::sync::RwLock;

use crate::logic::occupancy::{compute_occupancy, resolve_placement, PlacementError};
use crate::logic::validation::{self, ValidationError};
use crate::models::{
    garden::{Area, Plot},
    plant::{HealthStatus, Plant, PlantType, WateringSchedule},
    request::{
        ErrorCode, NewArea, NewPlantType, NewPlot, PlantCreateRequest, PlantMoveRequest,
        PlantRemoval, PlantUpdateRequest, PlotRemoval,
    },
    AreaId, PlantId, PlantTypeId, PlotId, Position,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Validation(ValidationError),
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Placement(placement) => StoreError::Placement(placement),
            other => StoreError::Validation(other),
        }
    }
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::NotFound { .. } => ErrorCode::NotFound,
            StoreError::Placement(PlacementError::PositionOccupied(_)) => {
                ErrorCode::PositionOccupied
            }
            StoreError::Placement(PlacementError::PlotFull { .. }) => ErrorCode::PlotFull,
            StoreError::Placement(PlacementError::OutOfBounds { .. })
            | StoreError::Validation(_) => ErrorCode::ValidationError,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Inner {
    pub(crate) areas: BTreeMap<AreaId, Area>,
    pub(crate) plots: BTreeMap<PlotId, Plot>,
    pub(crate) plant_types: BTreeMap<PlantTypeId, PlantType>,
    pub(crate) plants: BTreeMap<PlantId, Plant>,
    sequences: Sequences,
}

/// Per-entity identity counters; ids are never reused.
#[derive(Debug, Default)]
struct Sequences {
    area: i64,
    plot: i64,
    plant_type: i64,
    plant: i64,
}

fn allocate(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

impl Inner {
    pub(crate) fn next_area_id(&mut self) -> AreaId {
        allocate(&mut self.sequences.area)
    }

    pub(crate) fn next_plot_id(&mut self) -> PlotId {
        allocate(&mut self.sequences.plot)
    }

    pub(crate) fn next_plant_type_id(&mut self) -> PlantTypeId {
        allocate(&mut self.sequences.plant_type)
    }

    pub(crate) fn next_plant_id(&mut self) -> PlantId {
        allocate(&mut self.sequences.plant)
    }

    fn area(&self, id: AreaId) -> Result<&Area, StoreError> {
        self.areas
            .get(&id)
            .ok_or(StoreError::NotFound { entity: "Area", id })
    }

    fn plot(&self, id: PlotId) -> Result<&Plot, StoreError> {
        self.plots
            .get(&id)
            .ok_or(StoreError::NotFound { entity: "Plot", id })
    }

    fn plant_type(&self, id: PlantTypeId) -> Result<&PlantType, StoreError> {
        self.plant_types
            .get(&id)
            .ok_or(StoreError::NotFound { entity: "Plant type", id })
    }

    fn plant(&self, id: PlantId) -> Result<&Plant, StoreError> {
        self.plants
            .get(&id)
            .ok_or(StoreError::NotFound { entity: "Plant", id })
    }

    /// Resolves where a plant lands. Runs under the write lock, so the
    /// occupancy check and the following write see the same state.
    fn place(
        &self,
        area_id: AreaId,
        plot_id: Option<PlotId>,
        x: Option<u32>,
        y: Option<u32>,
        moving: Option<PlantId>,
    ) -> Result<(Option<PlotId>, Option<Position>), StoreError> {
        self.area(area_id)?;
        let requested = validation::pair_position(x, y)?;
        let Some(plot_id) = plot_id else {
            if requested.is_some() {
                return Err(ValidationError::PositionWithoutPlot.into());
            }
            return Ok((None, None));
        };
        let plot = self.plot(plot_id)?;
        validation::check_plot_in_area(plot, area_id)?;
        let occupied = compute_occupancy(plot, self.plants.values(), moving);
        let position = resolve_placement(plot, requested, &occupied)?;
        Ok((Some(plot_id), Some(position)))
    }
}

/// In-memory authoritative state behind the REST surface.
#[derive(Debug, Default)]
pub struct GardenStore {
    inner: RwLock<Inner>,
}

impl GardenStore {
    pub(crate) fn from_inner(inner: Inner) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    // ----------------------------------------------------------------------
    // Areas
    // ----------------------------------------------------------------------

    pub async fn list_areas(&self) -> Vec<Area> {
        self.inner.read().await.areas.values().cloned().collect()
    }

    pub async fn get_area(&self, id: AreaId) -> Result<Area, StoreError> {
        self.inner.read().await.area(id).cloned()
    }

    pub async fn create_area(&self, new: NewArea) -> Result<Area, StoreError> {
        let name = validation::require_name(&new.name)?;
        let mut inner = self.inner.write().await;
        let area = Area {
            id: inner.next_area_id(),
            name,
            location_type: new.location_type,
            is_covered: new.is_covered,
            is_greenhouse: new.is_greenhouse,
            brightness: new.brightness,
        };
        log::info!("Area {} '{}' created", area.id, area.name);
        inner.areas.insert(area.id, area.clone());
        Ok(area)
    }

    // ----------------------------------------------------------------------
    // Plots
    // ----------------------------------------------------------------------

    pub async fn list_plots(&self) -> Vec<Plot> {
        self.inner.read().await.plots.values().cloned().collect()
    }

    pub async fn get_plot(&self, id: PlotId) -> Result<Plot, StoreError> {
        self.inner.read().await.plot(id).cloned()
    }

    pub async fn plots_in_area(&self, area_id: AreaId) -> Vec<Plot> {
        self.inner
            .read()
            .await
            .plots
            .values()
            .filter(|p| p.area_id == area_id)
            .cloned()
            .collect()
    }

    pub async fn create_plot(&self, new: NewPlot) -> Result<Plot, StoreError> {
        validation::validate_new_plot(&new)?;
        let mut inner = self.inner.write().await;
        inner.area(new.area_id)?;
        let plot = Plot {
            id: inner.next_plot_id(),
            name: new.name.trim().to_string(),
            area_id: new.area_id,
            plot_type: new.plot_type,
            width: new.width,
            length: new.length,
            soil_type: new.soil_type,
            drainage_level: new.drainage_level,
            ph: new.ph,
        };
        log::info!(
            "Plot {} '{}' ({}x{}) created in area {}",
            plot.id,
            plot.name,
            plot.width,
            plot.length,
            plot.area_id
        );
        inner.plots.insert(plot.id, plot.clone());
        Ok(plot)
    }

    /// Replaces plot metadata and dimensions. The owning area is kept.
    pub async fn update_plot(&self, id: PlotId, update: NewPlot) -> Result<Plot, StoreError> {
        validation::validate_new_plot(&update)?;
        let mut inner = self.inner.write().await;
        inner.plot(id)?;
        if let Some((plant_id, position)) = inner
            .plants
            .values()
            .filter(|p| p.plot_id == Some(id))
            .filter_map(|p| p.position().map(|pos| (p.id, pos)))
            .find(|(_, pos)| pos.x >= update.width || pos.y >= update.length)
        {
            log::warn!("Refusing to shrink plot {id}: plant {plant_id} at {position}");
            return Err(ValidationError::PlotTooSmall {
                width: update.width,
                length: update.length,
                plant_id,
                position,
            }
            .into());
        }
        let plot = inner
            .plots
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "Plot", id })?;
        plot.name = update.name.trim().to_string();
        plot.plot_type = update.plot_type;
        plot.width = update.width;
        plot.length = update.length;
        plot.soil_type = update.soil_type;
        plot.drainage_level = update.drainage_level;
        plot.ph = update.ph;
        Ok(plot.clone())
    }

    /// Deletes a plot; its plants become free-standing in the same area.
    pub async fn remove_plot(&self, id: PlotId) -> Result<PlotRemoval, StoreError> {
        let mut inner = self.inner.write().await;
        inner.plot(id)?;
        let mut converted = 0;
        for plant in inner.plants.values_mut().filter(|p| p.plot_id == Some(id)) {
            plant.set_placement(None, None);
            log::info!("Plant '{}' converted to free-standing", plant.name);
            converted += 1;
        }
        inner.plots.remove(&id);
        log::info!("Plot {id} deleted, {converted} plant(s) converted to free-standing");
        Ok(PlotRemoval {
            success: true,
            message: "Plot deleted successfully".into(),
            plants_converted: converted,
        })
    }

    // ----------------------------------------------------------------------
    // Plant types
    // ----------------------------------------------------------------------

    pub async fn list_plant_types(&self) -> Vec<PlantType> {
        self.inner.read().await.plant_types.values().cloned().collect()
    }

    pub async fn get_plant_type(&self, id: PlantTypeId) -> Result<PlantType, StoreError> {
        self.inner.read().await.plant_type(id).cloned()
    }

    pub async fn create_plant_type(&self, new: NewPlantType) -> Result<PlantType, StoreError> {
        let common_name = validation::require_name(&new.common_name)?;
        let mut inner = self.inner.write().await;
        let plant_type = PlantType {
            id: inner.next_plant_type_id(),
            common_name,
            latin_name: new.latin_name,
            light_requirements: new.light_requirements,
            water_requirements: new.water_requirements,
            soil_requirements: new.soil_requirements,
            image_url: new.image_url,
            is_edible: new.is_edible,
        };
        inner.plant_types.insert(plant_type.id, plant_type.clone());
        Ok(plant_type)
    }

    // ----------------------------------------------------------------------
    // Plants
    // ----------------------------------------------------------------------

    pub async fn list_plants(&self) -> Vec<Plant> {
        self.inner.read().await.plants.values().cloned().collect()
    }

    pub async fn get_plant(&self, id: PlantId) -> Result<Plant, StoreError> {
        self.inner.read().await.plant(id).cloned()
    }

    pub async fn plants_in_area(&self, area_id: AreaId) -> Vec<Plant> {
        self.inner
            .read()
            .await
            .plants
            .values()
            .filter(|p| p.area_id == area_id)
            .cloned()
            .collect()
    }

    pub async fn plants_in_plot(&self, plot_id: PlotId) -> Vec<Plant> {
        self.inner
            .read()
            .await
            .plants
            .values()
            .filter(|p| p.plot_id == Some(plot_id))
            .cloned()
            .collect()
    }

    pub async fn create_plant(&self, request: PlantCreateRequest) -> Result<Plant, StoreError> {
        let name = validation::require_name(&request.name)?;
        let mut inner = self.inner.write().await;
        inner.plant_type(request.species_id)?;
        let (plot_id, position) = inner
            .place(
                request.area_id,
                request.plot_id,
                request.position_x,
                request.position_y,
                None,
            )
            .inspect_err(|e| log::warn!("Rejected new plant '{name}': {e}"))?;
        let mut plant = Plant {
            id: inner.next_plant_id(),
            name,
            species_id: request.species_id,
            area_id: request.area_id,
            plot_id: None,
            position_x: None,
            position_y: None,
            planted_date: Some(Local::now().date_naive()),
            health_status: Some(HealthStatus::default()),
            notes: request.notes,
            watering_schedule: Some(WateringSchedule::default()),
        };
        plant.set_placement(plot_id, position);
        log::info!("Plant {} '{}' created in area {}", plant.id, plant.name, plant.area_id);
        inner.plants.insert(plant.id, plant.clone());
        Ok(plant)
    }

    /// Partial update of descriptive fields; placement is changed via `move_plant`.
    pub async fn update_plant(
        &self,
        id: PlantId,
        update: PlantUpdateRequest,
    ) -> Result<Plant, StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(species_id) = update.species_id {
            inner.plant_type(species_id)?;
        }
        let plant = inner
            .plants
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "Plant", id })?;
        if let Some(name) = update.name.as_deref().map(str::trim) {
            if !name.is_empty() {
                plant.name = name.to_string();
            }
        }
        if let Some(species_id) = update.species_id {
            plant.species_id = species_id;
        }
        if let Some(status) = update.health_status {
            plant.health_status = Some(status);
        }
        if let Some(notes) = update.notes {
            plant.notes = Some(notes);
        }
        if let Some(schedule) = update.watering_schedule {
            plant.watering_schedule = Some(schedule);
        }
        if let Some(date) = update.planted_date {
            plant.planted_date = Some(date);
        }
        log::info!("Plant {} '{}' updated", plant.id, plant.name);
        Ok(plant.clone())
    }

    /// Relocates a plant. Area, plot and position change together; moving out
    /// of a plot clears both coordinates.
    pub async fn move_plant(
        &self,
        id: PlantId,
        request: PlantMoveRequest,
    ) -> Result<Plant, StoreError> {
        let mut inner = self.inner.write().await;
        inner.plant(id)?;
        let (plot_id, position) = inner
            .place(
                request.area_id,
                request.plot_id,
                request.position_x,
                request.position_y,
                Some(id),
            )
            .inspect_err(|e| log::warn!("Rejected move of plant {id}: {e}"))?;
        let plant = inner
            .plants
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "Plant", id })?;
        plant.area_id = request.area_id;
        plant.set_placement(plot_id, position);
        log::info!(
            "Plant {id} moved to area {} plot {:?} position {:?}",
            plant.area_id,
            plant.plot_id,
            position
        );
        Ok(plant.clone())
    }

    pub async fn remove_plant(&self, id: PlantId) -> Result<PlantRemoval, StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .plants
            .remove(&id)
            .ok_or(StoreError::NotFound { entity: "Plant", id })?;
        log::info!("Plant {id} removed");
        Ok(PlantRemoval {
            success: true,
            plant_id: id,
        })
    }
}
