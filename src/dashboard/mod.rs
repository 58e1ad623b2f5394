//! Presentation-independent view and form layer.
//!
//! A [`Dashboard`] holds one screen's snapshot of the backend collections.
//! The snapshot only changes after the backend confirms a write, and every
//! placement decision is recomputed from it through
//! [`crate::logic::occupancy`].

use crate::gateway::Gateway;
use crate::logic::occupancy::{compute_occupancy, OccupancySet};
use crate::logic::validation::{self, ValidationError};
use crate::models::{
    garden::{Area, Plot, PlotGrid},
    plant::{Plant, PlantType},
    request::NewPlot,
    AreaId, PlantId, PlantTypeId, PlotId,
};

pub mod details;
pub mod dialog;
pub mod notice;

pub use details::PlantDetailsForm;
pub use dialog::{AddPlantDialog, MovePlantDialog, Ticket};
pub use notice::{Action, Notice, SubmitError};

/// One area with its plots and the plants that sit outside any plot.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaView<'a> {
    pub area: &'a Area,
    pub plots: Vec<&'a Plot>,
    pub free_standing: Vec<&'a Plant>,
}

pub struct Dashboard<G> {
    gateway: G,
    areas: Vec<Area>,
    plots: Vec<Plot>,
    plants: Vec<Plant>,
    plant_types: Vec<PlantType>,
}

impl<G: Gateway> Dashboard<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            areas: Vec::new(),
            plots: Vec::new(),
            plants: Vec::new(),
            plant_types: Vec::new(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetches all four collections concurrently. On failure the previous
    /// snapshot is kept.
    pub async fn load(&mut self) -> Result<(), SubmitError> {
        let loaded = tokio::try_join!(
            self.gateway.list_areas(),
            self.gateway.list_plots(),
            self.gateway.list_plants(),
            self.gateway.list_plant_types(),
        );
        match loaded {
            Ok((areas, plots, plants, plant_types)) => {
                log::info!(
                    "Loaded {} areas, {} plots, {} plants, {} plant types",
                    areas.len(),
                    plots.len(),
                    plants.len(),
                    plant_types.len()
                );
                self.areas = areas;
                self.plots = plots;
                self.plants = plants;
                self.plant_types = plant_types;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load data: {e}");
                Err(e.into())
            }
        }
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn plant_types(&self) -> &[PlantType] {
        &self.plant_types
    }

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    pub fn plot(&self, id: PlotId) -> Option<&Plot> {
        self.plots.iter().find(|p| p.id == id)
    }

    pub fn plant(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn plant_type_name(&self, species_id: PlantTypeId) -> &str {
        self.plant_types
            .iter()
            .find(|t| t.id == species_id)
            .map(|t| t.common_name.as_str())
            .unwrap_or("Unknown")
    }

    pub fn area_views(&self) -> Vec<AreaView<'_>> {
        self.areas
            .iter()
            .map(|area| AreaView {
                area,
                plots: self.plots.iter().filter(|p| p.area_id == area.id).collect(),
                free_standing: self
                    .plants
                    .iter()
                    .filter(|p| p.area_id == area.id && p.is_free_standing())
                    .collect(),
            })
            .collect()
    }

    pub fn occupancy(&self, plot: &Plot, exclude: Option<PlantId>) -> OccupancySet {
        compute_occupancy(plot, &self.plants, exclude)
    }

    /// Cell matrix for rendering or picking a position; `exclude` frees the
    /// cell of a plant being moved.
    pub fn plot_grid(&self, plot_id: PlotId, exclude: Option<PlantId>) -> Option<PlotGrid> {
        self.plot(plot_id)
            .map(|plot| PlotGrid::build(plot, &self.plants, exclude))
    }

    pub(crate) fn plot_in_area(
        &self,
        plot_id: PlotId,
        area_id: AreaId,
    ) -> Result<&Plot, ValidationError> {
        let plot = self
            .plot(plot_id)
            .ok_or(ValidationError::UnknownPlot(plot_id))?;
        validation::check_plot_in_area(plot, area_id)?;
        Ok(plot)
    }

    pub async fn remove_plant(&mut self, id: PlantId) -> Result<(), SubmitError> {
        if let Err(e) = self.gateway.remove_plant(id).await {
            log::error!("Failed to remove plant {id}: {e}");
            return Err(e.into());
        }
        self.plants.retain(|p| p.id != id);
        Ok(())
    }

    pub async fn add_plot(&mut self, new: NewPlot) -> Result<PlotId, SubmitError> {
        validation::validate_new_plot(&new)?;
        if self.area(new.area_id).is_none() {
            return Err(ValidationError::UnknownArea(new.area_id).into());
        }
        let plot = self.gateway.create_plot(&new).await.map_err(|e| {
            log::error!("Failed to add plot: {e}");
            SubmitError::from(e)
        })?;
        let id = plot.id;
        self.plots.push(plot);
        Ok(id)
    }

    pub async fn update_plot(&mut self, id: PlotId, update: NewPlot) -> Result<(), SubmitError> {
        validation::validate_new_plot(&update)?;
        let plot = self.gateway.update_plot(id, &update).await.map_err(|e| {
            log::error!("Failed to update plot {id}: {e}");
            SubmitError::from(e)
        })?;
        if let Some(existing) = self.plots.iter_mut().find(|p| p.id == id) {
            *existing = plot;
        }
        Ok(())
    }

    /// Removes a plot; on success its plants become free-standing locally too.
    pub async fn remove_plot(&mut self, id: PlotId) -> Result<usize, SubmitError> {
        let removal = self.gateway.remove_plot(id).await.map_err(|e| {
            log::error!("Failed to remove plot {id}: {e}");
            SubmitError::from(e)
        })?;
        self.plots.retain(|p| p.id != id);
        for plant in self.plants.iter_mut().filter(|p| p.plot_id == Some(id)) {
            plant.set_placement(None, None);
        }
        Ok(removal.plants_converted)
    }

    pub(crate) fn replace_plant(&mut self, plant: Plant) {
        match self.plants.iter_mut().find(|p| p.id == plant.id) {
            Some(existing) => *existing = plant,
            None => self.plants.push(plant),
        }
    }
}
