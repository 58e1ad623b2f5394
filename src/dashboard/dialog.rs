use crate::dashboard::{Dashboard, SubmitError};
use crate::gateway::{Gateway, GatewayError};
use crate::logic::occupancy::{find_first_available, resolve_placement, validate_selection};
use crate::logic::validation::{self, ValidationError};
use crate::models::{
    plant::Plant,
    request::{PlantCreateRequest, PlantMoveRequest},
    AreaId, PlantId, PlantTypeId, PlotId, Position,
};

/// Proof that a request was started by a given opening of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// Open/in-flight bookkeeping, one per dialog instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DialogState {
    generation: u64,
    open: bool,
    in_flight: bool,
}

impl DialogState {
    pub(crate) fn opened() -> Self {
        Self {
            generation: 0,
            open: true,
            in_flight: false,
        }
    }

    pub(crate) fn ensure_idle(&self) -> Result<(), SubmitError> {
        if !self.open {
            return Err(SubmitError::Closed);
        }
        if self.in_flight {
            return Err(SubmitError::Busy);
        }
        Ok(())
    }

    pub(crate) fn begin(&mut self) -> Result<Ticket, SubmitError> {
        self.ensure_idle()?;
        self.in_flight = true;
        Ok(Ticket {
            generation: self.generation,
        })
    }

    /// Clears the in-flight flag. Returns false when the ticket predates a
    /// close, in which case the dialog is left alone.
    pub(crate) fn finish(&mut self, ticket: Ticket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
        self.in_flight = false;
        self.generation += 1;
    }

    pub(crate) fn open(&self) -> bool {
        self.open
    }

    pub(crate) fn in_flight(&self) -> bool {
        self.in_flight
    }
}

// --------------------------------------------------------------------------
// Add plant
// --------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPlantDialog {
    area_id: AreaId,
    plot_id: Option<PlotId>,
    pub name: String,
    pub species_id: Option<PlantTypeId>,
    pub notes: String,
    selected: Option<Position>,
    state: DialogState,
}

impl AddPlantDialog {
    pub fn area_id(&self) -> AreaId {
        self.area_id
    }

    pub fn plot_id(&self) -> Option<PlotId> {
        self.plot_id
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.in_flight
    }

    pub fn begin(&mut self) -> Result<Ticket, SubmitError> {
        self.state.begin()
    }

    pub fn close(&mut self) {
        self.state.close();
    }
}

// --------------------------------------------------------------------------
// Move plant
// --------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlantDialog {
    plant_id: PlantId,
    area_id: AreaId,
    plot_id: Option<PlotId>,
    selected: Option<Position>,
    state: DialogState,
}

impl MovePlantDialog {
    pub fn plant_id(&self) -> PlantId {
        self.plant_id
    }

    pub fn area_id(&self) -> AreaId {
        self.area_id
    }

    pub fn plot_id(&self) -> Option<PlotId> {
        self.plot_id
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// A new area drops the plot and the cell.
    pub fn set_area(&mut self, area_id: AreaId) {
        if area_id != self.area_id {
            self.area_id = area_id;
            self.plot_id = None;
            self.selected = None;
        }
    }

    /// A new plot drops the cell.
    pub fn set_plot(&mut self, plot_id: Option<PlotId>) {
        if plot_id != self.plot_id {
            self.plot_id = plot_id;
            self.selected = None;
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.in_flight
    }

    pub fn begin(&mut self) -> Result<Ticket, SubmitError> {
        self.state.begin()
    }

    pub fn close(&mut self) {
        self.state.close();
    }
}

impl<G: Gateway> Dashboard<G> {
    /// Opens the add dialog for an area, optionally targeting a plot and a
    /// cell. A plot without a cell pre-selects the first free one.
    pub fn open_add_dialog(
        &self,
        area_id: AreaId,
        plot_id: Option<PlotId>,
        position: Option<Position>,
    ) -> Result<AddPlantDialog, ValidationError> {
        if self.area(area_id).is_none() {
            return Err(ValidationError::UnknownArea(area_id));
        }
        let selected = match plot_id {
            Some(plot_id) => {
                let plot = self.plot_in_area(plot_id, area_id)?;
                Some(resolve_placement(plot, position, &self.occupancy(plot, None))?)
            }
            None if position.is_some() => return Err(ValidationError::PositionWithoutPlot),
            None => None,
        };
        Ok(AddPlantDialog {
            area_id,
            plot_id,
            name: String::new(),
            species_id: None,
            notes: String::new(),
            selected,
            state: DialogState::opened(),
        })
    }

    pub fn select_add_cell(
        &self,
        dialog: &mut AddPlantDialog,
        position: Position,
    ) -> Result<(), ValidationError> {
        let plot_id = dialog.plot_id.ok_or(ValidationError::PositionWithoutPlot)?;
        let plot = self.plot_in_area(plot_id, dialog.area_id)?;
        validate_selection(plot, position, &self.occupancy(plot, None))?;
        dialog.selected = Some(position);
        Ok(())
    }

    /// Builds the create payload, re-checking the cell against the current
    /// snapshot.
    pub fn prepare_add(&self, dialog: &AddPlantDialog) -> Result<PlantCreateRequest, ValidationError> {
        let name = validation::require_name(&dialog.name)?;
        let species_id = validation::require_species(dialog.species_id)?;
        let position = match dialog.plot_id {
            Some(plot_id) => {
                let plot = self.plot_in_area(plot_id, dialog.area_id)?;
                let occupied = self.occupancy(plot, None);
                let position = match dialog.selected {
                    Some(position) => position,
                    None => find_first_available(plot, &occupied)?,
                };
                validate_selection(plot, position, &occupied)?;
                Some(position)
            }
            None => None,
        };
        Ok(PlantCreateRequest {
            name,
            species_id,
            area_id: dialog.area_id,
            plot_id: dialog.plot_id,
            position_x: position.map(|p| p.x),
            position_y: position.map(|p| p.y),
            notes: Some(dialog.notes.trim().to_string()),
        })
    }

    pub async fn submit_add(&mut self, dialog: &mut AddPlantDialog) -> Result<PlantId, SubmitError> {
        dialog.state.ensure_idle()?;
        let request = self.prepare_add(dialog).inspect_err(|e| {
            log::warn!("Add plant rejected locally: {e}");
        })?;
        let ticket = dialog.begin()?;
        let result = self.gateway.create_plant(&request).await;
        self.complete_add(dialog, ticket, result)
    }

    /// Applies the outcome of a create call. The snapshot takes a confirmed
    /// plant even when the dialog was closed meanwhile; a stale dialog is
    /// not touched.
    pub fn complete_add(
        &mut self,
        dialog: &mut AddPlantDialog,
        ticket: Ticket,
        result: Result<Plant, GatewayError>,
    ) -> Result<PlantId, SubmitError> {
        let current = dialog.state.finish(ticket);
        match result {
            Ok(plant) => {
                let id = plant.id;
                self.replace_plant(plant);
                if current {
                    dialog.close();
                }
                Ok(id)
            }
            Err(e) => {
                log::error!("Failed to add plant: {e}");
                Err(e.into())
            }
        }
    }

    /// Opens the move dialog on the plant's current placement.
    pub fn open_move_dialog(&self, plant_id: PlantId) -> Result<MovePlantDialog, ValidationError> {
        let plant = self
            .plant(plant_id)
            .ok_or(ValidationError::UnknownPlant(plant_id))?;
        Ok(MovePlantDialog {
            plant_id,
            area_id: plant.area_id,
            plot_id: plant.plot_id,
            selected: plant.position(),
            state: DialogState::opened(),
        })
    }

    /// The moving plant never blocks its own cell.
    pub fn select_move_cell(
        &self,
        dialog: &mut MovePlantDialog,
        position: Position,
    ) -> Result<(), ValidationError> {
        let plot_id = dialog.plot_id.ok_or(ValidationError::PositionWithoutPlot)?;
        let plot = self.plot_in_area(plot_id, dialog.area_id)?;
        validate_selection(plot, position, &self.occupancy(plot, Some(dialog.plant_id)))?;
        dialog.selected = Some(position);
        Ok(())
    }

    pub fn prepare_move(&self, dialog: &MovePlantDialog) -> Result<PlantMoveRequest, ValidationError> {
        if self.area(dialog.area_id).is_none() {
            return Err(ValidationError::UnknownArea(dialog.area_id));
        }
        let position = match dialog.plot_id {
            Some(plot_id) => {
                let plot = self.plot_in_area(plot_id, dialog.area_id)?;
                let position = dialog.selected.ok_or(ValidationError::PositionNotSelected)?;
                validate_selection(plot, position, &self.occupancy(plot, Some(dialog.plant_id)))?;
                Some(position)
            }
            None => None,
        };
        Ok(PlantMoveRequest::new(dialog.area_id, dialog.plot_id, position))
    }

    pub async fn submit_move(&mut self, dialog: &mut MovePlantDialog) -> Result<(), SubmitError> {
        dialog.state.ensure_idle()?;
        let request = self.prepare_move(dialog).inspect_err(|e| {
            log::warn!("Move of plant {} rejected locally: {e}", dialog.plant_id);
        })?;
        let ticket = dialog.begin()?;
        let result = self.gateway.move_plant(dialog.plant_id, &request).await;
        self.complete_move(dialog, ticket, result)
    }

    pub fn complete_move(
        &mut self,
        dialog: &mut MovePlantDialog,
        ticket: Ticket,
        result: Result<Plant, GatewayError>,
    ) -> Result<(), SubmitError> {
        let current = dialog.state.finish(ticket);
        match result {
            Ok(plant) => {
                self.replace_plant(plant);
                if current {
                    dialog.close();
                }
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to move plant {}: {e}", dialog.plant_id);
                Err(e.into())
            }
        }
    }
}
