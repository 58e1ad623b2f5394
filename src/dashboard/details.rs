use chrono::NaiveDate;

use crate::dashboard::{dialog::DialogState, Dashboard, SubmitError, Ticket};
use crate::gateway::{Gateway, GatewayError};
use crate::logic::validation::{self, ValidationError};
use crate::models::{
    plant::{HealthStatus, Plant, WateringSchedule},
    request::PlantUpdateRequest,
    PlantId, PlantTypeId,
};

/// Editable copy of a plant's descriptive fields. Placement is changed
/// through the move dialog only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantDetailsForm {
    plant_id: PlantId,
    pub name: String,
    pub species_id: Option<PlantTypeId>,
    pub health_status: HealthStatus,
    pub watering_schedule: WateringSchedule,
    pub planted_date: Option<NaiveDate>,
    pub notes: String,
    state: DialogState,
}

impl PlantDetailsForm {
    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            plant_id: plant.id,
            name: plant.name.clone(),
            species_id: Some(plant.species_id),
            health_status: plant.health_status.unwrap_or_default(),
            watering_schedule: plant.watering_schedule.unwrap_or_default(),
            planted_date: plant.planted_date,
            notes: plant.notes.clone().unwrap_or_default(),
            state: DialogState::opened(),
        }
    }

    pub fn plant_id(&self) -> PlantId {
        self.plant_id
    }

    pub fn is_open(&self) -> bool {
        self.state.open()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.in_flight()
    }

    pub fn begin(&mut self) -> Result<Ticket, SubmitError> {
        self.state.begin()
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    pub fn to_request(&self) -> Result<PlantUpdateRequest, ValidationError> {
        Ok(PlantUpdateRequest {
            name: Some(validation::require_name(&self.name)?),
            species_id: Some(validation::require_species(self.species_id)?),
            health_status: Some(self.health_status),
            notes: Some(self.notes.trim().to_string()),
            watering_schedule: Some(self.watering_schedule),
            planted_date: self.planted_date,
        })
    }
}

impl<G: Gateway> Dashboard<G> {
    /// Fetches the latest copy of a plant and opens the details form on it.
    pub async fn open_details(&mut self, id: PlantId) -> Result<PlantDetailsForm, SubmitError> {
        let plant = self.gateway.get_plant(id).await.inspect_err(|e| {
            log::error!("Failed to load plant {id}: {e}");
        })?;
        let form = PlantDetailsForm::from_plant(&plant);
        self.replace_plant(plant);
        Ok(form)
    }

    pub async fn submit_details(&mut self, form: &mut PlantDetailsForm) -> Result<(), SubmitError> {
        form.state.ensure_idle()?;
        let request = form.to_request()?;
        let ticket = form.begin()?;
        let result = self.gateway.update_plant(form.plant_id, &request).await;
        self.complete_details(form, ticket, result)
    }

    /// Applies the outcome of an update call; a form closed meanwhile is
    /// left as is.
    pub fn complete_details(
        &mut self,
        form: &mut PlantDetailsForm,
        ticket: Ticket,
        result: Result<Plant, GatewayError>,
    ) -> Result<(), SubmitError> {
        let current = form.state.finish(ticket);
        match result {
            Ok(plant) => {
                self.replace_plant(plant);
                if current {
                    form.close();
                }
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to update plant {}: {e}", form.plant_id);
                Err(e.into())
            }
        }
    }
}
