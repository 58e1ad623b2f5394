use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{AreaId, PlantId, PlantTypeId, PlotId, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Sick,
    Recovering,
    Dormant,
    Flowering,
    Fruiting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum WateringSchedule {
    Daily,
    EveryOtherDay,
    TwiceWeekly,
    #[default]
    Weekly,
    BiWeekly,
    Monthly,
    AsNeeded,
}

/// A catalogue entry referenced by `Plant::species_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantType {
    pub id: PlantTypeId,
    pub common_name: String,
    pub latin_name: Option<String>,
    pub light_requirements: Option<String>,
    pub water_requirements: Option<String>,
    pub soil_requirements: Option<String>,
    pub image_url: Option<String>,
    pub is_edible: bool,
}

/// A plant record. Plants without a `plot_id` are free-standing and carry no
/// grid position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub species_id: PlantTypeId,
    pub area_id: AreaId,
    pub plot_id: Option<PlotId>,
    pub position_x: Option<u32>,
    pub position_y: Option<u32>,
    pub planted_date: Option<NaiveDate>,
    pub health_status: Option<HealthStatus>,
    pub notes: Option<String>,
    pub watering_schedule: Option<WateringSchedule>,
}

impl Plant {
    /// The grid cell held by this plant, when both coordinates are present.
    pub fn position(&self) -> Option<Position> {
        match (self.position_x, self.position_y) {
            (Some(x), Some(y)) => Some(Position::new(x, y)),
            _ => None,
        }
    }

    pub fn is_free_standing(&self) -> bool {
        self.plot_id.is_none()
    }

    pub fn set_placement(&mut self, plot_id: Option<PlotId>, position: Option<Position>) {
        self.plot_id = plot_id;
        self.position_x = position.map(|p| p.x);
        self.position_y = position.map(|p| p.y);
    }
}
