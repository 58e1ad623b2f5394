use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{
    plant::{HealthStatus, WateringSchedule},
    AreaId, PlantId, PlantTypeId, PlotId, Position,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewArea {
    pub name: String,
    pub location_type: String,
    pub is_covered: bool,
    pub is_greenhouse: bool,
    pub brightness: String,
}

/// Plot fields for both creation and full replacement.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPlot {
    pub name: String,
    pub area_id: AreaId,
    pub plot_type: String,
    pub width: u32,
    pub length: u32,
    pub soil_type: Option<String>,
    pub drainage_level: Option<String>,
    pub ph: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPlantType {
    pub common_name: String,
    pub latin_name: Option<String>,
    pub light_requirements: Option<String>,
    pub water_requirements: Option<String>,
    pub soil_requirements: Option<String>,
    pub image_url: Option<String>,
    pub is_edible: bool,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantCreateRequest {
    pub name: String,
    pub species_id: PlantTypeId,
    pub area_id: AreaId,
    pub plot_id: Option<PlotId>,
    pub position_x: Option<u32>,
    pub position_y: Option<u32>,
    pub notes: Option<String>,
}

/// Partial update: absent fields are left untouched, a blank name is ignored.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantUpdateRequest {
    pub name: Option<String>,
    pub species_id: Option<PlantTypeId>,
    pub health_status: Option<HealthStatus>,
    pub notes: Option<String>,
    pub watering_schedule: Option<WateringSchedule>,
    pub planted_date: Option<NaiveDate>,
}

/// Relocation payload. Plot and coordinates are always sent, `null` meaning
/// free-standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantMoveRequest {
    pub area_id: AreaId,
    pub plot_id: Option<PlotId>,
    pub position_x: Option<u32>,
    pub position_y: Option<u32>,
}

impl PlantMoveRequest {
    pub fn new(area_id: AreaId, plot_id: Option<PlotId>, position: Option<Position>) -> Self {
        Self {
            area_id,
            plot_id,
            position_x: position.map(|p| p.x),
            position_y: position.map(|p| p.y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantRemoval {
    pub success: bool,
    pub plant_id: PlantId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlotRemoval {
    pub success: bool,
    pub message: String,
    /// Number of plants that became free-standing.
    pub plants_converted: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    PositionOccupied,
    PlotFull,
    NotFound,
    ValidationError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub error: String,
}
