//! Client-side access to the REST API.
//!
//! Every write may fail; failures come back as a [`GatewayError`] whose
//! variant tells a position conflict apart from other failures, so callers
//! never inspect message text.

use async_trait::async_trait;

use crate::models::{
    garden::{Area, Plot},
    plant::{Plant, PlantType},
    request::{
        ErrorCode, NewPlot, PlantCreateRequest, PlantMoveRequest, PlantRemoval,
        PlantUpdateRequest, PlotRemoval,
    },
    PlantId, PlotId,
};

pub mod http;
pub mod local;

pub use http::HttpGateway;
pub use local::LocalGateway;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The target cell was taken by someone else between read and write.
    #[error("{0}")]
    PositionOccupied(String),
    #[error("{0}")]
    PlotFull(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    /// Network failure, unexpected status or undecodable body.
    #[error("{0}")]
    Transport(String),
}

impl GatewayError {
    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            ErrorCode::PositionOccupied => GatewayError::PositionOccupied(message),
            ErrorCode::PlotFull => GatewayError::PlotFull(message),
            ErrorCode::NotFound => GatewayError::NotFound(message),
            ErrorCode::ValidationError => GatewayError::Validation(message),
        }
    }

    /// True for failures caused by a concurrent change to the plot.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            GatewayError::PositionOccupied(_) | GatewayError::PlotFull(_)
        )
    }
}

/// The operations the dashboard needs from the backend. Each call is
/// attempted once; there are no retries.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn list_areas(&self) -> Result<Vec<Area>, GatewayError>;
    async fn list_plots(&self) -> Result<Vec<Plot>, GatewayError>;
    async fn list_plants(&self) -> Result<Vec<Plant>, GatewayError>;
    async fn list_plant_types(&self) -> Result<Vec<PlantType>, GatewayError>;
    async fn get_plant(&self, id: PlantId) -> Result<Plant, GatewayError>;
    async fn create_plant(&self, request: &PlantCreateRequest) -> Result<Plant, GatewayError>;
    async fn update_plant(
        &self,
        id: PlantId,
        request: &PlantUpdateRequest,
    ) -> Result<Plant, GatewayError>;
    async fn move_plant(
        &self,
        id: PlantId,
        request: &PlantMoveRequest,
    ) -> Result<Plant, GatewayError>;
    async fn remove_plant(&self, id: PlantId) -> Result<PlantRemoval, GatewayError>;
    async fn create_plot(&self, request: &NewPlot) -> Result<Plot, GatewayError>;
    async fn update_plot(&self, id: PlotId, request: &NewPlot) -> Result<Plot, GatewayError>;
    async fn remove_plot(&self, id: PlotId) -> Result<PlotRemoval, GatewayError>;
}
