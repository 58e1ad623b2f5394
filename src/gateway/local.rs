use std::sync::Arc;

use async_trait::async_trait;

use crate::data::{GardenStore, StoreError};
use crate::gateway::{Gateway, GatewayError};
use crate::models::{
    garden::{Area, Plot},
    plant::{Plant, PlantType},
    request::{
        NewPlot, PlantCreateRequest, PlantMoveRequest, PlantRemoval, PlantUpdateRequest,
        PlotRemoval,
    },
    PlantId, PlotId,
};

impl From<StoreError> for GatewayError {
    fn from(err: StoreError) -> Self {
        GatewayError::from_code(err.code(), err.to_string())
    }
}

/// [`Gateway`] that talks to an in-process [`GardenStore`], skipping HTTP.
#[derive(Debug, Clone)]
pub struct LocalGateway {
    store: Arc<GardenStore>,
}

impl LocalGateway {
    pub fn new(store: Arc<GardenStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<GardenStore> {
        &self.store
    }
}

#[async_trait]
impl Gateway for LocalGateway {
    async fn list_areas(&self) -> Result<Vec<Area>, GatewayError> {
        Ok(self.store.list_areas().await)
    }

    async fn list_plots(&self) -> Result<Vec<Plot>, GatewayError> {
        Ok(self.store.list_plots().await)
    }

    async fn list_plants(&self) -> Result<Vec<Plant>, GatewayError> {
        Ok(self.store.list_plants().await)
    }

    async fn list_plant_types(&self) -> Result<Vec<PlantType>, GatewayError> {
        Ok(self.store.list_plant_types().await)
    }

    async fn get_plant(&self, id: PlantId) -> Result<Plant, GatewayError> {
        Ok(self.store.get_plant(id).await?)
    }

    async fn create_plant(&self, request: &PlantCreateRequest) -> Result<Plant, GatewayError> {
        Ok(self.store.create_plant(request.clone()).await?)
    }

    async fn update_plant(
        &self,
        id: PlantId,
        request: &PlantUpdateRequest,
    ) -> Result<Plant, GatewayError> {
        Ok(self.store.update_plant(id, request.clone()).await?)
    }

    async fn move_plant(
        &self,
        id: PlantId,
        request: &PlantMoveRequest,
    ) -> Result<Plant, GatewayError> {
        Ok(self.store.move_plant(id, request.clone()).await?)
    }

    async fn remove_plant(&self, id: PlantId) -> Result<PlantRemoval, GatewayError> {
        Ok(self.store.remove_plant(id).await?)
    }

    async fn create_plot(&self, request: &NewPlot) -> Result<Plot, GatewayError> {
        Ok(self.store.create_plot(request.clone()).await?)
    }

    async fn update_plot(&self, id: PlotId, request: &NewPlot) -> Result<Plot, GatewayError> {
        Ok(self.store.update_plot(id, request.clone()).await?)
    }

    async fn remove_plot(&self, id: PlotId) -> Result<PlotRemoval, GatewayError> {
        Ok(self.store.remove_plot(id).await?)
    }
}
