use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config;
use crate::gateway::{Gateway, GatewayError};
use crate::models::{
    garden::{Area, Plot},
    plant::{Plant, PlantType},
    request::{
        ErrorResponse, NewPlot, PlantCreateRequest, PlantMoveRequest, PlantRemoval,
        PlantUpdateRequest, PlotRemoval,
    },
    PlantId, PlotId,
};

/// [`Gateway`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Uses `POTSANDPLOTS_API_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        Self::new(config::api_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("request failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = error_from_response(status, &body);
            log::error!("API error: HTTP {status}: {err}");
            return Err(err);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Transport(format!("invalid response body: {e}")))
    }
}

/// Prefers the structured `code` of the body; falls back on the status.
fn error_from_response(status: StatusCode, body: &str) -> GatewayError {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        return GatewayError::from_code(parsed.code, parsed.error);
    }
    let mut message = format!("HTTP error! status: {}", status.as_u16());
    if !body.trim().is_empty() {
        message.push_str(" - ");
        message.push_str(body.trim());
    }
    match status {
        StatusCode::NOT_FOUND => GatewayError::NotFound(message),
        StatusCode::CONFLICT => GatewayError::PositionOccupied(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            GatewayError::Validation(message)
        }
        _ => GatewayError::Transport(message),
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn list_areas(&self) -> Result<Vec<Area>, GatewayError> {
        self.send(self.client.get(self.url("/areas"))).await
    }

    async fn list_plots(&self) -> Result<Vec<Plot>, GatewayError> {
        self.send(self.client.get(self.url("/plots"))).await
    }

    async fn list_plants(&self) -> Result<Vec<Plant>, GatewayError> {
        self.send(self.client.get(self.url("/plants"))).await
    }

    async fn list_plant_types(&self) -> Result<Vec<PlantType>, GatewayError> {
        self.send(self.client.get(self.url("/plant-types"))).await
    }

    async fn get_plant(&self, id: PlantId) -> Result<Plant, GatewayError> {
        self.send(self.client.get(self.url(&format!("/plants/{id}"))))
            .await
    }

    async fn create_plant(&self, request: &PlantCreateRequest) -> Result<Plant, GatewayError> {
        log::debug!("Adding plant: {request:?}");
        self.send(self.client.post(self.url("/plants")).json(request))
            .await
    }

    async fn update_plant(
        &self,
        id: PlantId,
        request: &PlantUpdateRequest,
    ) -> Result<Plant, GatewayError> {
        log::debug!("Updating plant {id} with {request:?}");
        self.send(self.client.put(self.url(&format!("/plants/{id}"))).json(request))
            .await
    }

    async fn move_plant(
        &self,
        id: PlantId,
        request: &PlantMoveRequest,
    ) -> Result<Plant, GatewayError> {
        log::debug!("Moving plant {id} to {request:?}");
        self.send(
            self.client
                .put(self.url(&format!("/plants/{id}/move")))
                .json(request),
        )
        .await
    }

    async fn remove_plant(&self, id: PlantId) -> Result<PlantRemoval, GatewayError> {
        self.send(self.client.delete(self.url(&format!("/plants/{id}"))))
            .await
    }

    async fn create_plot(&self, request: &NewPlot) -> Result<Plot, GatewayError> {
        self.send(self.client.post(self.url("/plots")).json(request))
            .await
    }

    async fn update_plot(&self, id: PlotId, request: &NewPlot) -> Result<Plot, GatewayError> {
        self.send(self.client.put(self.url(&format!("/plots/{id}"))).json(request))
            .await
    }

    async fn remove_plot(&self, id: PlotId) -> Result<PlotRemoval, GatewayError> {
        self.send(self.client.delete(self.url(&format!("/plots/{id}"))))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_body_wins_over_status() {
        let body = r#"{"code":"POSITION_OCCUPIED","error":"Position (0, 0) is already occupied"}"#;
        let err = error_from_response(StatusCode::CONFLICT, body);
        assert_eq!(
            err,
            GatewayError::PositionOccupied("Position (0, 0) is already occupied".into())
        );
    }

    #[test]
    fn test_plain_404_maps_to_not_found() {
        let err = error_from_response(StatusCode::NOT_FOUND, "");
        assert_eq!(err, GatewayError::NotFound("HTTP error! status: 404".into()));
    }

    #[test]
    fn test_server_error_is_transport() {
        let err = error_from_response(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(
            err,
            GatewayError::Transport("HTTP error! status: 500 - boom".into())
        );
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let gateway = HttpGateway::new("http://localhost:8080/api/");
        assert_eq!(gateway.base_url(), "http://localhost:8080/api");
        assert_eq!(gateway.url("/plants"), "http://localhost:8080/api/plants");
    }
}
