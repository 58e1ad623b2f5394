use crate::logic::occupancy::PlacementError;
use crate::models::{
    garden::Plot, request::NewPlot, AreaId, PlantId, PlantTypeId, PlotId, Position,
};

/// Local failures, detected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a plant name")]
    MissingName,
    #[error("Please select a plant type")]
    MissingSpecies,
    #[error("Please select a position in the plot")]
    PositionNotSelected,
    #[error("Both position coordinates must be given together")]
    IncompletePosition,
    #[error("A position requires a plot")]
    PositionWithoutPlot,
    #[error("Plot {plot_id} does not belong to area {area_id}")]
    PlotOutsideArea { plot_id: PlotId, area_id: AreaId },
    #[error("Please enter a plot name")]
    MissingPlotName,
    #[error("Plot dimensions must be at least 1x1, got {width}x{length}")]
    InvalidDimensions { width: u32, length: u32 },
    #[error("Plot cannot shrink to {width}x{length}: plant {plant_id} sits at {position}")]
    PlotTooSmall {
        width: u32,
        length: u32,
        plant_id: PlantId,
        position: Position,
    },
    #[error("Unknown area {0}")]
    UnknownArea(AreaId),
    #[error("Unknown plot {0}")]
    UnknownPlot(PlotId),
    #[error("Unknown plant {0}")]
    UnknownPlant(PlantId),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Returns the trimmed name, rejecting blank input.
pub fn require_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(trimmed.to_string())
}

pub fn require_species(species_id: Option<PlantTypeId>) -> Result<PlantTypeId, ValidationError> {
    species_id.ok_or(ValidationError::MissingSpecies)
}

/// Coordinates must travel as a pair.
pub fn pair_position(x: Option<u32>, y: Option<u32>) -> Result<Option<Position>, ValidationError> {
    match (x, y) {
        (Some(x), Some(y)) => Ok(Some(Position::new(x, y))),
        (None, None) => Ok(None),
        _ => Err(ValidationError::IncompletePosition),
    }
}

pub fn check_plot_in_area(plot: &Plot, area_id: AreaId) -> Result<(), ValidationError> {
    if plot.area_id != area_id {
        return Err(ValidationError::PlotOutsideArea {
            plot_id: plot.id,
            area_id,
        });
    }
    Ok(())
}

pub fn validate_new_plot(plot: &NewPlot) -> Result<(), ValidationError> {
    if plot.name.trim().is_empty() {
        return Err(ValidationError::MissingPlotName);
    }
    if plot.width == 0 || plot.length == 0 {
        return Err(ValidationError::InvalidDimensions {
            width: plot.width,
            length: plot.length,
        });
    }
    Ok(())
}
