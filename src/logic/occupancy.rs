use std::collections::HashSet;

use crate::models::{garden::Plot, plant::Plant, PlantId, PlotId, Position};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("Position {position} is outside the {width}x{length} plot")]
    OutOfBounds {
        position: Position,
        width: u32,
        length: u32,
    },
    #[error("Position {0} is already occupied")]
    PositionOccupied(Position),
    #[error("Plot {plot_id} is full, no free position left")]
    PlotFull { plot_id: PlotId },
}

/// Cells of one plot currently held by a plant. Derived from a snapshot on
/// every call, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancySet(HashSet<Position>);

impl OccupancySet {
    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Position> for OccupancySet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Collects the cells of `plot` held by plants of the snapshot.
/// Plants in other plots, free-standing plants, plants missing a coordinate and
/// the plant identified by `exclude` (a plant being moved) are ignored.
pub fn compute_occupancy<'a>(
    plot: &Plot,
    plants: impl IntoIterator<Item = &'a Plant>,
    exclude: Option<PlantId>,
) -> OccupancySet {
    plants
        .into_iter()
        .filter(|p| p.plot_id == Some(plot.id))
        .filter(|p| exclude != Some(p.id))
        .filter_map(Plant::position)
        .collect()
}

/// Row-major scan (`y` outer, `x` inner) for the first free cell.
pub fn find_first_available(
    plot: &Plot,
    occupied: &OccupancySet,
) -> Result<Position, PlacementError> {
    (0..plot.length)
        .flat_map(|y| (0..plot.width).map(move |x| Position::new(x, y)))
        .find(|p| !occupied.contains(*p))
        .ok_or(PlacementError::PlotFull { plot_id: plot.id })
}

pub fn is_available(position: Position, occupied: &OccupancySet) -> bool {
    !occupied.contains(position)
}

/// Bounds and occupancy check, run right before a payload is built.
pub fn validate_selection(
    plot: &Plot,
    position: Position,
    occupied: &OccupancySet,
) -> Result<(), PlacementError> {
    if !plot.contains(position) {
        return Err(PlacementError::OutOfBounds {
            position,
            width: plot.width,
            length: plot.length,
        });
    }
    if !is_available(position, occupied) {
        return Err(PlacementError::PositionOccupied(position));
    }
    Ok(())
}

/// Validates an explicit choice, or falls back to the first free cell.
pub fn resolve_placement(
    plot: &Plot,
    requested: Option<Position>,
    occupied: &OccupancySet,
) -> Result<Position, PlacementError> {
    match requested {
        Some(position) => validate_selection(plot, position, occupied).map(|()| position),
        None => find_first_available(plot, occupied),
    }
}
