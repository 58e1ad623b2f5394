use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::logic::occupancy::{compute_occupancy, is_available};
use crate::models::{plant::Plant, AreaId, Matrix, PlantId, PlotId, Position};

/// A named growing location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub location_type: String,
    pub is_covered: bool,
    pub is_greenhouse: bool,
    pub brightness: String,
}

/// A rectangular grid of planting cells, `width` columns by `length` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    pub id: PlotId,
    pub name: String,
    pub area_id: AreaId,
    pub plot_type: String,
    pub width: u32,
    pub length: u32,
    pub soil_type: Option<String>,
    pub drainage_level: Option<String>,
    pub ph: Option<f64>,
}

impl Plot {
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.length
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub position: Position,
    pub plant_id: Option<PlantId>,
    /// False when the cell cannot be picked as an add/move target.
    pub available: bool,
}

/// Rendered cell matrix of one plot, indexed `cells[y][x]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotGrid {
    pub plot_id: PlotId,
    pub rows: usize,
    pub cols: usize,
    pub cells: Matrix<GridCell>,
}

impl PlotGrid {
    /// Lays out the plants of `plot` on its grid. `exclude` leaves one plant
    /// out, so a plant being moved does not block its own cell.
    pub fn build(plot: &Plot, plants: &[Plant], exclude: Option<PlantId>) -> Self {
        let occupied = compute_occupancy(plot, plants, exclude);
        let mut cells: Matrix<GridCell> = (0..plot.length)
            .map(|y| {
                (0..plot.width)
                    .map(|x| {
                        let position = Position::new(x, y);
                        GridCell {
                            position,
                            plant_id: None,
                            available: is_available(position, &occupied),
                        }
                    })
                    .collect()
            })
            .collect();

        for plant in plants
            .iter()
            .filter(|p| p.plot_id == Some(plot.id) && exclude != Some(p.id))
        {
            let Some(position) = plant.position() else {
                continue;
            };
            if !plot.contains(position) {
                log::warn!(
                    "Plant {} sits at {position}, outside plot {} ({}x{}); not drawn",
                    plant.id,
                    plot.id,
                    plot.width,
                    plot.length
                );
                continue;
            }
            cells[position.y as usize][position.x as usize].plant_id = Some(plant.id);
        }

        Self {
            plot_id: plot.id,
            rows: plot.length as usize,
            cols: plot.width as usize,
            cells,
        }
    }

    pub fn cell(&self, position: Position) -> Option<&GridCell> {
        self.cells
            .get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
    }

    /// Pickable cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| c.available)
            .map(|c| c.position)
    }
}
