use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod garden;
pub mod plant;
pub mod request;

pub type AreaId = i64;
pub type PlotId = i64;
pub type PlantId = i64;
pub type PlantTypeId = i64;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// A zero-based (x, y) cell within a plot: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
