use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod plant;
pub mod request;
pub mod zone;

/// An integer cell of the garden design grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct GridPosition {
    pub x: i64,
    pub y: i64,
}

impl GridPosition {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Snaps raw (possibly fractional) coordinates onto the grid, rounding
    /// toward positive infinity.
    pub fn from_coords(x: f64, y: f64) -> Self {
        Self {
            x: x.ceil() as i64,
            y: y.ceil() as i64,
        }
    }

    /// Chebyshev distance to another cell.
    pub fn distance(&self, other: &GridPosition) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// All cells at Chebyshev distance `1..=radius`, excluding `self`.
    /// Cells that would fall outside the `i64` grid are left out.
    pub fn neighborhood(&self, radius: i64) -> impl Iterator<Item = GridPosition> + '_ {
        (-radius..=radius).flat_map(move |dx| {
            (-radius..=radius)
                .filter(move |&dy| dx != 0 || dy != 0)
                .filter_map(move |dy| {
                    Some(GridPosition::new(
                        self.x.checked_add(dx)?,
                        self.y.checked_add(dy)?,
                    ))
                })
        })
    }
}

/// A raw footprint as drawn in the designer. Coordinates may be fractional;
/// `rotation` is only sent for walls and is carried but never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Footprint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Footprint {
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            rotation: None,
        }
    }

    pub fn position(&self) -> GridPosition {
        GridPosition::from_coords(self.x, self.y)
    }
}
