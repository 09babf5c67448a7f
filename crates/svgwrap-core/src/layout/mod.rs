//! Arranging the members of a group along rows, columns or a grid.
//!
//! Layouts move shapes by rewriting their positional attributes so that each
//! shape's bounding box (own transform included) lands at the computed spot.

mod flex;
mod grid;

pub use flex::{Flex, FlexOptions};
pub use grid::{Grid, GridOptions};

use serde::{Deserialize, Serialize};

/// Placement of an item within the free space along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    /// Offset of an item inside `free` units of leftover space.
    pub fn offset(self, free: f64) -> f64 {
        match self {
            Align::Start => 0.0,
            Align::Center => free / 2.0,
            Align::End => free,
        }
    }
}

/// Main axis of a flex layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Row,
    Column,
}

/// Alignment along the main and cross axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignment {
    pub main: Align,
    pub cross: Align,
}
