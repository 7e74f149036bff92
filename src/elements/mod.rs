//! Physical description of the bearing and its discretized film

mod geometry;
mod grid;
mod lubricant;

pub use geometry::{
    BearingGeometry, BearingType, LONG_BEARING_MIN_SLENDERNESS, SHORT_BEARING_MAX_SLENDERNESS,
};
pub use grid::Grid;
pub use lubricant::Lubricant;
