//! Conversions between pixel-style coordinates and steplength-sized grid
//! cells.

use crate::{Coord, Unit};

/// Elementwise floor-divide a coordinate by `steplength`, converting pixel
/// units into grid cells. Uses euclidean division so negative components
/// floor rather than truncate toward zero.
pub fn convert_to_steplength(coord: &[Unit], steplength: Unit) -> Coord {
    coord.iter().map(|c| c.div_euclid(steplength)).collect()
}

/// Elementwise multiply a grid-cell coordinate back into pixel units. The
/// inverse of [`convert_to_steplength`] for grid-aligned coordinates.
pub fn convert_from_steplength(coord: &[Unit], steplength: Unit) -> Coord {
    coord.iter().map(|c| c * steplength).collect()
}

/// Floor a pixel coordinate onto the nearest grid-aligned coordinate.
pub fn round_to_steplength(coord: &[Unit], steplength: Unit) -> Coord {
    convert_from_steplength(&convert_to_steplength(coord, steplength), steplength)
}
