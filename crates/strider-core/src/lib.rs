//! **strider-core**: coordinate and direction vocabulary for grid movement.
//!
//! This crate defines the shared language the rest of the *strider*
//! ecosystem speaks: N-axis integer coordinates, direction strings with
//! human-readable aliases, offset arithmetic, adjacency predicates, and
//! steplength (grid cell size) conversions.
//!
//! A [`System`] is an immutable capability record built once via
//! [`SystemBuilder`]; it is never mutated after construction. Directions are
//! signed axis combinations: for each axis, its lowercase letter denotes the
//! negative direction and its uppercase letter the positive one, so on the
//! usual screen-oriented 2D system `"Y"` moves down and `"xY"` moves
//! down-left.

pub mod steplength;
pub mod system;

pub use steplength::{convert_from_steplength, convert_to_steplength, round_to_steplength};
pub use system::{Connectivity, System, SystemBuilder, SystemError};

/// Signed component type for coordinates and offsets.
pub type Unit = i32;

/// A grid coordinate: one signed component per axis, in axis order.
///
/// Equality and hashing are structural; coordinates are plain values.
pub type Coord = Vec<Unit>;

/// A per-axis signed delta, optionally scaled by a steplength.
pub type Offset = Vec<Unit>;
