//! **strider-paths**: generic A* search over abstract coordinates.
//!
//! The search is defined entirely by caller-supplied callbacks: an
//! adjacency function enumerating `(neighbor, cost)` pairs (the ground
//! truth for which moves are legal) and an admissible heuristic. The
//! pathfinder itself never touches collision logic or a concrete grid.
//!
//! Two entry points share one implementation:
//!
//! - [`astar`], a one-shot convenience function taking closures.
//! - [`PathBuffer::astar`], a trait-based form ([`AstarGraph`]) whose
//!   working set (node arena, open heap, coordinate cache) is reused
//!   across searches to avoid reallocation.
//!
//! "No route" is an expected outcome, reported as `None` rather than an
//! error. Costs are additive `i32` values; [`UNREACHABLE`] plays the role
//! of infinity, and a heuristic may return it to mark a dead end.

mod astar;
mod buffer;
mod distance;
mod traits;

pub use astar::astar;
pub use buffer::{Cost, PathBuffer, UNREACHABLE};
pub use distance::{chebyshev, euclidean, manhattan};
pub use traits::{AstarGraph, Graph};
