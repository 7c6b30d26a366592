use std::hash::Hash;

use crate::buffer::Cost;

/// Minimal graph interface: adjacency enumeration with per-edge costs.
pub trait Graph {
    /// Coordinate type the graph is defined over.
    type Coord: Clone + Eq + Hash;

    /// Append a `(neighbor, move cost)` pair for every legal move out of
    /// `c` into `buf`. The caller clears `buf` before calling.
    ///
    /// Costs must be non-negative. Blocked or otherwise illegal neighbors
    /// are simply not produced; the search treats the output as ground
    /// truth.
    fn adjacent(&self, c: &Self::Coord, buf: &mut Vec<(Self::Coord, Cost)>);
}

/// Graph with a remaining-cost estimate, as required by A*.
pub trait AstarGraph: Graph {
    /// Lower-bound estimate of the cost remaining from `from` to `to`.
    ///
    /// Must never overestimate the true cost (admissible) for the search
    /// to be cost-optimal; this is not verified. Returning [`UNREACHABLE`]
    /// marks `from` as a dead end that will not be expanded.
    ///
    /// [`UNREACHABLE`]: crate::UNREACHABLE
    fn estimate(&self, from: &Self::Coord, to: &Self::Coord) -> Cost;
}
