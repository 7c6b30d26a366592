//! Reusable search working set: arena-stored nodes, the open heap, and the
//! coordinate cache.

use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// Additive move cost. [`UNREACHABLE`] plays the role of infinity.
pub type Cost = i32;

/// Sentinel cost meaning "unreachable"; cost arithmetic saturates here
/// instead of overflowing.
pub const UNREACHABLE: Cost = Cost::MAX;

/// Arena index sentinel for "no predecessor" (the start node).
pub(crate) const NO_PARENT: usize = usize::MAX;

/// A discovered coordinate with its best-known accumulated cost `g`, its
/// estimated total cost `f`, and the arena index of the predecessor that
/// produced `g`. Nodes are created on first discovery and updated in place
/// when a cheaper path to the same coordinate is found; they are never
/// removed during a search.
pub(crate) struct Node<C> {
    pub(crate) coord: C,
    pub(crate) g: Cost,
    pub(crate) f: Cost,
    pub(crate) parent: usize,
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenRef {
    pub(crate) idx: usize,
    pub(crate) f: Cost,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable A* working set.
///
/// Owns the node arena, the open heap, and the coordinate→node cache. All
/// three are cleared at the start of every search, so each call is
/// independent and reentrant; keeping one `PathBuffer` around between
/// searches reuses the allocations.
pub struct PathBuffer<C> {
    pub(crate) nodes: Vec<Node<C>>,
    pub(crate) open: BinaryHeap<OpenRef>,
    pub(crate) cache: HashMap<C, usize>,
    // shared scratch buffer for adjacency queries
    pub(crate) nbuf: Vec<(C, Cost)>,
}

impl<C: Clone + Eq + Hash> PathBuffer<C> {
    /// Create an empty `PathBuffer`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            cache: HashMap::new(),
            nbuf: Vec::with_capacity(8),
        }
    }
}

impl<C: Clone + Eq + Hash> Default for PathBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}
