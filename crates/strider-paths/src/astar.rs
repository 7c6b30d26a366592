use std::hash::Hash;
use std::marker::PhantomData;

use crate::buffer::{Cost, NO_PARENT, Node, OpenRef, PathBuffer, UNREACHABLE};
use crate::traits::{AstarGraph, Graph};

impl<C: Clone + Eq + Hash> PathBuffer<C> {
    /// Compute a minimum-cost route from `start` to `target` using A*.
    ///
    /// Returns the full route including both endpoints, or `None` when the
    /// open set exhausts without reaching `target`, an expected outcome
    /// and
    /// not an error. `start == target` short-circuits to a one-element
    /// route without expanding any neighbors.
    pub fn astar<G>(&mut self, graph: &G, start: C, target: C) -> Option<Vec<C>>
    where
        G: AstarGraph<Coord = C>,
    {
        if start == target {
            return Some(vec![start]);
        }

        self.nodes.clear();
        self.open.clear();
        self.cache.clear();

        let f = graph.estimate(&start, &target);
        self.nodes.push(Node {
            coord: start.clone(),
            g: 0,
            f,
            parent: NO_PARENT,
        });
        self.cache.insert(start, 0);
        self.open.push(OpenRef { idx: 0, f });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut found = None;
        while let Some(OpenRef { idx, .. }) = self.open.pop() {
            if self.nodes[idx].coord == target {
                found = Some(idx);
                break;
            }
            // An infinite estimate marks a dead end: skip expanding it, but
            // keep draining the open set.
            if self.nodes[idx].f == UNREACHABLE {
                continue;
            }

            let current_g = self.nodes[idx].g;
            nbuf.clear();
            graph.adjacent(&self.nodes[idx].coord, &mut nbuf);

            for (ncoord, move_cost) in nbuf.drain(..) {
                let tentative = current_g.saturating_add(move_cost);
                if let Some(&ni) = self.cache.get(&ncoord) {
                    // Already discovered: adopt the cheaper path in place.
                    // The node keeps its position in the open set and is
                    // never enqueued twice.
                    let n = &mut self.nodes[ni];
                    if tentative < n.g {
                        n.g = tentative;
                        n.parent = idx;
                    }
                    continue;
                }
                let f = tentative.saturating_add(graph.estimate(&ncoord, &target));
                let ni = self.nodes.len();
                self.nodes.push(Node {
                    coord: ncoord.clone(),
                    g: tentative,
                    f,
                    parent: idx,
                });
                self.cache.insert(ncoord, ni);
                self.open.push(OpenRef { idx: ni, f });
            }
        }

        self.nbuf = nbuf;

        let goal_idx = found?;

        // Walk predecessor links back to the start, then reverse.
        let mut route = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            route.push(self.nodes[ci].coord.clone());
            ci = self.nodes[ci].parent;
        }
        route.reverse();
        Some(route)
    }
}

// ---------------------------------------------------------------------------
// Closure adapter and convenience function
// ---------------------------------------------------------------------------

struct FnGraph<C, A, H> {
    adjacent: A,
    heuristic: H,
    _coord: PhantomData<C>,
}

impl<C, A, H> Graph for FnGraph<C, A, H>
where
    C: Clone + Eq + Hash,
    A: Fn(&C) -> Vec<(C, Cost)>,
    H: Fn(&C, &C) -> Cost,
{
    type Coord = C;

    fn adjacent(&self, c: &C, buf: &mut Vec<(C, Cost)>) {
        buf.extend((self.adjacent)(c));
    }
}

impl<C, A, H> AstarGraph for FnGraph<C, A, H>
where
    C: Clone + Eq + Hash,
    A: Fn(&C) -> Vec<(C, Cost)>,
    H: Fn(&C, &C) -> Cost,
{
    fn estimate(&self, from: &C, to: &C) -> Cost {
        (self.heuristic)(from, to)
    }
}

/// One-shot A* over closures: `adjacent` enumerates `(neighbor, cost)`
/// pairs, `heuristic` estimates remaining cost (and may return
/// [`UNREACHABLE`] for dead ends).
///
/// Equivalent to [`PathBuffer::astar`] with a throwaway buffer; callers
/// running repeated searches should hold a [`PathBuffer`] instead.
pub fn astar<C, A, H>(start: C, target: C, adjacent: A, heuristic: H) -> Option<Vec<C>>
where
    C: Clone + Eq + Hash,
    A: Fn(&C) -> Vec<(C, Cost)>,
    H: Fn(&C, &C) -> Cost,
{
    PathBuffer::new().astar(
        &FnGraph {
            adjacent,
            heuristic,
            _coord: PhantomData,
        },
        start,
        target,
    )
}
