use std::collections::VecDeque;

use strider_core::{Coord, System, Unit};
use strider_paths::{Cost, astar};

use crate::Mover;

/// Result of walking a complete route with [`follow_route`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every step of the route was applied.
    Arrived,
    /// A step failed to move the entity; the rest of the route is stale
    /// and the caller should replan from `at`. Recoverable, not fatal.
    Blocked { at: Coord },
}

/// Result of a single [`Planner::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The mover already stands on the target.
    Arrived,
    /// One move was applied; the mover now stands at the given location.
    Moved(Coord),
    /// The move was rejected. The stale route was dropped, so the next
    /// call replans from wherever the mover actually is.
    Blocked(Coord),
    /// No route to the target exists right now.
    NoRoute,
}

/// Plan a route from the mover's current location to `target`.
///
/// Every direction reported legal by [`Mover::valid_directions`] becomes a
/// move of one `steplength` at cost 1; the engine's collision logic is the
/// single source of truth for which neighbors exist. Returns `None` when
/// the target cannot be reached.
pub fn plan_route<M, H>(
    mover: &M,
    system: &System,
    target: &[Unit],
    steplength: Unit,
    heuristic: H,
) -> Option<Vec<Coord>>
where
    M: Mover,
    H: Fn(&Coord, &Coord) -> Cost,
{
    let adjacent = |c: &Coord| {
        mover
            .valid_directions(c)
            .iter()
            .filter_map(|d| system.determine_offset_coordinate(d, c, steplength).ok())
            .map(|neighbor| (neighbor, 1))
            .collect()
    };
    astar(mover.location(), target.to_vec(), adjacent, heuristic)
}

/// Walk `route` step by step against the mover.
///
/// Each step's offset comes from [`System::calculate_offset`] between the
/// next route cell and the mover's actual location. All-zero offsets are
/// skipped without issuing a move (typically the route's leading cell,
/// which is the start location). A move that leaves the location unchanged
/// stops the walk: the route is stale and needs replanning.
pub fn follow_route<M: Mover>(mover: &mut M, system: &System, route: &[Coord]) -> Outcome {
    for next in route {
        let current = mover.location();
        let offset = system.calculate_offset(next, &current, 1);
        if offset.iter().all(|&c| c == 0) {
            continue;
        }
        if mover.attempt_move(&offset) == current {
            log::debug!("route blocked at {current:?} moving toward {next:?}");
            return Outcome::Blocked { at: current };
        }
    }
    Outcome::Arrived
}

/// Step-at-a-time route executor with lazy replanning.
///
/// Holds a target and the remaining route. Each [`Planner::step`] issues at
/// most one move: it plans a route on demand, pops the next cell, and on a
/// rejected move drops the rest of the route so the following call replans
/// from the entity's actual location. Retry pacing is left to the caller's
/// tick loop.
pub struct Planner {
    target: Coord,
    steplength: Unit,
    route: VecDeque<Coord>,
}

impl Planner {
    /// Create a planner walking toward `target` in `steplength` increments.
    pub fn new(target: Coord, steplength: Unit) -> Self {
        Self {
            target,
            steplength,
            route: VecDeque::new(),
        }
    }

    /// Target coordinate this planner walks toward.
    pub fn target(&self) -> &[Unit] {
        &self.target
    }

    /// Whether a planned route is currently queued.
    pub fn has_route(&self) -> bool {
        !self.route.is_empty()
    }

    /// Advance one step toward the target.
    pub fn step<M, H>(&mut self, mover: &mut M, system: &System, heuristic: H) -> Step
    where
        M: Mover,
        H: Fn(&Coord, &Coord) -> Cost,
    {
        let current = mover.location();
        if current == self.target {
            self.route.clear();
            return Step::Arrived;
        }

        if self.route.is_empty() {
            let Some(route) = plan_route(mover, system, &self.target, self.steplength, heuristic)
            else {
                log::debug!("no route from {current:?} to {:?}", self.target);
                return Step::NoRoute;
            };
            log::trace!("planned {} cells to {:?}", route.len(), self.target);
            self.route.extend(route);
        }

        // Issue the next move, dropping leading no-op cells (the first
        // cell of a fresh route is the start location).
        while let Some(next) = self.route.pop_front() {
            let offset = system.calculate_offset(&next, &current, 1);
            if offset.iter().all(|&c| c == 0) {
                continue;
            }
            return if mover.attempt_move(&offset) == current {
                log::debug!("step toward {next:?} blocked; dropping route");
                self.route.clear();
                Step::Blocked(next)
            } else {
                Step::Moved(mover.location())
            };
        }

        // The queued route ran out of cells short of the target; force a
        // replan on the next call.
        Step::Blocked(current)
    }
}
