//! **strider-plan**: turning routes into discrete move commands.
//!
//! The planner sits between the pathfinder and whatever engine actually
//! owns the moving entity. The engine is abstracted as a [`Mover`]: it
//! reports the entity's location, lists the directions legal from any
//! location (side-effect-free probing), and applies committed moves with
//! its own collision and boundary rules.
//!
//! - [`plan_route`] builds the pathfinder's adjacency out of
//!   [`Mover::valid_directions`] and runs A*.
//! - [`follow_route`] walks a whole route, skipping no-op steps and
//!   stopping at the first rejected move.
//! - [`Planner`] executes one move per tick and replans lazily whenever
//!   its route goes stale.
//! - [`Wander`] is a random walk with direction momentum for idle
//!   entities.

mod mover;
mod planner;
mod wander;

pub use mover::Mover;
pub use planner::{Outcome, Planner, Step, follow_route, plan_route};
pub use wander::Wander;

#[cfg(test)]
pub(crate) mod testworld;
