use rand::{Rng, RngExt};

use strider_core::System;

use crate::Mover;

/// Random walk with direction momentum for idle entities.
///
/// Each step keeps walking in the current direction with a probability
/// that decays as the run gets longer (`90 - run length` percent, floored
/// at zero), otherwise picks a uniformly random legal direction and starts
/// a new run. Long straight marches therefore happen, but rarely.
#[derive(Clone, Debug, Default)]
pub struct Wander {
    run: Vec<String>,
}

impl Wander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the current same-direction run.
    pub fn run_length(&self) -> usize {
        self.run.len()
    }

    /// Take one wandering step.
    ///
    /// Returns the direction moved in, or `None` when no legal move exists
    /// from the current location (the run also resets in that case).
    pub fn step<M: Mover>(
        &mut self,
        mover: &mut M,
        system: &System,
        rng: &mut impl Rng,
    ) -> Option<String> {
        let location = mover.location();
        let directions = mover.valid_directions(&location);
        if directions.is_empty() {
            self.run.clear();
            return None;
        }

        let choice = if self.run.is_empty() || directions.len() == 1 {
            directions[rng.random_range(0..directions.len())].clone()
        } else {
            let momentum = 90_usize.saturating_sub(self.run.len());
            let keep = &self.run[0];
            if directions.contains(keep) && rng.random_range(0..100) < momentum {
                keep.clone()
            } else {
                directions[rng.random_range(0..directions.len())].clone()
            }
        };

        if self.run.first().is_some_and(|d| *d != choice) {
            self.run.clear();
        }
        self.run.push(choice.clone());

        let offset = system.determine_offset(&choice, 1).ok()?;
        mover.attempt_move(&offset);
        Some(choice)
    }
}
