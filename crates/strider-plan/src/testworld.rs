//! A bounded 2D grid with wall cells, standing in for the sprite engine in
//! planner tests.

use std::collections::HashSet;

use strider_core::{Coord, System, Unit};

use crate::Mover;

pub(crate) struct TestWorld {
    pub(crate) system: System,
    pub(crate) size: (Unit, Unit),
    pub(crate) walls: HashSet<(Unit, Unit)>,
    pub(crate) location: Coord,
}

impl TestWorld {
    /// An open world of the given size with the mover at `start`.
    pub(crate) fn open(size: (Unit, Unit), start: (Unit, Unit)) -> Self {
        Self {
            system: System::two_dimensional(),
            size,
            walls: HashSet::new(),
            location: vec![start.0, start.1],
        }
    }

    pub(crate) fn wall(&mut self, x: Unit, y: Unit) {
        self.walls.insert((x, y));
    }

    fn passable(&self, c: &[Unit]) -> bool {
        let (x, y) = (c[0], c[1]);
        x >= 0 && y >= 0 && x < self.size.0 && y < self.size.1 && !self.walls.contains(&(x, y))
    }
}

impl Mover for TestWorld {
    fn location(&self) -> Coord {
        self.location.clone()
    }

    fn attempt_move(&mut self, offset: &[Unit]) -> Coord {
        let next: Coord = self.location.iter().zip(offset).map(|(c, o)| c + o).collect();
        if self.passable(&next) {
            self.location = next;
        }
        self.location.clone()
    }

    fn valid_directions(&self, from: &[Unit]) -> Vec<String> {
        self.system
            .directions()
            .iter()
            .filter(|d| {
                self.system
                    .determine_offset_coordinate(d, from, 1)
                    .is_ok_and(|n| self.passable(&n))
            })
            .cloned()
            .collect()
    }
}
