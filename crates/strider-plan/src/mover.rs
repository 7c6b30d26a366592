use strider_core::{Coord, Unit};

/// Seam to the movement-and-collision engine that owns the moving entity.
///
/// The planner explores hypothetical positions while searching, so
/// `valid_directions` takes `&self` and must be free of side effects: no
/// animation changes, no persisted collision responses. Engines that track
/// a "virtual" probing flag on their entities flip it around this call.
/// `attempt_move` is the committed counterpart: the engine applies its
/// collision and boundary rules and reports where the entity ended up.
pub trait Mover {
    /// Current location of the moving entity.
    fn location(&self) -> Coord;

    /// Apply a unit-sign move offset (one component per axis, each in
    /// -1/0/+1); the engine scales by its own steplength. Returns the
    /// resulting location, which is unchanged when the move was rejected.
    fn attempt_move(&mut self, offset: &[Unit]) -> Coord;

    /// Direction strings legal to move in from `from`, drawn from the
    /// coordinate system's direction set.
    fn valid_directions(&self, from: &[Unit]) -> Vec<String>;
}
