//! Coordinate systems: axes, directions, aliases and adjacency.
//!
//! A [`System`] is configuration data fixed per coordinate-system variant.
//! It is constructed through [`SystemBuilder`], validated once, and never
//! mutated afterwards; variants such as the mixed-direction (diagonal) form
//! are derived as new values rather than by rewriting a shared one.

use std::collections::HashMap;
use std::fmt;

use crate::{Coord, Offset, Unit};

// ---------------------------------------------------------------------------
// Connectivity
// ---------------------------------------------------------------------------

/// Adjacency semantics between grid coordinates.
///
/// The two predicates are deliberately distinct and independently
/// selectable: `Cardinal` is a Manhattan (4-connectivity) test, `Diagonal`
/// an 8-connectivity test, and neither implies the other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Adjacent iff the absolute per-axis differences sum to exactly one
    /// steplength: the coordinates differ along exactly one axis by exactly
    /// one step.
    #[default]
    Cardinal,
    /// Adjacent iff every axis differs by at most one steplength and the
    /// coordinates are not equal, permitting diagonal moves.
    Diagonal,
}

impl Connectivity {
    /// Whether `a` and `b` are adjacent under this connectivity.
    pub fn is_adjacent(self, a: &[Unit], b: &[Unit], steplength: Unit) -> bool {
        match self {
            Self::Cardinal => {
                a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum::<Unit>() == steplength
            }
            Self::Diagonal => a != b && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= steplength),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from building a [`System`] or validating a direction against one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    /// The builder was given no axes.
    NoAxes,
    /// An axis was not a unique lowercase ASCII letter.
    BadAxis(char),
    /// An explicit direction did not combine each axis at most once.
    BadDirection(String),
    /// An alias spells an axis-combination form (or repeats an alias),
    /// which would make normalization ambiguous.
    AliasCollision(String),
    /// An alias points at a direction outside the direction set.
    UnknownAliasTarget { alias: String, target: String },
    /// A direction string is neither a canonical form nor a known alias.
    InvalidDirection(String),
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAxes => write!(f, "coordinate system has no axes"),
            Self::BadAxis(a) => {
                write!(f, "invalid axis {a:?}: axes must be unique lowercase ascii letters")
            }
            Self::BadDirection(d) => {
                write!(f, "invalid direction {d:?}: must combine each axis at most once")
            }
            Self::AliasCollision(a) => {
                write!(f, "alias {a:?} collides with a canonical direction form")
            }
            Self::UnknownAliasTarget { alias, target } => {
                write!(f, "alias {alias:?} resolves to unknown direction {target:?}")
            }
            Self::InvalidDirection(d) => write!(f, "invalid direction {d}"),
        }
    }
}

impl std::error::Error for SystemError {}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// An immutable coordinate-system definition: ordered axes, the canonical
/// direction set, an alias table, and the adjacency semantics.
///
/// Invariants (enforced at build time): every direction maps to exactly one
/// per-axis sign combination, and no alias collides with a canonical form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct System {
    axes: Vec<char>,
    directions: Vec<String>,
    aliases: HashMap<String, String>,
    connectivity: Connectivity,
}

impl System {
    /// Start building a coordinate system.
    pub fn builder() -> SystemBuilder {
        SystemBuilder::default()
    }

    /// The screen-oriented 2D cardinal system: axes x (right) and y (down),
    /// with `up`/`down`/`left`/`right` and compass aliases.
    pub fn two_dimensional() -> System {
        System {
            axes: vec!['x', 'y'],
            directions: ["x", "X", "y", "Y"].iter().map(|d| d.to_string()).collect(),
            aliases: two_dimensional_aliases(),
            connectivity: Connectivity::Cardinal,
        }
    }

    /// The mixed-direction variant of [`System::two_dimensional`]: every
    /// signed axis combination is a direction and adjacency is diagonal
    /// (8-connectivity).
    pub fn two_dimensional_mixed() -> System {
        System {
            axes: vec!['x', 'y'],
            directions: ["x", "X", "y", "Y", "xy", "Xy", "xY", "XY"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            aliases: two_dimensional_aliases(),
            connectivity: Connectivity::Diagonal,
        }
    }

    /// Ordered axis identifiers.
    pub fn axes(&self) -> &[char] {
        &self.axes
    }

    /// Canonical direction strings.
    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    /// Alias table (alias → canonical form).
    pub fn aliases(&self) -> &HashMap<String, String> {
        &self.aliases
    }

    /// The adjacency semantics this system was built with.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Check that `direction` is a known alias or, lowercase-normalized, a
    /// member of the direction set.
    pub fn valid_direction(&self, direction: &str) -> Result<(), SystemError> {
        let lower = direction.to_lowercase();
        if self.directions.iter().any(|d| d.to_lowercase() == lower) {
            return Ok(());
        }
        if self.aliases.contains_key(direction) {
            return Ok(());
        }
        Err(SystemError::InvalidDirection(direction.to_string()))
    }

    /// Resolve `direction` to its canonical axis-combination form.
    ///
    /// Validates first; a direction already in canonical form is returned
    /// unchanged, otherwise the alias table resolves it. Idempotent.
    pub fn normalize_direction<'a>(&'a self, direction: &'a str) -> Result<&'a str, SystemError> {
        self.valid_direction(direction)?;
        if self.is_axis_combination(direction) {
            return Ok(direction);
        }
        self.aliases
            .get(direction)
            .map(String::as_str)
            .ok_or_else(|| SystemError::InvalidDirection(direction.to_string()))
    }

    /// The direction in which `offset` lies: per axis, the uppercase letter
    /// for a positive component, lowercase for negative, nothing for zero.
    /// An all-zero offset yields the empty string.
    pub fn determine_direction(&self, offset: &[Unit]) -> String {
        debug_assert!(offset.len() <= self.axes.len());
        let mut out = String::new();
        for (&component, &axis) in offset.iter().zip(&self.axes) {
            if component > 0 {
                out.push(axis.to_ascii_uppercase());
            } else if component < 0 {
                out.push(axis);
            }
        }
        out
    }

    /// Convert a direction to an offset of `steplength` along each axis it
    /// names: negative for a lowercase letter, positive for uppercase, zero
    /// for an absent axis.
    pub fn determine_offset(&self, direction: &str, steplength: Unit) -> Result<Offset, SystemError> {
        let direction = self.normalize_direction(direction)?;
        Ok(self
            .axes
            .iter()
            .map(|&axis| {
                if direction.contains(axis) {
                    -steplength
                } else if direction.contains(axis.to_ascii_uppercase()) {
                    steplength
                } else {
                    0
                }
            })
            .collect())
    }

    /// `coordinate` shifted by [`System::determine_offset`] of `direction`.
    pub fn determine_offset_coordinate(
        &self,
        direction: &str,
        coordinate: &[Unit],
        steplength: Unit,
    ) -> Result<Coord, SystemError> {
        debug_assert_eq!(coordinate.len(), self.axes.len());
        let offset = self.determine_offset(direction, steplength)?;
        Ok(offset.iter().zip(coordinate).map(|(o, c)| o + c).collect())
    }

    /// Per-axis sign of `target - relative_to`, scaled by `steplength`.
    pub fn calculate_offset(&self, target: &[Unit], relative_to: &[Unit], steplength: Unit) -> Offset {
        debug_assert_eq!(target.len(), relative_to.len());
        target
            .iter()
            .zip(relative_to)
            .map(|(t, r)| (t - r).signum() * steplength)
            .collect()
    }

    /// Whether `a` and `b` are adjacent under this system's
    /// [`Connectivity`].
    pub fn is_adjacent(&self, a: &[Unit], b: &[Unit], steplength: Unit) -> bool {
        self.connectivity.is_adjacent(a, b, steplength)
    }

    fn is_axis_combination(&self, direction: &str) -> bool {
        !direction.is_empty()
            && direction
                .chars()
                .all(|c| self.axes.contains(&c.to_ascii_lowercase()))
    }
}

fn two_dimensional_aliases() -> HashMap<String, String> {
    [
        ("up", "y"),
        ("right", "X"),
        ("down", "Y"),
        ("left", "x"),
        ("north", "y"),
        ("east", "X"),
        ("south", "Y"),
        ("west", "x"),
    ]
    .iter()
    .map(|(a, d)| (a.to_string(), d.to_string()))
    .collect()
}

// ---------------------------------------------------------------------------
// SystemBuilder
// ---------------------------------------------------------------------------

/// Validating builder for [`System`].
///
/// Without an explicit direction set, the canonical directions are each
/// axis's lowercase and uppercase form. [`SystemBuilder::mixed_directions`]
/// instead derives every non-empty signed combination of axes and selects
/// diagonal adjacency, producing a fully formed new value; existing
/// systems are never modified.
#[derive(Clone, Debug, Default)]
pub struct SystemBuilder {
    axes: Vec<char>,
    directions: Vec<String>,
    aliases: Vec<(String, String)>,
    mixed: bool,
    connectivity: Option<Connectivity>,
}

impl SystemBuilder {
    /// Append one axis. Axes are ordered; directions and offsets follow
    /// this order.
    pub fn axis(mut self, axis: char) -> Self {
        self.axes.push(axis);
        self
    }

    /// Append several axes.
    pub fn axes(mut self, axes: impl IntoIterator<Item = char>) -> Self {
        self.axes.extend(axes);
        self
    }

    /// Supply an explicit direction rather than deriving the set from the
    /// axes. May be called repeatedly.
    pub fn direction(mut self, direction: impl Into<String>) -> Self {
        self.directions.push(direction.into());
        self
    }

    /// Register a human-readable alias for a canonical direction.
    pub fn alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), canonical.into()));
        self
    }

    /// Derive the full signed power set of axis combinations as the
    /// direction set and select [`Connectivity::Diagonal`]. Overrides any
    /// explicit directions.
    pub fn mixed_directions(mut self) -> Self {
        self.mixed = true;
        self
    }

    /// Force a particular adjacency, overriding the default
    /// (`Cardinal`, or `Diagonal` under [`SystemBuilder::mixed_directions`]).
    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    /// Validate and produce the immutable [`System`].
    pub fn build(self) -> Result<System, SystemError> {
        if self.axes.is_empty() {
            return Err(SystemError::NoAxes);
        }
        for (i, &axis) in self.axes.iter().enumerate() {
            if !axis.is_ascii_lowercase() || self.axes[..i].contains(&axis) {
                return Err(SystemError::BadAxis(axis));
            }
        }

        let directions = if self.mixed {
            mixed_directions(&self.axes)
        } else if !self.directions.is_empty() {
            for d in &self.directions {
                validate_combination(d, &self.axes)?;
            }
            self.directions
        } else {
            self.axes
                .iter()
                .flat_map(|&a| [a.to_string(), a.to_ascii_uppercase().to_string()])
                .collect()
        };

        let mut aliases = HashMap::new();
        for (alias, canonical) in self.aliases {
            let is_combination = !alias.is_empty()
                && alias
                    .chars()
                    .all(|c| self.axes.contains(&c.to_ascii_lowercase()));
            if is_combination {
                return Err(SystemError::AliasCollision(alias));
            }
            let target_lower = canonical.to_lowercase();
            if !directions.iter().any(|d| d.to_lowercase() == target_lower) {
                return Err(SystemError::UnknownAliasTarget {
                    alias,
                    target: canonical,
                });
            }
            if aliases.insert(alias.clone(), canonical).is_some() {
                return Err(SystemError::AliasCollision(alias));
            }
        }

        let connectivity = self.connectivity.unwrap_or(if self.mixed {
            Connectivity::Diagonal
        } else {
            Connectivity::Cardinal
        });

        Ok(System {
            axes: self.axes,
            directions,
            aliases,
            connectivity,
        })
    }
}

/// Every non-empty subset of axes, each contributing its lowercase or
/// uppercase form, concatenated in axis order.
fn mixed_directions(axes: &[char]) -> Vec<String> {
    let n = axes.len();
    let mut out = Vec::new();
    for mask in 1u32..(1 << n) {
        let included: Vec<usize> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
        for signs in 0u32..(1 << included.len()) {
            let mut direction = String::with_capacity(included.len());
            for (bit, &i) in included.iter().enumerate() {
                if signs & (1 << bit) != 0 {
                    direction.push(axes[i].to_ascii_uppercase());
                } else {
                    direction.push(axes[i]);
                }
            }
            out.push(direction);
        }
    }
    out
}

fn validate_combination(direction: &str, axes: &[char]) -> Result<(), SystemError> {
    if direction.is_empty() {
        return Err(SystemError::BadDirection(direction.to_string()));
    }
    let mut seen = Vec::with_capacity(direction.len());
    for c in direction.chars() {
        let axis = c.to_ascii_lowercase();
        if !axes.contains(&axis) || seen.contains(&axis) {
            return Err(SystemError::BadDirection(direction.to_string()));
        }
        seen.push(axis);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_directions() {
        let sys = System::builder().axes(['x', 'y']).build().unwrap();
        assert_eq!(sys.directions(), ["x", "X", "y", "Y"]);
        assert_eq!(sys.axes(), ['x', 'y']);
        assert_eq!(sys.connectivity(), Connectivity::Cardinal);
    }

    #[test]
    fn mixed_directions_signed_power_set() {
        let sys = System::builder()
            .axes(['x', 'y'])
            .mixed_directions()
            .build()
            .unwrap();
        assert_eq!(
            sys.directions(),
            ["x", "X", "y", "Y", "xy", "Xy", "xY", "XY"]
        );
        assert_eq!(sys.connectivity(), Connectivity::Diagonal);
    }

    #[test]
    fn presets_match_builder_output() {
        let built = System::builder()
            .axes(['x', 'y'])
            .alias("up", "y")
            .alias("right", "X")
            .alias("down", "Y")
            .alias("left", "x")
            .alias("north", "y")
            .alias("east", "X")
            .alias("south", "Y")
            .alias("west", "x")
            .build()
            .unwrap();
        assert_eq!(built, System::two_dimensional());

        let mixed = System::builder()
            .axes(['x', 'y'])
            .alias("up", "y")
            .alias("right", "X")
            .alias("down", "Y")
            .alias("left", "x")
            .alias("north", "y")
            .alias("east", "X")
            .alias("south", "Y")
            .alias("west", "x")
            .mixed_directions()
            .build()
            .unwrap();
        assert_eq!(mixed, System::two_dimensional_mixed());
    }

    #[test]
    fn three_axes() {
        let sys = System::builder().axes(['x', 'y', 'z']).build().unwrap();
        assert_eq!(sys.directions().len(), 6);
        assert_eq!(sys.determine_offset("Z", 1).unwrap(), vec![0, 0, 1]);
        assert_eq!(sys.determine_direction(&[-1, 0, 2]), "xZ");
    }

    #[test]
    fn builder_rejects_bad_input() {
        assert_eq!(System::builder().build(), Err(SystemError::NoAxes));
        assert_eq!(
            System::builder().axes(['x', 'x']).build(),
            Err(SystemError::BadAxis('x'))
        );
        assert_eq!(
            System::builder().axes(['X']).build(),
            Err(SystemError::BadAxis('X'))
        );
        assert_eq!(
            System::builder().axes(['x', 'y']).direction("xx").build(),
            Err(SystemError::BadDirection("xx".into()))
        );
        assert_eq!(
            System::builder().axes(['x', 'y']).direction("q").build(),
            Err(SystemError::BadDirection("q".into()))
        );
    }

    #[test]
    fn builder_rejects_alias_misuse() {
        // An alias that spells an axis combination is ambiguous.
        assert_eq!(
            System::builder().axes(['x', 'y']).alias("X", "x").build(),
            Err(SystemError::AliasCollision("X".into()))
        );
        // An alias must point at a member of the direction set.
        assert_eq!(
            System::builder().axes(['x', 'y']).alias("up", "z").build(),
            Err(SystemError::UnknownAliasTarget {
                alias: "up".into(),
                target: "z".into()
            })
        );
        // Duplicate aliases collide.
        assert_eq!(
            System::builder()
                .axes(['x', 'y'])
                .alias("up", "y")
                .alias("up", "Y")
                .build(),
            Err(SystemError::AliasCollision("up".into()))
        );
    }

    #[test]
    fn valid_direction_accepts_aliases_and_canonical_forms() {
        let sys = System::two_dimensional();
        for d in ["x", "X", "y", "Y", "up", "down", "left", "right", "north"] {
            assert!(sys.valid_direction(d).is_ok(), "{d} should be valid");
        }
        assert_eq!(
            sys.valid_direction("sideways"),
            Err(SystemError::InvalidDirection("sideways".into()))
        );
    }

    #[test]
    fn normalize_direction_is_idempotent() {
        let sys = System::two_dimensional();
        for d in ["up", "down", "left", "right", "x", "Y"] {
            let once = sys.normalize_direction(d).unwrap();
            let twice = sys.normalize_direction(once).unwrap();
            assert_eq!(once, twice);
        }
        assert_eq!(sys.normalize_direction("up").unwrap(), "y");
        assert_eq!(sys.normalize_direction("south").unwrap(), "Y");
    }

    #[test]
    fn normalize_keeps_diagonal_combinations() {
        let sys = System::two_dimensional_mixed();
        assert_eq!(sys.normalize_direction("xY").unwrap(), "xY");
        assert_eq!(sys.normalize_direction("XY").unwrap(), "XY");
    }

    #[test]
    fn determine_direction_signs() {
        let sys = System::two_dimensional();
        assert_eq!(sys.determine_direction(&[1, 0]), "X");
        assert_eq!(sys.determine_direction(&[-3, 2]), "xY");
        assert_eq!(sys.determine_direction(&[0, -1]), "y");
        assert_eq!(sys.determine_direction(&[0, 0]), "");
    }

    #[test]
    fn determine_offset_scales_by_steplength() {
        let sys = System::two_dimensional();
        assert_eq!(sys.determine_offset("X", 1).unwrap(), vec![1, 0]);
        assert_eq!(sys.determine_offset("up", 4).unwrap(), vec![0, -4]);
        let mixed = System::two_dimensional_mixed();
        assert_eq!(mixed.determine_offset("xY", 2).unwrap(), vec![-2, 2]);
    }

    #[test]
    fn offset_direction_round_trip_preserves_signs() {
        let sys = System::two_dimensional();
        for offset in [[1, 0], [0, -1], [-1, 1], [2, -5], [0, 0]] {
            let direction = sys.determine_direction(&offset);
            let back = if direction.is_empty() {
                vec![0, 0]
            } else {
                sys.determine_offset(&direction, 1).unwrap()
            };
            for (orig, unit) in offset.iter().zip(&back) {
                assert_eq!(orig.signum(), *unit);
            }
        }
    }

    #[test]
    fn determine_offset_coordinate_shifts() {
        let sys = System::two_dimensional();
        assert_eq!(
            sys.determine_offset_coordinate("down", &[3, 4], 1).unwrap(),
            vec![3, 5]
        );
        assert_eq!(
            sys.determine_offset_coordinate("west", &[8, 8], 8).unwrap(),
            vec![0, 8]
        );
    }

    #[test]
    fn calculate_offset_signum() {
        let sys = System::two_dimensional();
        assert_eq!(sys.calculate_offset(&[5, 1], &[2, 1], 1), vec![1, 0]);
        assert_eq!(sys.calculate_offset(&[0, 0], &[3, -3], 1), vec![-1, 1]);
        assert_eq!(sys.calculate_offset(&[2, 2], &[2, 2], 1), vec![0, 0]);
        assert_eq!(sys.calculate_offset(&[9, 0], &[0, 0], 4), vec![4, 0]);
    }

    #[test]
    fn cardinal_adjacency_is_symmetric() {
        let sys = System::two_dimensional();
        let pairs = [
            ([0, 0], [1, 0]),
            ([0, 0], [0, 1]),
            ([0, 0], [1, 1]),
            ([3, 3], [3, 3]),
            ([-2, 0], [-1, 0]),
        ];
        for (a, b) in pairs {
            assert_eq!(
                sys.is_adjacent(&a, &b, 1),
                sys.is_adjacent(&b, &a, 1),
                "{a:?} vs {b:?}"
            );
        }
        assert!(sys.is_adjacent(&[0, 0], &[1, 0], 1));
        assert!(!sys.is_adjacent(&[0, 0], &[1, 1], 1));
        assert!(!sys.is_adjacent(&[0, 0], &[0, 0], 1));
    }

    #[test]
    fn diagonal_adjacency_includes_corners() {
        let sys = System::two_dimensional_mixed();
        assert!(sys.is_adjacent(&[0, 0], &[1, 1], 1));
        assert!(sys.is_adjacent(&[0, 0], &[-1, 1], 1));
        assert!(sys.is_adjacent(&[0, 0], &[0, 1], 1));
        assert!(!sys.is_adjacent(&[0, 0], &[2, 1], 1));
        assert!(!sys.is_adjacent(&[0, 0], &[0, 0], 1));
    }

    #[test]
    fn connectivity_override() {
        // Mixed directions with cardinal adjacency, picked deliberately.
        let sys = System::builder()
            .axes(['x', 'y'])
            .mixed_directions()
            .connectivity(Connectivity::Cardinal)
            .build()
            .unwrap();
        assert_eq!(sys.directions().len(), 8);
        assert!(!sys.is_adjacent(&[0, 0], &[1, 1], 1));
    }
}
