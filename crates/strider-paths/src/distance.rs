use strider_core::Unit;

use crate::buffer::Cost;

/// Manhattan (L1) distance: sum of absolute per-axis differences.
///
/// The admissible estimate for cardinal (4-connectivity) unit-cost moves.
#[inline]
pub fn manhattan(a: &[Unit], b: &[Unit]) -> Cost {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

/// Chebyshev (L∞) distance: largest absolute per-axis difference.
///
/// The admissible estimate for diagonal (8-connectivity) unit-cost moves.
#[inline]
pub fn chebyshev(a: &[Unit], b: &[Unit]) -> Cost {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).max().unwrap_or(0)
}

/// Euclidean (L2) distance, floored to an integer cost.
///
/// Flooring keeps the estimate admissible when edge costs are integral.
#[inline]
pub fn euclidean(a: &[Unit], b: &[Unit]) -> Cost {
    let sq: i64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = (x - y) as i64;
            d * d
        })
        .sum();
    (sq as f64).sqrt() as Cost
}
