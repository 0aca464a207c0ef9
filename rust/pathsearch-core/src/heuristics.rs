//! Integer grid heuristics for callers searching over `(x, y)` cells.

use crate::graph::Cost;

pub type Point = (i32, i32);

/// Cost of one diagonal step given the orthogonal step cost (≈ √2, as 14/10).
#[inline]
pub fn diagonal_cost(step: Cost) -> Cost {
    step * 14 / 10
}

pub fn manhattan(a: Point, b: Point, step: Cost) -> Cost {
    let dx = Cost::from(a.0.abs_diff(b.0));
    let dy = Cost::from(a.1.abs_diff(b.1));
    (dx + dy) * step
}

pub fn chebyshev(a: Point, b: Point, step: Cost) -> Cost {
    let dx = Cost::from(a.0.abs_diff(b.0));
    let dy = Cost::from(a.1.abs_diff(b.1));
    dx.max(dy) * step
}

/// Exact distance on an 8-connected grid whose diagonals cost [`diagonal_cost`].
pub fn octile(a: Point, b: Point, step: Cost) -> Cost {
    let dx = Cost::from(a.0.abs_diff(b.0));
    let dy = Cost::from(a.1.abs_diff(b.1));
    let dmin = dx.min(dy);
    let dmax = dx.max(dy);
    dmin * diagonal_cost(step) + (dmax - dmin) * step
}

pub fn zero<L>(_goal: &L, _candidate: &L) -> Cost {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(manhattan((0, 0), (3, -5), 1), 8);
        assert_eq!(chebyshev((0, 0), (3, 5), 2), 10);
        assert_eq!(octile((0, 0), (3, 5), 10), 3 * 14 + 2 * 10);
        assert_eq!(zero(&(1, 1), &(9, 9)), 0);
    }

    #[test]
    fn symmetric_and_zero_on_same_point() {
        for h in [manhattan, chebyshev, octile] {
            assert_eq!(h((4, 7), (4, 7), 3), 0);
            assert_eq!(h((1, 2), (-6, 9), 3), h((-6, 9), (1, 2), 3));
        }
    }

    #[test]
    fn octile_is_between_chebyshev_and_manhattan() {
        let (a, b) = ((0, 0), (7, 4));
        assert!(chebyshev(a, b, 10) <= octile(a, b, 10));
        assert!(octile(a, b, 10) <= manhattan(a, b, 10));
    }
}
