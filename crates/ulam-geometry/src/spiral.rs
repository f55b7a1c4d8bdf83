//! Square spiral enumeration.
//!
//! Index 1 sits at the origin. Every later ring `r` (level `r + 1`) starts one
//! cell to the right of the previous ring's bottom-right corner and walks
//! counter-clockwise: up the right edge, left along the top, down the left
//! edge, then right along the bottom, ending on its own bottom-right corner at
//! index `(2r + 1)^2`.
//!
//! # Levels and radii
//!
//! - Level 1: index 1 (radius 0)
//! - Level 2: indices 2-9 (radius 1)
//! - Level 3: indices 10-25 (radius 2)
//! - Level L: indices `(2L - 3)^2 + 1` through `(2L - 1)^2`

use crate::LatticePoint;

/// A 1-based position on the spiral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralIndex(pub u64);

impl SpiralIndex {
    /// The center cell.
    pub const ORIGIN: Self = Self(1);

    /// Create from a raw 1-based index.
    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Level (1-based ring) containing this index.
    pub fn level(&self) -> u64 {
        level_of(self.0)
    }

    /// Radius (0-based ring) containing this index.
    pub fn radius(&self) -> u64 {
        ring_radius(self.0)
    }

    /// Lattice position of this index.
    pub fn point(&self) -> LatticePoint {
        index_to_point(self.0)
    }
}

impl Default for SpiralIndex {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<u64> for SpiralIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SpiralIndex> for u64 {
    fn from(value: SpiralIndex) -> Self {
        value.0
    }
}

impl std::fmt::Display for SpiralIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side length of the square formed by the first `level` rings.
///
/// `side_length(0)` is 0 by convention, so the empty spiral has no cells.
#[inline]
pub const fn side_length(level: u64) -> u64 {
    if level == 0 {
        0
    } else {
        2 * level - 1
    }
}

/// Largest index inside the first `level` rings.
#[inline]
pub const fn max_index(level: u64) -> u64 {
    let side = side_length(level);
    side * side
}

/// [`side_length`], or `None` if it does not fit in a `u64`.
#[inline]
pub const fn checked_side_length(level: u64) -> Option<u64> {
    if level == 0 {
        return Some(0);
    }
    match level.checked_mul(2) {
        Some(double) => Some(double - 1),
        None => None,
    }
}

/// [`max_index`], or `None` if it does not fit in a `u64`.
#[inline]
pub const fn checked_max_index(level: u64) -> Option<u64> {
    match checked_side_length(level) {
        Some(side) => side.checked_mul(side),
        None => None,
    }
}

/// First index of the ring at `level`.
#[inline]
pub const fn first_index(level: u64) -> u64 {
    if level <= 1 {
        1
    } else {
        max_index(level - 1) + 1
    }
}

/// Number of cells in the ring at `level`.
///
/// - Level 1: 1 cell
/// - Level L > 1: 8(L - 1) cells
#[inline]
pub const fn ring_len(level: u64) -> u64 {
    match level {
        0 => 0,
        1 => 1,
        l => 8 * (l - 1),
    }
}

/// Smallest `s` with `s * s >= n`.
pub fn ceil_sqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    // f64 seed, then exact integer correction
    let mut s = (n as f64).sqrt() as u64;
    while s > 0 && s.checked_mul(s).map_or(true, |sq| sq > n) {
        s -= 1;
    }
    while (s + 1).checked_mul(s + 1).map_or(false, |sq| sq <= n) {
        s += 1;
    }
    if s * s == n {
        s
    } else {
        s + 1
    }
}

/// Radius of the ring holding index `n`: `ceil(sqrt(n)) div 2`.
///
/// Index 1 has radius 0. Perfect odd squares `(2r + 1)^2` close ring `r`;
/// the next index opens ring `r + 1`.
#[inline]
pub fn ring_radius(n: u64) -> u64 {
    ceil_sqrt(n) / 2
}

/// Smallest level `L` such that `n <= max_index(L)`.
#[inline]
pub fn level_of(n: u64) -> u64 {
    ring_radius(n) + 1
}

/// Convert a 1-based spiral index to its lattice position.
///
/// # Panics
///
/// Panics if `n` is 0.
pub fn index_to_point(n: u64) -> LatticePoint {
    assert!(n >= 1, "spiral indices start at 1");

    if n == 1 {
        return LatticePoint::ORIGIN;
    }

    let r = ring_radius(n);
    let sq = side_length(r);
    let seg1 = sq * sq + 1;
    let seg2 = seg1 + 2 * r;
    let seg3 = seg2 + 2 * r;
    let seg4 = seg3 + 2 * r;

    let r = r as i64;
    if n < seg2 {
        // Right edge, going up
        LatticePoint::new(r, -r + 1 + (n - seg1) as i64)
    } else if n < seg3 {
        // Top edge, going left
        LatticePoint::new(r - 1 - (n - seg2) as i64, r)
    } else if n < seg4 {
        // Left edge, going down
        LatticePoint::new(-r, r - 1 - (n - seg3) as i64)
    } else {
        // Bottom edge, going right
        LatticePoint::new(-r + 1 + (n - seg4) as i64, -r)
    }
}

/// Convert a lattice position to its 1-based spiral index.
///
/// Inverse of [`index_to_point`].
pub fn point_to_index(point: LatticePoint) -> u64 {
    let r = point.radius();
    if r == 0 {
        return 1;
    }

    let sq = side_length(r);
    let seg1 = sq * sq + 1;
    let seg2 = seg1 + 2 * r;
    let seg3 = seg2 + 2 * r;
    let seg4 = seg3 + 2 * r;

    let ri = r as i64;
    let LatticePoint { x, y } = point;
    if x == ri && y > -ri {
        seg1 + (y + ri - 1) as u64
    } else if y == ri {
        seg2 + (ri - 1 - x) as u64
    } else if x == -ri {
        seg3 + (ri - 1 - y) as u64
    } else {
        seg4 + (x + ri - 1) as u64
    }
}

/// Iterator over spiral positions in index order.
pub struct Spiral {
    current: u64,
    limit: Option<u64>,
}

impl Spiral {
    /// Create an unbounded spiral iterator starting from index 1.
    pub fn new() -> Self {
        Self {
            current: 1,
            limit: None,
        }
    }

    /// Create a spiral iterator that yields `count` positions.
    pub fn take_indices(count: u64) -> Self {
        Self {
            current: 1,
            limit: Some(count + 1),
        }
    }

    /// Create a spiral iterator covering levels `start..=end`.
    pub fn levels(start: u64, end: u64) -> Self {
        let start = start.max(1);
        let limit = if end < start {
            first_index(start)
        } else {
            max_index(end) + 1
        };

        Self {
            current: first_index(start),
            limit: Some(limit),
        }
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Spiral {
    type Item = (SpiralIndex, LatticePoint);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.current >= limit {
                return None;
            }
        }

        let index = SpiralIndex(self.current);
        let point = index_to_point(self.current);
        self.current += 1;
        Some((index, point))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.current);
                (remaining as usize, Some(remaining as usize))
            }
            None => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn side_and_max_index_formulas() {
        assert_eq!(side_length(1), 1);
        assert_eq!(side_length(2), 3);
        assert_eq!(side_length(7), 13);
        assert_eq!(max_index(1), 1);
        assert_eq!(max_index(2), 9);
        assert_eq!(max_index(7), 169);
        assert_eq!(max_index(0), 0);
    }

    #[test]
    fn checked_forms_stop_at_overflow() {
        assert_eq!(checked_side_length(0), Some(0));
        assert_eq!(checked_side_length(7), Some(13));
        assert_eq!(checked_side_length(1 << 62), Some((1 << 63) - 1));
        assert_eq!(checked_side_length(1 << 63), None);
        assert_eq!(checked_side_length(u64::MAX), None);

        assert_eq!(checked_max_index(7), Some(169));
        assert_eq!(checked_max_index(1 << 31), Some(((1u64 << 32) - 1) * ((1 << 32) - 1)));
        assert_eq!(checked_max_index(1 << 32), None);
        assert_eq!(checked_max_index(u64::MAX), None);
    }

    #[test]
    fn ring_len_sums_to_max_index() {
        let mut total = 0;
        for level in 1..=20 {
            total += ring_len(level);
            assert_eq!(total, max_index(level), "level {}", level);
        }
    }

    #[test]
    fn ceil_sqrt_exact() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(4), 2);
        assert_eq!(ceil_sqrt(5), 3);
        assert_eq!(ceil_sqrt(169), 13);
        assert_eq!(ceil_sqrt(170), 14);
        assert_eq!(ceil_sqrt(u64::MAX), 1 << 32);
    }

    #[test]
    fn level_of_ring_boundaries() {
        assert_eq!(level_of(1), 1);
        for n in 2..=9 {
            assert_eq!(level_of(n), 2, "index {} should be level 2", n);
        }
        for n in 10..=25 {
            assert_eq!(level_of(n), 3, "index {} should be level 3", n);
        }
        for level in 1..=200 {
            assert_eq!(level_of(max_index(level)), level);
            assert_eq!(level_of(max_index(level) + 1), level + 1);
        }
    }

    #[test]
    fn first_ring_layout() {
        let expected = [
            (1, (0, 0)),
            (2, (1, 0)),
            (3, (1, 1)),
            (4, (0, 1)),
            (5, (-1, 1)),
            (6, (-1, 0)),
            (7, (-1, -1)),
            (8, (0, -1)),
            (9, (1, -1)),
            (10, (2, -1)),
        ];
        for (n, (x, y)) in expected {
            assert_eq!(index_to_point(n), LatticePoint::new(x, y), "index {}", n);
        }
    }

    #[test]
    fn ring_corners() {
        // 169 = 13^2 closes level 7 at its bottom-right corner
        assert_eq!(index_to_point(169), LatticePoint::new(6, -6));
        assert_eq!(index_to_point(25), LatticePoint::new(2, -2));
        assert_eq!(index_to_point(13), LatticePoint::new(2, 2));
        assert_eq!(index_to_point(17), LatticePoint::new(-2, 2));
        assert_eq!(index_to_point(21), LatticePoint::new(-2, -2));
    }

    #[test]
    fn bijection_through_level_5() {
        let limit = max_index(5);
        let mut seen = HashSet::new();
        for n in 1..=limit {
            let p = index_to_point(n);
            assert!(p.within_levels(5), "index {} escaped to {}", n, p);
            assert!(seen.insert(p), "index {} collides at {}", n, p);
            assert_eq!(point_to_index(p), n, "round-trip failed for {}", n);
        }
        assert_eq!(seen.len() as u64, limit);
    }

    #[test]
    fn consecutive_indices_are_adjacent() {
        for n in 1..max_index(12) {
            let a = index_to_point(n);
            let b = index_to_point(n + 1);
            assert_eq!(a.chebyshev_distance(&b), 1, "step {} -> {}", n, n + 1);
        }
    }

    #[test]
    fn spiral_iterator_count() {
        assert_eq!(Spiral::take_indices(100).count(), 100);
        assert_eq!(Spiral::take_indices(0).count(), 0);
    }

    #[test]
    fn spiral_levels_iterator() {
        let center: Vec<_> = Spiral::levels(1, 1).collect();
        assert_eq!(center, vec![(SpiralIndex::ORIGIN, LatticePoint::ORIGIN)]);

        assert_eq!(Spiral::levels(2, 2).count(), 8);
        assert_eq!(Spiral::levels(1, 3).count(), 25);
        assert_eq!(Spiral::levels(4, 3).count(), 0);

        let ring3_first = Spiral::levels(3, 3).next();
        assert_eq!(ring3_first.map(|(i, _)| i), Some(SpiralIndex(10)));
    }

    #[test]
    fn spiral_index_accessors() {
        let idx = SpiralIndex::new(169);
        assert_eq!(idx.level(), 7);
        assert_eq!(idx.radius(), 6);
        assert_eq!(idx.point(), LatticePoint::new(6, -6));
        assert_eq!(u64::from(idx), 169);
    }

    #[test]
    fn large_index_no_overflow() {
        let level = 100_000;
        let n = max_index(level);
        assert_eq!(level_of(n), level);
        let p = index_to_point(n);
        assert_eq!(p, LatticePoint::new(99_999, -99_999));
        assert_eq!(point_to_index(p), n);
    }

    #[test]
    #[should_panic(expected = "start at 1")]
    fn index_zero_panics() {
        index_to_point(0);
    }
}
