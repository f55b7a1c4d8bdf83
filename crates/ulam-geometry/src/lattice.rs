//! Integer lattice for the square spiral.
//!
//! Points are centered on the spiral origin (index 1) with the y axis pointing
//! up, so that ring `r` is exactly the set of points whose Chebyshev distance
//! from the origin is `r`.

/// A cell position on the centered square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticePoint {
    /// Column, growing to the right
    pub x: i64,
    /// Row, growing upward
    pub y: i64,
}

impl LatticePoint {
    /// Center of the spiral.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance between two points.
    pub fn chebyshev_distance(&self, other: &Self) -> u64 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Ring radius (0 = origin, 1 = the eight cells around it, ...).
    pub fn radius(&self) -> u64 {
        self.chebyshev_distance(&Self::ORIGIN)
    }

    /// 1-based level of the ring containing this point.
    pub fn level(&self) -> u64 {
        self.radius() + 1
    }

    /// Whether this point lies inside a spiral of `levels` rings.
    pub fn within_levels(&self, levels: u64) -> bool {
        levels > 0 && self.radius() < levels
    }
}

impl std::fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
