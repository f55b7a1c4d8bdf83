//! Ulam Spiral Geometry
//!
//! Square spiral layout, pixel rasterization and primality for Ulam spiral
//! rendering.
//!
//! # Layout
//!
//! Integers are written on a square lattice starting with 1 at the origin and
//! winding counter-clockwise outward. Level `L` is the square ring of side
//! `2L - 1`; the first `L` levels hold exactly `(2L - 1)^2` integers.
//!
//! - [`index_to_point`] / [`point_to_index`]: closed-form bijection between
//!   spiral indices and lattice points
//! - [`GridLayout`]: maps lattice points to pixel rectangles, either with
//!   integer cell sizes ([`RoundingMode::Discrete`]) or real-valued ones
//!   ([`RoundingMode::Continuous`])
//! - [`PrimeTable`]: sieve of Eratosthenes sized for the largest index drawn

mod error;
mod lattice;
mod raster;
mod sieve;
mod spiral;

pub use error::{GeometryError, Result};
pub use lattice::LatticePoint;
pub use raster::{fit_levels, rect_of, GridLayout, PixelRect, RoundingMode};
pub use sieve::PrimeTable;
pub use spiral::{
    ceil_sqrt, checked_max_index, checked_side_length, first_index, index_to_point, level_of,
    max_index, point_to_index, ring_len, ring_radius, side_length, Spiral, SpiralIndex,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_of_level_seven_is_prime_free() {
        let table = PrimeTable::build(max_index(7));
        assert_eq!(table.limit(), 169);
        assert!(!table.is_prime(169));
        assert_eq!(index_to_point(169), LatticePoint::new(6, -6));
    }

    #[test]
    fn every_cell_of_a_layout_is_reachable() {
        let levels = 6;
        let layout = GridLayout::new(121, 121, levels, RoundingMode::Discrete).unwrap();
        let block = layout.block();
        for (_, point) in Spiral::take_indices(max_index(levels)) {
            let rect = layout.rect_of(point);
            assert!(rect.x1 >= block.x1 && rect.x2 <= block.x2);
            assert!(rect.y1 >= block.y1 && rect.y2 <= block.y2);
        }
    }
}
