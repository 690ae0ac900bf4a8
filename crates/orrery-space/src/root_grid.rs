//! Root-cell decomposition indexer.
//!
//! Maps a position to the root cell containing it. The result decides
//! which process owns a particle in a distributed run, so it has to be
//! bit-identical on every process: the computation is one add, one
//! divide and one floor per axis in `f64`, with no fused or
//! platform-dependent operations.

use orrery_core::{CellId, Vec3};

use crate::geometry::BoxGeometry;

/// Root cell containing `pos`.
///
/// Per axis, `floor((coord + box / 2) / root_size)` is wrapped into
/// `[0, n)` by Euclidean remainder, so positions outside the nominal box
/// land in their periodic image. Axes combine row-major:
/// `(k * ny + j) * nx + i`.
///
/// Returns cell 0 when the geometry has no root size. Non-finite
/// coordinates map to index 0 on their axis.
///
/// # Examples
///
/// ```
/// use orrery_core::{CellId, Vec3};
/// use orrery_space::{root_box_for_position, BoxGeometry};
///
/// let g = BoxGeometry::new(5.0, 2, 2, 2).unwrap();
/// // The origin sits in grid cell (1, 1, 1).
/// assert_eq!(root_box_for_position(&g, Vec3::ZERO), CellId(7));
/// ```
pub fn root_box_for_position(geometry: &BoxGeometry, pos: Vec3) -> CellId {
    let Some(root_size) = geometry.root_size() else {
        return CellId(0);
    };
    let [nx, ny, nz] = geometry.root_n();
    let size = geometry.box_size();
    let i = axis_index(pos.x, size.x, root_size, nx);
    let j = axis_index(pos.y, size.y, root_size, ny);
    let k = axis_index(pos.z, size.z, root_size, nz);
    CellId((k * ny + j) * nx + i)
}

/// Grid coordinates `[i, j, k]` of `cell`; the inverse of the row-major
/// combine in [`root_box_for_position`].
pub fn cell_coords(geometry: &BoxGeometry, cell: CellId) -> [u32; 3] {
    let [nx, ny, _] = geometry.root_n();
    let i = cell.0 % nx;
    let j = (cell.0 / nx) % ny;
    let k = cell.0 / (nx * ny);
    [i, j, k]
}

fn axis_index(coord: f64, box_len: f64, root_size: f64, n: u32) -> u32 {
    // `as` saturates and sends NaN to 0.
    let cell = ((coord + box_len / 2.0) / root_size).floor() as i64;
    cell.rem_euclid(i64::from(n)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_10() -> BoxGeometry {
        BoxGeometry::new(5.0, 2, 2, 2).unwrap()
    }

    #[test]
    fn unset_root_size_is_cell_zero() {
        let g = BoxGeometry::unbounded();
        assert_eq!(root_box_for_position(&g, Vec3::new(1e9, -3.0, 7.0)), CellId(0));
        assert_eq!(root_box_for_position(&g, Vec3::ZERO), CellId(0));
    }

    #[test]
    fn origin_maps_to_upper_octant() {
        let g = grid_10();
        let cell = root_box_for_position(&g, Vec3::ZERO);
        assert_eq!(cell_coords(&g, cell), [1, 1, 1]);
        assert_eq!(cell, CellId((2 + 1) * 2 + 1));
    }

    #[test]
    fn interior_points_follow_row_major_order() {
        let g = grid_10();
        // (i, j, k) = (0, 1, 0)
        assert_eq!(root_box_for_position(&g, Vec3::new(-2.0, 2.0, -2.0)), CellId(2));
        // (i, j, k) = (1, 0, 0)
        assert_eq!(root_box_for_position(&g, Vec3::new(2.0, -2.0, -2.0)), CellId(1));
        // (i, j, k) = (0, 0, 1)
        assert_eq!(root_box_for_position(&g, Vec3::new(-2.0, -2.0, 2.0)), CellId(4));
    }

    #[test]
    fn upper_face_wraps_to_lower_face() {
        let g = grid_10();
        let lo = root_box_for_position(&g, Vec3::new(-5.0, -5.0, -5.0));
        assert_eq!(lo, CellId(0));
        assert_eq!(root_box_for_position(&g, Vec3::new(5.0, -5.0, -5.0)), lo);
        assert_eq!(root_box_for_position(&g, Vec3::new(-5.0, 5.0, -5.0)), lo);
        assert_eq!(root_box_for_position(&g, Vec3::new(-5.0, -5.0, 5.0)), lo);
    }

    #[test]
    fn positions_outside_box_wrap_periodically() {
        let g = grid_10();
        let inside = root_box_for_position(&g, Vec3::new(-2.0, 2.0, 3.0));
        let shifted = Vec3::new(-2.0 + 10.0, 2.0 - 30.0, 3.0 + 100.0);
        assert_eq!(root_box_for_position(&g, shifted), inside);
    }

    #[test]
    fn anisotropic_grid() {
        let g = BoxGeometry::new(1.0, 4, 3, 2).unwrap();
        // Box is 4 x 3 x 2; lower corner maps to (0, 0, 0).
        assert_eq!(root_box_for_position(&g, Vec3::new(-2.0, -1.5, -1.0)), CellId(0));
        // (3, 2, 1) -> (1 * 3 + 2) * 4 + 3 = 23.
        let cell = root_box_for_position(&g, Vec3::new(1.5, 1.0, 0.5));
        assert_eq!(cell, CellId(23));
        assert_eq!(cell_coords(&g, cell), [3, 2, 1]);
    }

    #[test]
    fn non_finite_coordinates_stay_in_range() {
        let g = grid_10();
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let c = root_box_for_position(&g, Vec3::new(v, v, v));
            assert!(c.0 < g.cell_count());
        }
    }

    proptest! {
        #[test]
        fn cell_is_always_in_range(
            nx in 1u32..8, ny in 1u32..8, nz in 1u32..8,
            root in 0.1f64..50.0,
            x in -1e6f64..1e6, y in -1e6f64..1e6, z in -1e6f64..1e6,
        ) {
            let g = BoxGeometry::new(root, nx, ny, nz).unwrap();
            let c = root_box_for_position(&g, Vec3::new(x, y, z));
            prop_assert!(c.0 < g.cell_count());
        }

        #[test]
        fn indexer_is_deterministic(x in -100.0f64..100.0, y in -100.0f64..100.0, z in -100.0f64..100.0) {
            let g = BoxGeometry::new(3.0, 5, 4, 3).unwrap();
            let p = Vec3::new(x, y, z);
            prop_assert_eq!(root_box_for_position(&g, p), root_box_for_position(&g.clone(), p));
        }

        #[test]
        fn coords_roundtrip_through_cell_id(i in 0u32..6, j in 0u32..5, k in 0u32..4) {
            let g = BoxGeometry::new(2.0, 6, 5, 4).unwrap();
            // Centre of grid cell (i, j, k).
            let size = g.box_size();
            let p = Vec3::new(
                (f64::from(i) + 0.5) * 2.0 - size.x / 2.0,
                (f64::from(j) + 0.5) * 2.0 - size.y / 2.0,
                (f64::from(k) + 0.5) * 2.0 - size.z / 2.0,
            );
            let cell = root_box_for_position(&g, p);
            prop_assert_eq!(cell_coords(&g, cell), [i, j, k]);
        }
    }
}
