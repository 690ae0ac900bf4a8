//! The simulated box and its root grid.

use orrery_core::Vec3;

use crate::error::SpaceError;

/// Dimensions of the simulated box and its periodic root grid.
///
/// A box built with [`new`](Self::new) is tiled by `nx × ny × nz` cubic
/// root cells of edge `root_size`, centred on the origin. A box built
/// with [`single`](Self::single) or [`unbounded`](Self::unbounded) has no
/// root size: it is one cell and every position maps to cell 0.
///
/// # Examples
///
/// ```
/// use orrery_space::BoxGeometry;
///
/// let g = BoxGeometry::new(5.0, 2, 2, 2).unwrap();
/// assert_eq!(g.box_size().x, 10.0);
/// assert_eq!(g.cell_count(), 8);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoxGeometry {
    root_size: Option<f64>,
    root_n: [u32; 3],
    box_size: Vec3,
}

impl BoxGeometry {
    /// A box of `nx × ny × nz` root cells with edge `root_size`.
    ///
    /// Returns `Err(SpaceError::InvalidRootSize)` unless `root_size` is
    /// finite and positive, `Err(SpaceError::EmptyGrid)` if any count is
    /// zero, and `Err(SpaceError::CellCountOverflow)` if the total cell
    /// count does not fit in a `u32`.
    pub fn new(root_size: f64, nx: u32, ny: u32, nz: u32) -> Result<Self, SpaceError> {
        if !root_size.is_finite() || root_size <= 0.0 {
            return Err(SpaceError::InvalidRootSize { value: root_size });
        }
        for (axis, n) in [("x", nx), ("y", ny), ("z", nz)] {
            if n == 0 {
                return Err(SpaceError::EmptyGrid { axis });
            }
        }
        nx.checked_mul(ny)
            .and_then(|v| v.checked_mul(nz))
            .ok_or(SpaceError::CellCountOverflow {
                counts: [nx, ny, nz],
            })?;
        Ok(Self {
            root_size: Some(root_size),
            root_n: [nx, ny, nz],
            box_size: Vec3::new(
                root_size * f64::from(nx),
                root_size * f64::from(ny),
                root_size * f64::from(nz),
            ),
        })
    }

    /// A single-cell box of the given size, without decomposition.
    pub fn single(box_size: Vec3) -> Self {
        Self {
            root_size: None,
            root_n: [1, 1, 1],
            box_size,
        }
    }

    /// A single-cell box of infinite extent.
    pub fn unbounded() -> Self {
        Self::single(Vec3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY))
    }

    /// Edge length of a root cell, or `None` if no decomposition is set.
    pub fn root_size(&self) -> Option<f64> {
        self.root_size
    }

    /// Root cell counts along `x`, `y` and `z`.
    pub fn root_n(&self) -> [u32; 3] {
        self.root_n
    }

    /// Full box extent along each axis.
    pub fn box_size(&self) -> Vec3 {
        self.box_size
    }

    /// Total number of root cells.
    pub fn cell_count(&self) -> u32 {
        let [nx, ny, nz] = self.root_n;
        nx * ny * nz
    }
}

impl Default for BoxGeometry {
    fn default() -> Self {
        Self::unbounded()
    }
}
