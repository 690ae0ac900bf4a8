//! Boundary membership predicates.

use orrery_core::Particle;

use crate::geometry::BoxGeometry;

/// Decides whether a particle lies inside the simulated volume.
///
/// Queried once per `add`. It is the only validation a new particle goes
/// through; a `false` answer drops the particle.
pub trait BoundaryCondition: Send {
    /// `true` if `particle` may be stored in a simulation with `geometry`.
    fn is_inside(&self, particle: &Particle, geometry: &BoxGeometry) -> bool;
}

/// Built-in boundary conditions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Boundary {
    /// No boundary: every position is accepted.
    #[default]
    None,
    /// Particles leaving the box are lost: only positions inside the box
    /// (faces included) are accepted.
    Open,
    /// Periodic box: every position has an image inside, so every
    /// position is accepted.
    Periodic,
    /// Shearing sheet: membership is tested like [`Open`](Self::Open).
    Shear,
}

impl BoundaryCondition for Boundary {
    fn is_inside(&self, particle: &Particle, geometry: &BoxGeometry) -> bool {
        match self {
            Self::None | Self::Periodic => true,
            Self::Open | Self::Shear => {
                let size = geometry.box_size();
                let p = particle.pos;
                !(p.x > size.x / 2.0
                    || p.x < -size.x / 2.0
                    || p.y > size.y / 2.0
                    || p.y < -size.y / 2.0
                    || p.z > size.z / 2.0
                    || p.z < -size.z / 2.0)
            }
        }
    }
}
