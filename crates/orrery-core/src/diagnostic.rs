//! Non-fatal diagnostics raised by the lifecycle operations.
//!
//! Diagnostics are advisory. The engine logs them and counts them, but
//! control flow never depends on them.

use std::fmt;

use crate::error::RemoveError;
use crate::id::ParticleId;
use crate::particle::Vec3;

/// A condition worth reporting that did not stop the operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// A particle was added while variational particles are allocated.
    /// The addition went ahead; the shadow bookkeeping may now be stale.
    AddedDuringVariational {
        /// Number of variational particles.
        n_var: usize,
    },
    /// A particle was dropped because its position lies outside the
    /// simulated volume.
    OutsideBoundary {
        /// Identifier of the dropped particle.
        id: ParticleId,
        /// Its position.
        pos: Vec3,
    },
    /// A removal request was refused.
    RemoveRefused(RemoveError),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddedDuringVariational { n_var } => write!(
                f,
                "particle added while {n_var} variational particles are allocated"
            ),
            Self::OutsideBoundary { id, pos } => write!(
                f,
                "did not add particle {id} at ({}, {}, {}): outside box boundaries",
                pos.x, pos.y, pos.z
            ),
            Self::RemoveRefused(reason) => write!(f, "did not remove particle: {reason}"),
        }
    }
}
