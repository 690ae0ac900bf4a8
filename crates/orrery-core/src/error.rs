//! Error types for particle removal.
//!
//! Adding a particle never fails from the caller's point of view (see
//! [`Diagnostic`](crate::Diagnostic)); removal reports why it refused.

use std::error::Error;
use std::fmt;

use crate::id::ParticleId;

/// Reasons a removal request was refused.
///
/// Every variant leaves the store untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveError {
    /// Only one particle is live; clearing must go through `remove_all`.
    LastParticle,
    /// The index is not in the live range `[0, len)`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Live particle count at the time of the request.
        len: usize,
    },
    /// Variational (shadow) particles are allocated, so the particle
    /// ordering must stay fixed.
    VariationalActive {
        /// Number of variational particles.
        n_var: usize,
    },
    /// No live particle carries the requested identifier.
    IdNotFound {
        /// The requested identifier.
        id: ParticleId,
    },
}

impl RemoveError {
    /// Numeric status for foreign callers: always `0` (failure).
    ///
    /// Pair with [`remove_status`] to map a whole `Result`.
    pub fn status(&self) -> i32 {
        0
    }
}

/// Map a removal result onto the `1` (success) / `0` (failure) status
/// convention used by foreign callers.
pub fn remove_status(result: &Result<(), RemoveError>) -> i32 {
    match result {
        Ok(()) => 1,
        Err(e) => e.status(),
    }
}

impl fmt::Display for RemoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastParticle => {
                write!(f, "refusing to remove the last particle; use remove_all")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range (N={len})")
            }
            Self::VariationalActive { n_var } => {
                write!(
                    f,
                    "removal not supported while {n_var} variational particles are allocated"
                )
            }
            Self::IdNotFound { id } => write!(f, "no particle with id {id}"),
        }
    }
}

impl Error for RemoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(remove_status(&Ok(())), 1);
        assert_eq!(remove_status(&Err(RemoveError::LastParticle)), 0);
        assert_eq!(
            remove_status(&Err(RemoveError::IdNotFound { id: ParticleId(3) })),
            0
        );
    }

    #[test]
    fn display_names_the_index() {
        let e = RemoveError::IndexOutOfRange { index: 9, len: 4 };
        assert_eq!(e.to_string(), "index 9 out of range (N=4)");
    }
}
