//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Caller-assigned particle identifier.
///
/// The core never allocates these and never enforces uniqueness; two
/// particles sharing an ID is legal, and lookups by ID resolve to the
/// lowest store index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParticleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`SimulationId`] allocation.
static SIMULATION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a simulation.
///
/// Stored in every live particle as its owning-simulation back-reference.
/// It is a plain identifier, not an ownership edge: the simulation owns
/// the particle, never the other way round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimulationId(u64);

impl SimulationId {
    /// Allocate a fresh, unique simulation ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(SIMULATION_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SimulationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Root cell of the periodic decomposition grid.
///
/// Cells are numbered row-major: `(k * ny + j) * nx + i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Rank of a process participating in a distributed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub u32);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProcessId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_ids_are_unique() {
        let a = SimulationId::next();
        let b = SimulationId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_display_their_value() {
        assert_eq!(ParticleId(7).to_string(), "7");
        assert_eq!(CellId(3).to_string(), "3");
        assert_eq!(ProcessId::from(2).to_string(), "2");
    }
}
