//! Collaborator traits at the seams of the particle core.
//!
//! The core decides membership, storage and classification; everything
//! else (tree maintenance, message transport) happens behind these
//! traits. The boundary predicate lives with the box geometry in
//! `orrery-space`.

use crate::id::{CellId, ProcessId};
use crate::particle::Particle;

/// An external spatial index (tree or grid) kept in sync with insertions.
///
/// Called once per successful local insertion when a tree-based gravity
/// or collision method is configured. The implementation owns all of its
/// own structure maintenance; the core never queries it.
pub trait SpatialIndex: Send {
    /// A particle has just been stored at `index`.
    fn particle_inserted(&mut self, index: usize, particle: &Particle);
}

/// Decides which process owns a root cell and accepts particles that
/// must move to another process.
///
/// Installed only in distributed runs. From the core's point of view a
/// particle handed to [`enqueue_for_transfer`](Self::enqueue_for_transfer)
/// is simply not added locally; sending it and calling `add` on the
/// remote side is the transport's job.
pub trait OwnershipGate: Send {
    /// Rank of the process this simulation runs on.
    fn local_process(&self) -> ProcessId;

    /// Rank of the process owning `cell`.
    ///
    /// Must agree on every process for the same cell.
    fn owner_process(&self, cell: CellId) -> ProcessId;

    /// Queue `particle` for delivery to `process`.
    fn enqueue_for_transfer(&mut self, particle: Particle, process: ProcessId);
}
