//! Core types and traits for the Orrery N-body particle core.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Orrery workspace:
//! the [`Particle`] record, typed identifiers, error and diagnostic
//! types, and the traits through which the spatial index and
//! distributed ownership collaborators plug in.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diagnostic;
pub mod error;
pub mod id;
pub mod particle;
pub mod traits;

pub use diagnostic::Diagnostic;
pub use error::{remove_status, RemoveError};
pub use id::{CellId, ParticleId, ProcessId, SimulationId};
pub use particle::{AuxHandle, Particle, Vec3};
pub use traits::{OwnershipGate, SpatialIndex};
