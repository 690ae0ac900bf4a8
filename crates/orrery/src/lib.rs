//! Orrery: the particle lifecycle core of an N-body simulator.
//!
//! This facade re-exports the public API of the Orrery sub-crates. Adding
//! `orrery` as a single dependency is enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use orrery::prelude::*;
//!
//! // A 2x2x2 grid of root boxes, each 5.0 wide, with an open boundary.
//! let mut config = SimulationConfig::with_root_grid(5.0, 2, 2, 2).unwrap();
//! config.boundary = Box::new(Boundary::Open);
//! let mut sim = Simulation::new(config).unwrap();
//!
//! sim.add(Particle::at(1.0, 0.0, 0.0).with_id(1u32));
//! sim.add(Particle::at(-1.0, 0.0, 0.0).with_id(2u32));
//! sim.add(Particle::at(12.0, 0.0, 0.0)); // outside the box: dropped
//! assert_eq!(sim.len(), 2);
//! assert_eq!(sim.metrics().rejected_outside_boundary, 1);
//!
//! sim.remove_by_id(ParticleId(1), true).unwrap();
//! assert_eq!(sim.particles()[0].id, ParticleId(2));
//! assert_eq!(sim.remove(0, true), Err(RemoveError::LastParticle));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `orrery-core` | Particles, IDs, errors, collaborator traits |
//! | [`store`] | `orrery-store` | Growable particle storage |
//! | [`space`] | `orrery-space` | Box geometry, root grid, boundaries, partitions |
//! | [`engine`] | `orrery-engine` | `Simulation`, configuration, ownership gates |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`orrery-core`).
///
/// Contains [`types::Particle`], the removal error type, and the
/// collaborator traits [`types::SpatialIndex`] and [`types::OwnershipGate`].
pub use orrery_core as types;

/// Particle storage with incremental growth (`orrery-store`).
pub use orrery_store as store;

/// Box geometry and domain decomposition (`orrery-space`).
///
/// Provides [`space::BoxGeometry`], [`space::root_box_for_position`],
/// the [`space::BoundaryCondition`] trait with its stock
/// [`space::Boundary`] policies, and [`space::DomainPartition`].
pub use orrery_space as space;

/// Particle lifecycle management (`orrery-engine`).
///
/// [`engine::Simulation`] owns the particle set; [`engine::QueuedTransfer`]
/// and [`engine::ChannelTransfer`] route particles in distributed runs.
pub use orrery_engine as engine;

/// Common imports for typical Orrery usage.
///
/// ```rust
/// use orrery::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use orrery_core::{
        CellId, OwnershipGate, Particle, ParticleId, ProcessId, SimulationId, SpatialIndex, Vec3,
    };

    // Errors
    pub use orrery_core::{remove_status, RemoveError};

    // Space
    pub use orrery_space::{Boundary, BoundaryCondition, BoxGeometry, DomainPartition};

    // Engine
    pub use orrery_engine::{
        CollisionMethod, ConfigError, GravityMethod, LifecycleMetrics, QueuedTransfer,
        Simulation, SimulationConfig,
    };
}
