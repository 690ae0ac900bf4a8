//! Particle lifecycle management for Orrery N-body simulations.
//!
//! [`Simulation`] is the public entry point: it owns the particle store
//! and orchestrates `add`, `remove`, `remove_by_id` and `remove_all`
//! under the mode chosen in its [`SimulationConfig`] (single process or
//! distributed, tree-backed or not, collision tracking or not).
//!
//! Diagnostics for dropped particles and refused removals go through
//! `tracing` at `warn` level and are counted in [`LifecycleMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod distributed;
pub mod metrics;
pub mod simulation;
pub mod trackers;

pub use config::{CollisionMethod, ConfigError, GravityMethod, SimulationConfig};
pub use distributed::{ChannelTransfer, QueuedTransfer, SendQueues, Transfer};
pub use metrics::LifecycleMetrics;
pub use simulation::Simulation;
pub use trackers::{MaxRadius, MinimumMass};
