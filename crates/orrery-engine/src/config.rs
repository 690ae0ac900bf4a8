//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the constructor input for a
//! [`Simulation`](crate::Simulation). Every mode the particle core knows
//! about (tree-backed or not, collision tracking or not, single process
//! or distributed) is chosen here at runtime; there are no build-time
//! switches.

use std::error::Error;
use std::fmt;

use orrery_core::{OwnershipGate, SpatialIndex};
use orrery_space::{Boundary, BoundaryCondition, BoxGeometry, SpaceError};
use orrery_store::StoreConfig;

// ── Methods ────────────────────────────────────────────────────────

/// Gravity solver the simulation is configured with.
///
/// The particle core computes no forces; it only needs to know whether
/// the solver keeps a spatial index or tracks the minimum mass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GravityMethod {
    /// No self-gravity.
    None,
    /// Direct summation.
    #[default]
    Basic,
    /// Tree code; every stored particle is registered with the spatial index.
    Tree,
    /// GRAPE hardware; the smallest particle mass is tracked.
    Grape,
}

/// Collision search the simulation is configured with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionMethod {
    /// No collisions; radii are not tracked.
    #[default]
    None,
    /// Direct pairwise search.
    Direct,
    /// Tree-based search; every stored particle is registered with the
    /// spatial index.
    Tree,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Box geometry or partition construction failed.
    Space(SpaceError),
    /// A tree method is configured but no spatial index was supplied.
    MissingSpatialIndex {
        /// Configured gravity method.
        gravity: GravityMethod,
        /// Configured collision method.
        collision: CollisionMethod,
    },
    /// The store growth increment is zero.
    ZeroGrowthIncrement,
    /// An ownership gate is installed but the geometry has no root grid,
    /// so every particle would map to cell 0.
    DistributedWithoutRootGrid,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::MissingSpatialIndex { gravity, collision } => write!(
                f,
                "gravity {gravity:?} / collision {collision:?} needs a spatial index"
            ),
            Self::ZeroGrowthIncrement => write!(f, "store growth increment must be at least 1"),
            Self::DistributedWithoutRootGrid => {
                write!(f, "distributed mode needs a root grid (root_size is unset)")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for constructing a simulation.
///
/// Consumed by [`Simulation::new`](crate::Simulation::new), which calls
/// [`validate()`](Self::validate) first.
pub struct SimulationConfig {
    /// Box dimensions and root grid.
    pub geometry: BoxGeometry,
    /// Membership predicate applied to every new particle.
    /// Default: [`Boundary::None`].
    pub boundary: Box<dyn BoundaryCondition>,
    /// Gravity method. Default: [`GravityMethod::Basic`].
    pub gravity: GravityMethod,
    /// Collision method. Default: [`CollisionMethod::None`].
    pub collision: CollisionMethod,
    /// Particle store sizing.
    pub store: StoreConfig,
    /// Spatial index notified of insertions. Required by tree methods.
    pub spatial_index: Option<Box<dyn SpatialIndex>>,
    /// Ownership gate. `Some` puts the simulation in distributed mode.
    pub ownership: Option<Box<dyn OwnershipGate>>,
}

impl SimulationConfig {
    /// Single-process configuration with defaults for everything but the
    /// geometry.
    pub fn new(geometry: BoxGeometry) -> Self {
        Self {
            geometry,
            boundary: Box::new(Boundary::None),
            gravity: GravityMethod::default(),
            collision: CollisionMethod::default(),
            store: StoreConfig::default(),
            spatial_index: None,
            ownership: None,
        }
    }

    /// Default configuration over a root grid of `nx × ny × nz` cells of
    /// edge `root_size`.
    pub fn with_root_grid(root_size: f64, nx: u32, ny: u32, nz: u32) -> Result<Self, ConfigError> {
        Ok(Self::new(BoxGeometry::new(root_size, nx, ny, nz)?))
    }

    /// `true` if stored particles must be registered with the spatial index.
    pub fn uses_tree(&self) -> bool {
        self.gravity == GravityMethod::Tree || self.collision == CollisionMethod::Tree
    }

    /// `true` if the two largest radii are tracked.
    pub fn tracks_radii(&self) -> bool {
        self.collision != CollisionMethod::None
    }

    /// `true` if an ownership gate is installed.
    pub fn is_distributed(&self) -> bool {
        self.ownership.is_some()
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Store must be able to grow.
        if self.store.growth_increment == 0 {
            return Err(ConfigError::ZeroGrowthIncrement);
        }
        // 2. Tree methods need somewhere to put the particles.
        if self.uses_tree() && self.spatial_index.is_none() {
            return Err(ConfigError::MissingSpatialIndex {
                gravity: self.gravity,
                collision: self.collision,
            });
        }
        // 3. Ownership is decided per root cell.
        if self.is_distributed() && self.geometry.root_size().is_none() {
            return Err(ConfigError::DistributedWithoutRootGrid);
        }
        Ok(())
    }
}
