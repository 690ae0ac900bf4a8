//! The particle lifecycle manager.
//!
//! [`Simulation`] owns the particle store and every counter that
//! describes it. All mutation goes through `&mut self`; nothing here is
//! shared between threads or between simulations.
//!
//! # Add path
//!
//! ```text
//! add(p)
//!  ├─ N_var > 0          → warn, continue
//!  ├─ collisions on      → MaxRadius::observe(p.r)
//!  ├─ GRAPE gravity      → MinimumMass::observe(p.m)
//!  ├─ distributed        → owner(root_box(p)) != local && N >= N_active
//!  │                          → enqueue_for_transfer, return
//!  ├─ outside boundary   → warn, return
//!  └─ append (grows the store if full), SpatialIndex::particle_inserted (tree methods)
//! ```

use orrery_core::{
    CellId, Diagnostic, OwnershipGate, Particle, ParticleId, RemoveError, SimulationId,
    SpatialIndex,
};
use orrery_space::{root_box_for_position, BoundaryCondition, BoxGeometry};
use orrery_store::ParticleStore;

use crate::config::{ConfigError, GravityMethod, SimulationConfig};
use crate::metrics::LifecycleMetrics;
use crate::trackers::{MaxRadius, MinimumMass};

// Compile-time assertion: a Simulation can move to a worker thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// Authoritative set of simulated bodies.
///
/// Created from a [`SimulationConfig`] via [`new()`](Simulation::new).
///
/// # Example
///
/// ```
/// use orrery_core::Particle;
/// use orrery_engine::{Simulation, SimulationConfig};
/// use orrery_space::BoxGeometry;
///
/// let mut sim = Simulation::new(SimulationConfig::new(BoxGeometry::unbounded())).unwrap();
/// sim.add(Particle::at(1.0, 0.0, 0.0).with_mass(1.0));
/// sim.add(Particle::at(-1.0, 0.0, 0.0).with_mass(1.0));
/// assert_eq!(sim.len(), 2);
/// assert!(sim.remove(0, true).is_ok());
/// ```
pub struct Simulation {
    id: SimulationId,
    store: ParticleStore,
    geometry: BoxGeometry,
    boundary: Box<dyn BoundaryCondition>,
    gravity: GravityMethod,
    uses_tree: bool,
    tracks_radii: bool,
    spatial_index: Option<Box<dyn SpatialIndex>>,
    ownership: Option<Box<dyn OwnershipGate>>,
    /// `None`: every particle is active.
    n_active: Option<usize>,
    n_var: usize,
    max_radius: MaxRadius,
    minimum_mass: MinimumMass,
    metrics: LifecycleMetrics,
}

impl Simulation {
    /// Create an empty simulation from a validated configuration.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let id = SimulationId::next();
        let uses_tree = config.uses_tree();
        let tracks_radii = config.tracks_radii();
        Ok(Self {
            id,
            store: ParticleStore::new(config.store, id),
            geometry: config.geometry,
            boundary: config.boundary,
            gravity: config.gravity,
            uses_tree,
            tracks_radii,
            spatial_index: config.spatial_index,
            ownership: config.ownership,
            n_active: None,
            n_var: 0,
            max_radius: MaxRadius::default(),
            minimum_mass: MinimumMass::default(),
            metrics: LifecycleMetrics::default(),
        })
    }

    // ── Add path ───────────────────────────────────────────────────

    /// Add a particle.
    ///
    /// Never fails: a particle outside the boundary is dropped with a
    /// diagnostic, and in distributed mode a particle owned by another
    /// process is handed to the ownership gate instead of being stored.
    /// Check [`metrics()`](Self::metrics) to see which path was taken.
    pub fn add(&mut self, particle: Particle) {
        if self.n_var > 0 {
            self.metrics.added_during_variational += 1;
            report(&Diagnostic::AddedDuringVariational { n_var: self.n_var });
        }
        if self.tracks_radii {
            self.max_radius.observe(particle.r);
        }
        if self.gravity == GravityMethod::Grape {
            self.minimum_mass.observe(particle.m);
        }

        if let Some(gate) = self.ownership.as_mut() {
            let cell = root_box_for_position(&self.geometry, particle.pos);
            let owner = gate.owner_process(cell);
            let n = self.store.len();
            let redistributable = self.n_active.is_none_or(|active| n >= active);
            if owner != gate.local_process() && redistributable {
                tracing::debug!(
                    particle = %particle.id,
                    cell = %cell,
                    process = %owner,
                    "particle queued for remote owner"
                );
                gate.enqueue_for_transfer(particle, owner);
                self.metrics.queued_for_transfer += 1;
                return;
            }
        }

        self.add_local(particle);
    }

    fn add_local(&mut self, particle: Particle) {
        if !self.boundary.is_inside(&particle, &self.geometry) {
            self.metrics.rejected_outside_boundary += 1;
            report(&Diagnostic::OutsideBoundary {
                id: particle.id,
                pos: particle.pos,
            });
            return;
        }

        let index = self.store.append(particle);
        self.metrics.added += 1;

        if self.uses_tree {
            if let (Some(tree), Some(stored)) =
                (self.spatial_index.as_mut(), self.store.get(index))
            {
                tree.particle_inserted(index, stored);
                self.metrics.index_insertions += 1;
            }
        }
    }

    // ── Remove path ────────────────────────────────────────────────

    /// Remove every particle and reset the store and counters.
    ///
    /// Capacity drops to zero, `N_active` returns to "all active" and
    /// `N_var` to 0. The radius and mass trackers are kept.
    pub fn remove_all(&mut self) {
        self.store.clear();
        self.n_active = None;
        self.n_var = 0;
        self.metrics.clears += 1;
    }

    /// Remove the particle at `index`.
    ///
    /// With `keep_order` the survivors keep their relative order (O(N));
    /// without it the last particle moves into the gap (O(1)).
    ///
    /// # Errors
    ///
    /// Checked in this order, each leaving the store untouched:
    /// [`RemoveError::LastParticle`] when only one particle is live,
    /// [`RemoveError::IndexOutOfRange`], and
    /// [`RemoveError::VariationalActive`] while variational particles
    /// are allocated.
    pub fn remove(&mut self, index: usize, keep_order: bool) -> Result<(), RemoveError> {
        self.check_removable(index).inspect_err(|e| self.refuse(e))?;

        let last = self.store.len() - 1;
        if keep_order {
            self.store.shift_down(index);
        } else if index != last {
            self.store.overwrite(index, last);
        }
        self.store.truncate_last();
        self.metrics.removed += 1;
        Ok(())
    }

    /// Remove the lowest-index particle whose identifier is `id`.
    ///
    /// # Errors
    ///
    /// [`RemoveError::IdNotFound`] if no live particle carries `id`;
    /// otherwise whatever [`remove`](Self::remove) reports.
    pub fn remove_by_id(&mut self, id: ParticleId, keep_order: bool) -> Result<(), RemoveError> {
        match self.store.position_by_id(id) {
            Some(index) => self.remove(index, keep_order),
            None => {
                let e = RemoveError::IdNotFound { id };
                self.refuse(&e);
                Err(e)
            }
        }
    }

    fn check_removable(&self, index: usize) -> Result<(), RemoveError> {
        let len = self.store.len();
        if len == 1 {
            return Err(RemoveError::LastParticle);
        }
        if index >= len {
            return Err(RemoveError::IndexOutOfRange { index, len });
        }
        if self.n_var > 0 {
            return Err(RemoveError::VariationalActive { n_var: self.n_var });
        }
        Ok(())
    }

    fn refuse(&mut self, reason: &RemoveError) {
        self.metrics.remove_failures += 1;
        report(&Diagnostic::RemoveRefused(reason.clone()));
    }

    // ── Classification ─────────────────────────────────────────────

    /// Root cell of `particle`; independent of the store's contents.
    pub fn root_box_for_particle(&self, particle: &Particle) -> CellId {
        root_box_for_position(&self.geometry, particle.pos)
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// This simulation's identifier, stored in every live particle.
    pub fn id(&self) -> SimulationId {
        self.id
    }

    /// Box geometry.
    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    /// Live particles in store order.
    pub fn particles(&self) -> &[Particle] {
        self.store.as_slice()
    }

    /// Live particles, mutably. The count cannot change through this.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.store.as_mut_slice()
    }

    /// The particle at `index`, if live.
    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.store.get(index)
    }

    /// Number of live particles (`N`).
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// `true` if no particle is live.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Committed store capacity.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Number of active (massive) particles; `None` means all.
    pub fn n_active(&self) -> Option<usize> {
        self.n_active
    }

    /// Mark the first `n_active` particles as active; `None` means all.
    pub fn set_n_active(&mut self, n_active: Option<usize>) {
        self.n_active = n_active;
    }

    /// Number of variational particles.
    pub fn n_var(&self) -> usize {
        self.n_var
    }

    /// Record how many variational particles a downstream computation
    /// has allocated.
    pub fn set_n_var(&mut self, n_var: usize) {
        self.n_var = n_var;
    }

    /// Two largest radii seen (collision methods only).
    pub fn max_radius(&self) -> MaxRadius {
        self.max_radius
    }

    /// Smallest mass seen (GRAPE gravity only).
    pub fn minimum_mass(&self) -> Option<f64> {
        self.minimum_mass.get()
    }

    /// `true` if an ownership gate is installed.
    pub fn is_distributed(&self) -> bool {
        self.ownership.is_some()
    }

    /// Cumulative lifecycle counters.
    pub fn metrics(&self) -> &LifecycleMetrics {
        &self.metrics
    }

    /// Store growth steps since creation, including those before a
    /// `remove_all`.
    pub fn store_growths(&self) -> u64 {
        self.store.growths()
    }
}

fn report(diagnostic: &Diagnostic) {
    tracing::warn!("{diagnostic}");
}
