//! The contiguous particle store.

use orrery_core::{Particle, ParticleId, SimulationId};

use crate::config::StoreConfig;

/// Dense, incrementally grown array of live particles.
///
/// Invariants:
/// - live particles occupy `[0, len)` with no holes;
/// - `len <= capacity` after every call;
/// - `capacity` is a multiple of the growth increment and only shrinks
///   on [`clear`](Self::clear).
///
/// # Examples
///
/// ```
/// use orrery_core::{Particle, SimulationId};
/// use orrery_store::{ParticleStore, StoreConfig};
///
/// let mut store = ParticleStore::new(StoreConfig::default(), SimulationId::next());
/// let index = store.append(Particle::at(0.0, 0.0, 0.0));
/// assert_eq!(index, 0);
/// assert_eq!(store.capacity(), 128);
/// ```
#[derive(Debug)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    /// Committed capacity in slots.
    allocated: usize,
    growth_increment: usize,
    owner: SimulationId,
    /// Cumulative growth steps since creation (survives `clear`).
    growths: u64,
}

impl ParticleStore {
    /// Create an empty store owned by `owner`.
    ///
    /// No memory is committed until the first
    /// [`append`](Self::append). A zero growth increment
    /// is treated as 1.
    pub fn new(config: StoreConfig, owner: SimulationId) -> Self {
        Self {
            particles: Vec::new(),
            allocated: 0,
            growth_increment: config.growth_increment.max(1),
            owner,
            growths: 0,
        }
    }

    /// Grow until there is room for one more particle.
    ///
    /// While `capacity <= len`, commits another `growth_increment` slots.
    /// Existing particles keep their indices. Returns the number of
    /// growth steps taken (0 if there was already room).
    pub fn ensure_capacity(&mut self) -> usize {
        let mut steps = 0;
        while self.allocated <= self.particles.len() {
            self.allocated += self.growth_increment;
            steps += 1;
        }
        if steps > 0 {
            let additional = self.allocated - self.particles.len();
            self.particles.reserve_exact(additional);
            self.growths += steps as u64;
            tracing::debug!(
                simulation = %self.owner,
                capacity = self.allocated,
                steps,
                "particle store grown"
            );
        }
        steps
    }

    /// Store `particle` in slot `len` and return its index.
    ///
    /// Grows the store first if it is full, so `len <= capacity` holds
    /// afterwards whether or not the caller reserved room. Clears the
    /// particle's auxiliary slot and points its back-reference at this
    /// store's owner.
    pub fn append(&mut self, mut particle: Particle) -> usize {
        self.ensure_capacity();
        particle.aux = None;
        particle.sim = Some(self.owner);
        self.particles.push(particle);
        self.particles.len() - 1
    }

    /// Copy the particle at `src` into slot `dst`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not live.
    pub fn overwrite(&mut self, dst: usize, src: usize) {
        let value = self.particles[src].clone();
        self.particles[dst] = value;
    }

    /// Move every particle after `from` down by one slot.
    ///
    /// Afterwards `[from, len - 1)` holds the former `[from + 1, len)` in
    /// order and the last slot holds the former particle at `from`, ready
    /// for [`truncate_last`](Self::truncate_last).
    ///
    /// # Panics
    ///
    /// Panics if `from` is not live.
    pub fn shift_down(&mut self, from: usize) {
        self.particles[from..].rotate_left(1);
    }

    /// Drop the last live particle, if any. Capacity is unchanged.
    pub fn truncate_last(&mut self) -> Option<Particle> {
        self.particles.pop()
    }

    /// Release all storage and reset the committed capacity to zero.
    pub fn clear(&mut self) {
        self.particles = Vec::new();
        self.allocated = 0;
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// `true` if no particle is live.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Committed capacity in slots.
    pub fn capacity(&self) -> usize {
        self.allocated
    }

    /// Cumulative growth steps since the store was created.
    pub fn growths(&self) -> u64 {
        self.growths
    }

    /// The particle at `index`, if live.
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// All live particles.
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// All live particles, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Iterate over live particles in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Lowest index holding a particle with identifier `id`.
    pub fn position_by_id(&self, id: ParticleId) -> Option<usize> {
        self.particles.iter().position(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::AuxHandle;
    use proptest::prelude::*;

    fn store(increment: usize) -> ParticleStore {
        ParticleStore::new(StoreConfig::new(increment), SimulationId::next())
    }

    fn fill(store: &mut ParticleStore, n: u32) {
        for i in 0..n {
            store.append(Particle::at(i as f64, 0.0, 0.0).with_id(i));
        }
    }

    fn ids(store: &ParticleStore) -> Vec<u32> {
        store.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn new_store_commits_nothing() {
        let s = store(128);
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn ensure_capacity_grows_one_increment() {
        let mut s = store(128);
        assert_eq!(s.ensure_capacity(), 1);
        assert_eq!(s.capacity(), 128);
        // Already room: no-op.
        assert_eq!(s.ensure_capacity(), 0);
        assert_eq!(s.capacity(), 128);
    }

    #[test]
    fn growth_preserves_entries() {
        let mut s = store(4);
        fill(&mut s, 9);
        assert_eq!(s.capacity(), 12);
        assert_eq!(s.growths(), 3);
        assert_eq!(ids(&s), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn append_sets_owner_and_clears_aux() {
        let owner = SimulationId::next();
        let mut s = ParticleStore::new(StoreConfig::default(), owner);
        let p = Particle::at(1.0, 2.0, 3.0).with_aux(AuxHandle::new("payload"));
        let i = s.append(p);
        let stored = s.get(i).unwrap();
        assert_eq!(stored.sim, Some(owner));
        assert!(stored.aux.is_none());
        assert_eq!(stored.pos.y, 2.0);
    }

    #[test]
    fn append_grows_a_fresh_store() {
        let mut s = store(128);
        assert_eq!(s.append(Particle::default()), 0);
        assert_eq!(s.len(), 1);
        assert_eq!(s.capacity(), 128);
        assert!(s.len() <= s.capacity());
        assert_eq!(s.growths(), 1);
    }

    #[test]
    fn append_after_clear_regrows() {
        let mut s = store(4);
        fill(&mut s, 3);
        s.clear();
        s.append(Particle::default());
        assert_eq!(s.capacity(), 4);
        assert_eq!(s.growths(), 2);
    }

    #[test]
    fn overwrite_copies_value() {
        let mut s = store(8);
        fill(&mut s, 3);
        s.overwrite(0, 2);
        assert_eq!(ids(&s), vec![2, 1, 2]);
    }

    #[test]
    fn shift_down_then_truncate_removes_in_order() {
        let mut s = store(8);
        fill(&mut s, 5);
        s.shift_down(1);
        let removed = s.truncate_last().unwrap();
        assert_eq!(removed.id, ParticleId(1));
        assert_eq!(ids(&s), vec![0, 2, 3, 4]);
        assert_eq!(s.capacity(), 8);
    }

    #[test]
    fn clear_resets_capacity() {
        let mut s = store(8);
        fill(&mut s, 10);
        s.clear();
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 0);
        assert_eq!(s.growths(), 2);
    }

    #[test]
    fn position_by_id_finds_lowest_index() {
        let mut s = store(8);
        for id in [5u32, 7, 5] {
            s.append(Particle::at(0.0, 0.0, 0.0).with_id(id));
        }
        assert_eq!(s.position_by_id(ParticleId(5)), Some(0));
        assert_eq!(s.position_by_id(ParticleId(7)), Some(1));
        assert_eq!(s.position_by_id(ParticleId(6)), None);
    }

    #[test]
    fn zero_increment_is_clamped() {
        let mut s = store(0);
        assert_eq!(s.ensure_capacity(), 1);
        assert_eq!(s.capacity(), 1);
    }

    proptest! {
        #[test]
        fn capacity_is_smallest_covering_multiple(n in 0u32..600, inc in 1usize..200) {
            let mut s = store(inc);
            fill(&mut s, n);
            let n = n as usize;
            prop_assert_eq!(s.len(), n);
            prop_assert!(s.capacity() >= n);
            prop_assert_eq!(s.capacity() % inc, 0);
            // One increment less would not have covered the last append.
            if n > 0 {
                prop_assert!(s.capacity() - inc < n);
            }
        }
    }
}
