//! The [`Particle`] value record and its auxiliary handle.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::id::{ParticleId, SimulationId};

/// A three-component `f64` vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as an array, in `x, y, z` order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// `true` if every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Opaque, caller-managed auxiliary data attached to a particle.
///
/// The core only stores and clears this slot; it never inspects the
/// payload. Equality is identity: two handles are equal when they point
/// at the same allocation.
#[derive(Clone)]
pub struct AuxHandle(Arc<dyn Any + Send + Sync>);

impl AuxHandle {
    /// Wrap an arbitrary payload.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrow the payload as `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for AuxHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuxHandle({:p})", Arc::as_ptr(&self.0))
    }
}

impl PartialEq for AuxHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A simulated body.
///
/// Particles are plain values: the caller builds one, hands it to
/// `Simulation::add`, and the store keeps its own copy. References into
/// the store are invalidated by any later insertion or removal.
///
/// # Examples
///
/// ```
/// use orrery_core::{Particle, ParticleId, Vec3};
///
/// let p = Particle::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 1e-3)
///     .with_radius(0.01)
///     .with_id(ParticleId(4));
/// assert_eq!(p.id, ParticleId(4));
/// assert!(p.sim.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
    /// Position.
    pub pos: Vec3,
    /// Velocity.
    pub vel: Vec3,
    /// Mass.
    pub m: f64,
    /// Physical radius.
    pub r: f64,
    /// Caller-assigned identifier.
    pub id: ParticleId,
    /// Owning simulation, set when the particle is stored.
    pub sim: Option<SimulationId>,
    /// Caller-managed auxiliary slot, cleared when the particle is stored.
    pub aux: Option<AuxHandle>,
}

impl Particle {
    /// Create a particle with the given state, zero radius and ID 0.
    pub fn new(pos: Vec3, vel: Vec3, m: f64) -> Self {
        Self {
            pos,
            vel,
            m,
            ..Self::default()
        }
    }

    /// A massless particle at rest at `(x, y, z)`.
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self::new(Vec3::new(x, y, z), Vec3::ZERO, 0.0)
    }

    /// Set the radius.
    pub fn with_radius(mut self, r: f64) -> Self {
        self.r = r;
        self
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: impl Into<ParticleId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the mass.
    pub fn with_mass(mut self, m: f64) -> Self {
        self.m = m;
        self
    }

    /// Attach auxiliary data.
    pub fn with_aux(mut self, aux: AuxHandle) -> Self {
        self.aux = Some(aux);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let p = Particle::at(1.0, 2.0, 3.0)
            .with_mass(5.0)
            .with_radius(0.5)
            .with_id(9u32);
        assert_eq!(p.pos, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p.vel, Vec3::ZERO);
        assert_eq!(p.m, 5.0);
        assert_eq!(p.r, 0.5);
        assert_eq!(p.id, ParticleId(9));
    }

    #[test]
    fn aux_equality_is_identity() {
        let a = AuxHandle::new(42u32);
        let b = a.clone();
        let c = AuxHandle::new(42u32);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.downcast_ref::<u32>(), Some(&42));
        assert!(a.downcast_ref::<f64>().is_none());
    }

    #[test]
    fn vec3_finiteness() {
        assert!(Vec3::new(1.0, -2.0, 0.0).is_finite());
        assert!(!Vec3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert_eq!(Vec3::from([1.0, 2.0, 3.0]).to_array(), [1.0, 2.0, 3.0]);
    }
}
