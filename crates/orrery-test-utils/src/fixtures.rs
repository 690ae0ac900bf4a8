//! Deterministic particle fixtures.
//!
//! - [`line`]: `n` particles along the x axis with sequential IDs.
//! - [`random_cloud`]: seeded uniform cloud inside a box, every field
//!   populated.

use orrery_core::{Particle, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n` unit-mass particles at `x = 0, 1, 2, ...` with IDs `0..n`.
pub fn line(n: u32) -> Vec<Particle> {
    (0..n)
        .map(|i| {
            Particle::at(f64::from(i), 0.0, 0.0)
                .with_mass(1.0)
                .with_id(i)
        })
        .collect()
}

/// `n` particles uniformly distributed in `[-half, half)` on every axis.
///
/// IDs are `0..n`; velocity, mass and radius are random too. The same
/// seed always produces the same cloud.
pub fn random_cloud(n: u32, half: f64, seed: u64) -> Vec<Particle> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| random_particle(&mut rng, half).with_id(i))
        .collect()
}

fn random_particle(rng: &mut ChaCha8Rng, half: f64) -> Particle {
    let coord = |rng: &mut ChaCha8Rng| rng.random_range(-half..half);
    let pos = Vec3::new(coord(rng), coord(rng), coord(rng));
    let vel = Vec3::new(
        rng.random_range(-1.0..1.0),
        rng.random_range(-1.0..1.0),
        rng.random_range(-1.0..1.0),
    );
    Particle::new(pos, vel, rng.random_range(1e-6..1.0))
        .with_radius(rng.random_range(1e-4..1e-2))
}
