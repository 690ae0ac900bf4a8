//! Benchmark profiles for the Orrery particle lifecycle core.
//!
//! - [`reference_profile`]: periodic 4x4x4 root grid (64 cells), tree gravity
//!   off, no ownership gate
//! - [`distributed_profile`]: the same grid split across `processes` ranks
//! - [`reference_positions`]: deterministic positions covering the grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use orrery_core::{ProcessId, Vec3};
use orrery_engine::{ConfigError, QueuedTransfer, SendQueues, SimulationConfig};
use orrery_space::{Boundary, DomainPartition};

/// Width of one root box in the reference profiles.
pub const ROOT_SIZE: f64 = 10.0;

/// Root boxes per axis in the reference profiles.
pub const ROOT_N: u32 = 4;

/// Build the reference profile: a periodic 4x4x4 grid, single process.
pub fn reference_profile() -> Result<SimulationConfig, ConfigError> {
    let mut config = SimulationConfig::with_root_grid(ROOT_SIZE, ROOT_N, ROOT_N, ROOT_N)?;
    config.boundary = Box::new(Boundary::Periodic);
    Ok(config)
}

/// Build the reference profile for rank `local` of `processes`.
///
/// Returns the config together with the send queues the gate fills.
pub fn distributed_profile(
    processes: u32,
    local: u32,
) -> Result<(SimulationConfig, SendQueues), ConfigError> {
    let mut config = reference_profile()?;
    let partition = DomainPartition::for_geometry(&config.geometry, processes, ProcessId(local))?;
    let (gate, queues) = QueuedTransfer::new(partition);
    config.ownership = Some(Box::new(gate));
    Ok((config, queues))
}

/// Generate `n` deterministic positions spread over the reference box.
///
/// A multiplicative hash of `seed` and the index picks each coordinate,
/// so every run of a benchmark sees the same particle layout.
pub fn reference_positions(n: usize, seed: u64) -> Vec<Vec3> {
    let extent = ROOT_SIZE * f64::from(ROOT_N);
    let coord = |i: u64, k: u64| {
        let h = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407))
            .wrapping_add(k.wrapping_mul(2862933555777941757));
        // Top 53 bits as a fraction in [0, 1).
        let unit = (h >> 11) as f64 / (1u64 << 53) as f64;
        (unit - 0.5) * extent
    };
    (0..n as u64)
        .map(|i| Vec3::new(coord(i, 1), coord(i, 2), coord(i, 3)))
        .collect()
}
