//! Contiguous particle storage for Orrery simulations.
//!
//! Provides [`ParticleStore`], the dense array that numerically hot loops
//! iterate over. Live particles always occupy indices `[0, len)` with no
//! holes; the backing allocation grows in fixed increments and is only
//! released by an explicit [`clear`](ParticleStore::clear).
//!
//! # Capacity model
//!
//! ```text
//! ParticleStore
//! ├── particles: Vec<Particle>   live slots [0, len)
//! ├── allocated                  tracked capacity, multiple of the increment
//! └── StoreConfig                growth_increment (default 128)
//! ```
//!
//! `allocated` is the capacity the store has committed to, independent
//! of whatever slack the allocator hands back. It only grows in
//! [`ensure_capacity`](ParticleStore::ensure_capacity), which `append`
//! calls before every write, and only shrinks in `clear`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod store;

pub use config::StoreConfig;
pub use store::ParticleStore;
