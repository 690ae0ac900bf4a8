//! Spatial geometry for Orrery simulations.
//!
//! This crate owns everything that maps a position to a place:
//!
//! - [`BoxGeometry`]: the simulated box and its periodic root grid.
//! - [`root_box_for_position`]: the decomposition indexer that turns a
//!   position into a [`CellId`](orrery_core::CellId). Every process of a
//!   distributed run must agree on its output, so it is a pure function
//!   of its inputs.
//! - [`BoundaryCondition`] and the built-in [`Boundary`] predicates that
//!   decide whether a position is inside the simulated volume.
//! - [`DomainPartition`]: the cell-to-process mapping used for
//!   distributed ownership.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod root_grid;

pub use boundary::{Boundary, BoundaryCondition};
pub use domain::DomainPartition;
pub use error::SpaceError;
pub use geometry::BoxGeometry;
pub use root_grid::{cell_coords, root_box_for_position};
