//! Error types for geometry and partition construction.

use std::fmt;

/// Errors arising from building a box geometry or a domain partition.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// The root cell size is NaN, infinite, zero or negative.
    InvalidRootSize {
        /// The rejected value.
        value: f64,
    },
    /// One of the per-axis root cell counts is zero.
    EmptyGrid {
        /// Name of the offending axis.
        axis: &'static str,
    },
    /// The total number of root cells does not fit in a `u32`.
    CellCountOverflow {
        /// The requested per-axis counts.
        counts: [u32; 3],
    },
    /// A partition was requested over zero processes.
    NoProcesses,
    /// The root cells cannot be split evenly across the processes.
    UnevenPartition {
        /// Total number of root cells.
        cells: u32,
        /// Number of processes.
        processes: u32,
    },
    /// The local rank is not one of the partition's processes.
    ProcessOutOfRange {
        /// The offending rank.
        process: u32,
        /// Number of processes.
        processes: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRootSize { value } => {
                write!(f, "root size must be finite and positive, got {value}")
            }
            Self::EmptyGrid { axis } => write!(f, "root grid has zero cells along {axis}"),
            Self::CellCountOverflow { counts } => write!(
                f,
                "root grid {}x{}x{} exceeds u32::MAX cells",
                counts[0], counts[1], counts[2]
            ),
            Self::NoProcesses => write!(f, "partition needs at least one process"),
            Self::UnevenPartition { cells, processes } => write!(
                f,
                "{cells} root cells cannot be split evenly across {processes} processes"
            ),
            Self::ProcessOutOfRange { process, processes } => {
                write!(f, "process {process} out of range for {processes} processes")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
