//! Cell-to-process mapping for distributed runs.

use orrery_core::{CellId, ProcessId};
use smallvec::SmallVec;

use crate::error::SpaceError;
use crate::geometry::BoxGeometry;

/// Even split of the root cells across the processes of a run.
///
/// With `R` root cells and `P` processes, process `p` owns the
/// contiguous block `[p * R / P, (p + 1) * R / P)`. Every process builds
/// the same partition from the same geometry, so ownership agrees
/// everywhere without communication.
///
/// # Examples
///
/// ```
/// use orrery_core::{CellId, ProcessId};
/// use orrery_space::{BoxGeometry, DomainPartition};
///
/// let g = BoxGeometry::new(1.0, 2, 2, 2).unwrap();
/// let part = DomainPartition::for_geometry(&g, 4, ProcessId(0)).unwrap();
/// assert_eq!(part.owner(CellId(5)), ProcessId(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainPartition {
    cell_count: u32,
    process_count: u32,
    cells_per_process: u32,
    local: ProcessId,
}

impl DomainPartition {
    /// Split `cell_count` cells across `process_count` processes, seen
    /// from process `local`.
    ///
    /// Returns `Err(SpaceError::NoProcesses)` for zero processes,
    /// `Err(SpaceError::UnevenPartition)` unless the cells divide evenly,
    /// and `Err(SpaceError::ProcessOutOfRange)` if `local` is not a rank
    /// of this partition.
    pub fn new(cell_count: u32, process_count: u32, local: ProcessId) -> Result<Self, SpaceError> {
        if process_count == 0 {
            return Err(SpaceError::NoProcesses);
        }
        if cell_count < process_count || cell_count % process_count != 0 {
            return Err(SpaceError::UnevenPartition {
                cells: cell_count,
                processes: process_count,
            });
        }
        if local.0 >= process_count {
            return Err(SpaceError::ProcessOutOfRange {
                process: local.0,
                processes: process_count,
            });
        }
        Ok(Self {
            cell_count,
            process_count,
            cells_per_process: cell_count / process_count,
            local,
        })
    }

    /// Partition the root cells of `geometry`.
    pub fn for_geometry(
        geometry: &BoxGeometry,
        process_count: u32,
        local: ProcessId,
    ) -> Result<Self, SpaceError> {
        Self::new(geometry.cell_count(), process_count, local)
    }

    /// Process owning `cell`. Cells past the end belong to the last process.
    pub fn owner(&self, cell: CellId) -> ProcessId {
        ProcessId((cell.0 / self.cells_per_process).min(self.process_count - 1))
    }

    /// Rank of the local process.
    pub fn local(&self) -> ProcessId {
        self.local
    }

    /// `true` if `cell` belongs to the local process.
    pub fn is_local(&self, cell: CellId) -> bool {
        self.owner(cell) == self.local
    }

    /// Number of processes.
    pub fn process_count(&self) -> u32 {
        self.process_count
    }

    /// Total number of root cells.
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// Root cells owned by `process`, ascending.
    pub fn cells_owned_by(&self, process: ProcessId) -> SmallVec<[CellId; 8]> {
        if process.0 >= self.process_count {
            return SmallVec::new();
        }
        let start = process.0 * self.cells_per_process;
        (start..start + self.cells_per_process).map(CellId).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_process_owns_everything() {
        let part = DomainPartition::new(8, 1, ProcessId(0)).unwrap();
        for c in 0..8 {
            assert!(part.is_local(CellId(c)));
        }
        assert_eq!(part.cells_owned_by(ProcessId(0)).len(), 8);
    }

    #[test]
    fn blocks_are_contiguous() {
        let part = DomainPartition::new(8, 2, ProcessId(1)).unwrap();
        assert_eq!(part.owner(CellId(3)), ProcessId(0));
        assert_eq!(part.owner(CellId(4)), ProcessId(1));
        assert_eq!(
            part.cells_owned_by(ProcessId(1)).as_slice(),
            &[CellId(4), CellId(5), CellId(6), CellId(7)]
        );
        assert!(part.cells_owned_by(ProcessId(2)).is_empty());
    }

    #[test]
    fn every_cell_has_exactly_one_owner() {
        let part = DomainPartition::new(12, 3, ProcessId(0)).unwrap();
        let mut seen = 0;
        for p in 0..3 {
            for cell in part.cells_owned_by(ProcessId(p)) {
                assert_eq!(part.owner(cell), ProcessId(p));
                seen += 1;
            }
        }
        assert_eq!(seen, 12);
    }

    #[test]
    fn rejects_invalid_partitions() {
        assert_eq!(
            DomainPartition::new(8, 0, ProcessId(0)),
            Err(SpaceError::NoProcesses)
        );
        assert!(matches!(
            DomainPartition::new(8, 3, ProcessId(0)),
            Err(SpaceError::UnevenPartition { .. })
        ));
        assert!(matches!(
            DomainPartition::new(2, 4, ProcessId(0)),
            Err(SpaceError::UnevenPartition { .. })
        ));
        assert!(matches!(
            DomainPartition::new(8, 2, ProcessId(2)),
            Err(SpaceError::ProcessOutOfRange { .. })
        ));
    }

    #[test]
    fn out_of_range_cell_goes_to_last_process() {
        let part = DomainPartition::new(4, 2, ProcessId(0)).unwrap();
        assert_eq!(part.owner(CellId(99)), ProcessId(1));
    }
}
