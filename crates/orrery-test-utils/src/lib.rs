//! Test utilities and mock collaborators for Orrery development.
//!
//! Provides recording implementations of the collaborator traits
//! ([`SpatialIndex`], [`OwnershipGate`], [`BoundaryCondition`]) whose
//! observations stay readable after the mock is boxed into a simulation,
//! a [`LogCapture`] for asserting on emitted `tracing` events, plus
//! deterministic particle [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::io;
use std::sync::{Arc, Mutex};

use orrery_core::{CellId, OwnershipGate, Particle, ParticleId, ProcessId, SpatialIndex};
use orrery_space::{BoundaryCondition, BoxGeometry};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Spatial index that records every insertion.
///
/// Clone it before boxing; every clone shares the same log.
#[derive(Clone, Default)]
pub struct RecordingIndex {
    log: Arc<Mutex<Vec<(usize, ParticleId)>>>,
}

impl RecordingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(store index, particle id)` for every insertion so far.
    pub fn insertions(&self) -> Vec<(usize, ParticleId)> {
        self.log.lock().unwrap().clone()
    }

    /// Store indices reported so far.
    pub fn indices(&self) -> Vec<usize> {
        self.insertions().into_iter().map(|(i, _)| i).collect()
    }
}

impl SpatialIndex for RecordingIndex {
    fn particle_inserted(&mut self, index: usize, particle: &Particle) {
        self.log.lock().unwrap().push((index, particle.id));
    }
}

/// Ownership gate with a scripted cell-to-process mapping.
///
/// Cells listed in the map go to their mapped process; every other cell
/// belongs to the local process. Transfers are recorded.
#[derive(Clone)]
pub struct ScriptedGate {
    local: ProcessId,
    remote_cells: Vec<(CellId, ProcessId)>,
    sent: Arc<Mutex<Vec<(ProcessId, Particle)>>>,
}

impl ScriptedGate {
    pub fn new(local: ProcessId) -> Self {
        Self {
            local,
            remote_cells: Vec::new(),
            sent: Arc::default(),
        }
    }

    /// Assign `cell` to `process`.
    pub fn with_cell(mut self, cell: CellId, process: ProcessId) -> Self {
        self.remote_cells.push((cell, process));
        self
    }

    /// Every transfer so far, in order.
    pub fn sent(&self) -> Vec<(ProcessId, Particle)> {
        self.sent.lock().unwrap().clone()
    }
}

impl OwnershipGate for ScriptedGate {
    fn local_process(&self) -> ProcessId {
        self.local
    }

    fn owner_process(&self, cell: CellId) -> ProcessId {
        self.remote_cells
            .iter()
            .find(|(c, _)| *c == cell)
            .map_or(self.local, |(_, p)| *p)
    }

    fn enqueue_for_transfer(&mut self, particle: Particle, process: ProcessId) {
        self.sent.lock().unwrap().push((process, particle));
    }
}

/// Boundary that rejects every particle and counts the queries.
#[derive(Clone, Default)]
pub struct RejectAll {
    queries: Arc<Mutex<usize>>,
}

impl RejectAll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queries(&self) -> usize {
        *self.queries.lock().unwrap()
    }
}

impl BoundaryCondition for RejectAll {
    fn is_inside(&self, _particle: &Particle, _geometry: &BoxGeometry) -> bool {
        *self.queries.lock().unwrap() += 1;
        false
    }
}

/// In-memory sink for `tracing` output.
///
/// Build a subscriber with [`subscriber`](Self::subscriber), run the code
/// under `tracing::subscriber::with_default`, then read the lines back.
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text subscriber writing every event at `DEBUG` and above
    /// into this capture.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .finish()
    }

    /// Every captured line.
    pub fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Captured lines at `WARN` level.
    pub fn warnings(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.contains("WARN"))
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
