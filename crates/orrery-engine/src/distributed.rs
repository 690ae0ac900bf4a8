//! Ownership gates for distributed runs.
//!
//! Both gates decide ownership through a [`DomainPartition`] and differ
//! only in where outgoing particles go:
//!
//! - [`QueuedTransfer`] keeps per-destination send queues that the
//!   transport drains through a [`SendQueues`] handle between steps.
//! - [`ChannelTransfer`] pushes each [`Transfer`] onto a
//!   `crossbeam-channel` sender owned by a communication thread.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossbeam_channel::{Receiver, Sender};
use indexmap::IndexMap;
use orrery_core::{CellId, OwnershipGate, Particle, ProcessId};
use orrery_space::DomainPartition;

/// A particle bound for another process.
#[derive(Clone, Debug, PartialEq)]
pub struct Transfer {
    /// Destination rank.
    pub process: ProcessId,
    /// The particle, exactly as passed to `add`.
    pub particle: Particle,
}

// ── QueuedTransfer ─────────────────────────────────────────────────

type Queues = IndexMap<ProcessId, Vec<Particle>>;

/// Gate that buffers outgoing particles per destination.
///
/// Destinations keep first-enqueued order, so draining is deterministic
/// for a deterministic sequence of `add` calls.
pub struct QueuedTransfer {
    partition: DomainPartition,
    queues: Arc<Mutex<Queues>>,
}

/// Shared handle onto a [`QueuedTransfer`]'s send queues.
#[derive(Clone)]
pub struct SendQueues {
    queues: Arc<Mutex<Queues>>,
}

impl QueuedTransfer {
    /// Create a gate and the handle the transport drains it through.
    pub fn new(partition: DomainPartition) -> (Self, SendQueues) {
        let queues = Arc::new(Mutex::new(IndexMap::new()));
        let handle = SendQueues {
            queues: Arc::clone(&queues),
        };
        (Self { partition, queues }, handle)
    }
}

impl OwnershipGate for QueuedTransfer {
    fn local_process(&self) -> ProcessId {
        self.partition.local()
    }

    fn owner_process(&self, cell: CellId) -> ProcessId {
        self.partition.owner(cell)
    }

    fn enqueue_for_transfer(&mut self, particle: Particle, process: ProcessId) {
        lock(&self.queues).entry(process).or_default().push(particle);
    }
}

impl SendQueues {
    /// Total particles waiting across all destinations.
    pub fn pending(&self) -> usize {
        lock(&self.queues).values().map(Vec::len).sum()
    }

    /// Particles waiting for `process`.
    pub fn pending_for(&self, process: ProcessId) -> usize {
        lock(&self.queues).get(&process).map_or(0, Vec::len)
    }

    /// Take every queue, in first-enqueued destination order.
    pub fn drain(&self) -> Vec<(ProcessId, Vec<Particle>)> {
        lock(&self.queues).drain(..).collect()
    }
}

fn lock(queues: &Mutex<Queues>) -> MutexGuard<'_, Queues> {
    // Queues hold plain data; a panic mid-push leaves them usable.
    queues.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── ChannelTransfer ────────────────────────────────────────────────

/// Gate that forwards outgoing particles over a channel.
pub struct ChannelTransfer {
    partition: DomainPartition,
    sender: Sender<Transfer>,
}

impl ChannelTransfer {
    /// Create a gate over an unbounded channel and return its receiver.
    pub fn new(partition: DomainPartition) -> (Self, Receiver<Transfer>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self::with_sender(partition, sender), receiver)
    }

    /// Create a gate feeding an existing sender.
    pub fn with_sender(partition: DomainPartition, sender: Sender<Transfer>) -> Self {
        Self { partition, sender }
    }
}

impl OwnershipGate for ChannelTransfer {
    fn local_process(&self) -> ProcessId {
        self.partition.local()
    }

    fn owner_process(&self, cell: CellId) -> ProcessId {
        self.partition.owner(cell)
    }

    fn enqueue_for_transfer(&mut self, particle: Particle, process: ProcessId) {
        let id = particle.id;
        if self.sender.send(Transfer { process, particle }).is_err() {
            tracing::warn!(
                particle = %id,
                process = %process,
                "transfer channel disconnected; particle dropped"
            );
        }
    }
}
