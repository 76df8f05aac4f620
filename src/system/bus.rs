//! Shared channel infrastructure between system threads.
//!
//! The `SystemBus` is the communication hub between the host (input and
//! rendering) and the logic thread that owns the gameplay session.

use crate::shared::messages::{CoreEvent, HostEvent};
use crate::shared::snapshot::GameplaySnapshot;
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Aggregates the cross-thread communication channels.
///
/// - Host events (key presses, force end, restart) into the logic thread
/// - Core events (spawns, removals, judgements, session end) out of it
/// - Render snapshots, at most two frames queued
#[derive(Clone)]
pub struct SystemBus {
    /// Host → Logic: input and lifecycle requests.
    pub host_tx: Sender<HostEvent>,
    pub host_rx: Receiver<HostEvent>,

    /// Logic → Host: gameplay events in emission order.
    pub event_tx: Sender<CoreEvent>,
    pub event_rx: Receiver<CoreEvent>,

    /// Logic → Render: gameplay snapshots.
    pub render_tx: Sender<GameplaySnapshot>,
    pub render_rx: Receiver<GameplaySnapshot>,

    /// Set once every thread should wind down.
    pub shutdown: Arc<AtomicBool>,
}

impl SystemBus {
    /// Creates a new system bus with all channels initialized.
    pub fn new() -> Self {
        let (host_tx, host_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();

        // Bounded render channel: max 2 frames queued to limit latency
        let (render_tx, render_rx) = bounded(2);

        Self {
            host_tx,
            host_rx,
            event_tx,
            event_rx,
            render_tx,
            render_rx,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn request_shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new()
    }
}
