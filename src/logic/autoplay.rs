//! Demo input source that plays the session from render snapshots.
//!
//! Each note gets a press offset drawn once around the judgement line; a small
//! share of notes is left alone on purpose so misses show up too.

use crate::models::engine::NoteId;
use crate::shared::messages::HostEvent;
use crate::shared::snapshot::GameplaySnapshot;
use crate::system::bus::SystemBus;
use crossbeam_channel::RecvTimeoutError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct AutoplayConfig {
    /// Largest distance from the line the bot aims at.
    pub jitter: f64,
    /// Probability of ignoring a note entirely.
    pub miss_chance: f64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            jitter: 50.0,
            miss_chance: 0.1,
        }
    }
}

pub struct Autoplay {
    config: AutoplayConfig,
    rng: StdRng,
    /// Planned press distance per note; `None` means the note is skipped.
    plans: HashMap<NoteId, Option<f64>>,
}

impl Autoplay {
    pub fn new(config: AutoplayConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng,
            plans: HashMap::new(),
        }
    }

    /// Returns the lanes to press for this snapshot.
    pub fn decide(&mut self, snapshot: &GameplaySnapshot) -> Vec<usize> {
        if !snapshot.state.is_playing() {
            self.plans.clear();
            return Vec::new();
        }

        self.plans
            .retain(|id, _| snapshot.notes.iter().any(|n| n.id == *id));

        let mut lanes = Vec::new();
        for note in &snapshot.notes {
            let config = self.config;
            let rng = &mut self.rng;
            let plan = self.plans.entry(note.id).or_insert_with(|| {
                if rng.random_bool(config.miss_chance.clamp(0.0, 1.0)) {
                    None
                } else {
                    Some(rng.random_range(-config.jitter..=config.jitter))
                }
            });

            if let Some(target) = *plan {
                if note.distance >= target {
                    lanes.push(note.lane);
                    // Pressed once; keep the entry so the note is not pressed again.
                    *plan = None;
                }
            }
        }
        lanes
    }
}

/// Spawns the autoplay thread. It stops when the bus shuts down or the logic
/// thread goes away.
pub fn start_thread(bus: SystemBus, mut autoplay: Autoplay) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("Autoplay Thread".to_string())
        .spawn(move || {
            log::info!("HOST: Autoplay started");

            while !bus.is_shutting_down() {
                let snapshot = match bus.render_rx.recv_timeout(Duration::from_millis(50)) {
                    Ok(snapshot) => snapshot,
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => break,
                };

                for lane in autoplay.decide(&snapshot) {
                    if bus.host_tx.send(HostEvent::LaneKeyDown { lane }).is_err() {
                        log::error!("HOST: Failed to send key press (Logic thread died?)");
                        return;
                    }
                }
            }

            log::info!("HOST: Autoplay stopped");
        })
}
