//! Spawn and end-of-session timers driven by the session clock.
//!
//! The spawn timer is a one-shot that the session re-arms after every firing,
//! each time with a fresh random delay. Re-arming replaces the active handle;
//! `poll` discards any queued entry whose handle is no longer active.

use crate::models::settings::GameSettings;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Identifies one armed timer. Never reused within a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Spawn,
    SessionEnd,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    handle: TimerHandle,
    kind: TimerKind,
    due_ms: f64,
}

pub struct Scheduler {
    rng: StdRng,
    delay_min_ms: f64,
    delay_max_ms: f64,
    session_duration_ms: f64,
    pending: Vec<PendingTimer>,
    spawn_timer: Option<TimerHandle>,
    end_timer: Option<TimerHandle>,
    next_handle: u64,
    /// Time the next spawn delay is measured from.
    cursor_ms: f64,
}

impl Scheduler {
    pub fn new(settings: &GameSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            rng,
            delay_min_ms: settings.spawn_delay_min_ms,
            delay_max_ms: settings.spawn_delay_max_ms,
            session_duration_ms: settings.session_duration_ms,
            pending: Vec::new(),
            spawn_timer: None,
            end_timer: None,
            next_handle: 0,
            cursor_ms: 0.0,
        }
    }

    /// Arms the end-of-session deadline and the first spawn.
    pub fn start(&mut self, now_ms: f64) {
        self.stop();
        self.cursor_ms = now_ms;
        let end = self.arm(TimerKind::SessionEnd, now_ms + self.session_duration_ms);
        self.end_timer = Some(end);
        self.schedule_next();
        log::debug!(
            "SCHEDULER: Started at {:.0}ms, session ends at {:.0}ms",
            now_ms,
            now_ms + self.session_duration_ms
        );
    }

    /// Arms the next spawn after a random delay from the last firing.
    pub fn schedule_next(&mut self) -> TimerHandle {
        let delay = self.rng.random_range(self.delay_min_ms..=self.delay_max_ms);
        let handle = self.arm(TimerKind::Spawn, self.cursor_ms + delay);
        self.spawn_timer = Some(handle);
        handle
    }

    /// Cancels both timers and drops everything still queued. Safe to call
    /// when nothing is armed.
    pub fn stop(&mut self) {
        self.pending.clear();
        if self.spawn_timer.take().is_some() | self.end_timer.take().is_some() {
            log::debug!("SCHEDULER: Stopped");
        }
    }

    /// Pops the earliest active timer due at or before `now_ms`.
    ///
    /// Timers fire one at a time so the caller can re-arm or stop between
    /// firings; a stopped scheduler never yields again.
    pub fn poll(&mut self, now_ms: f64) -> Option<TimerKind> {
        loop {
            let idx = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due_ms <= now_ms)
                .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms))
                .map(|(i, _)| i)?;
            let timer = self.pending.swap_remove(idx);

            let slot = match timer.kind {
                TimerKind::Spawn => &mut self.spawn_timer,
                TimerKind::SessionEnd => &mut self.end_timer,
            };
            if *slot != Some(timer.handle) {
                log::debug!("SCHEDULER: Dropping stale {:?} timer", timer.kind);
                continue;
            }

            *slot = None;
            self.cursor_ms = timer.due_ms;
            return Some(timer.kind);
        }
    }

    /// Uniformly random lane in `0..lane_count`.
    pub fn pick_lane(&mut self, lane_count: usize) -> usize {
        self.rng.random_range(0..lane_count)
    }

    pub fn is_running(&self) -> bool {
        self.spawn_timer.is_some() || self.end_timer.is_some()
    }

    /// Due time of the end-of-session timer, if armed.
    pub fn session_end_ms(&self) -> Option<f64> {
        let handle = self.end_timer?;
        self.pending
            .iter()
            .find(|t| t.handle == handle)
            .map(|t| t.due_ms)
    }

    fn arm(&mut self, kind: TimerKind, due_ms: f64) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(PendingTimer {
            handle,
            kind,
            due_ms,
        });
        handle
    }
}
