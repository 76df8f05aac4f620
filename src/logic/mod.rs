//! Logic thread module for session management and updates.
//!
//! This module contains the main game loop that runs at a fixed tick rate
//! and sits between the host's input and rendering sides.

pub mod autoplay;

use crate::core::input::actions::{GameAction, KeyAction};
use crate::core::input::bindings::KeyBindings;
use crate::models::settings::GameSettings;
use crate::shared::messages::HostEvent;
use crate::state::{SessionContext, Snapshot, Update};
use crate::system::bus::SystemBus;
use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Target ticks per second for the logic thread.
const TPS: u64 = 200;

/// What the loop should do after a host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes one host event into the session.
///
/// Key names are resolved through `bindings`; an accepted restart rebuilds
/// them from the session settings.
pub fn dispatch(session: &mut SessionContext, bindings: &mut KeyBindings, event: HostEvent) -> Flow {
    let action = match event {
        HostEvent::LaneKeyDown { lane } => GameAction::Hit(lane),
        HostEvent::FrameTick { dt } => {
            Update::update(session, dt);
            return Flow::Continue;
        }
        HostEvent::KeyDown { key } => match bindings.resolve(&key) {
            KeyAction::Game(action) => action,
            KeyAction::None => {
                log::trace!("LOGIC: Unbound key {}", key);
                return Flow::Continue;
            }
        },
        HostEvent::ForceEnd => GameAction::ForceEnd,
        HostEvent::RestartRequest => GameAction::Restart,
        HostEvent::Quit => return Flow::Quit,
    };

    let was_playing = session.state().is_playing();
    session.handle_input(action);
    if !was_playing && session.state().is_playing() {
        *bindings = KeyBindings::from_settings(session.settings());
    }
    Flow::Continue
}

/// Spawns the logic thread that owns the gameplay session.
///
/// This thread runs a fixed-timestep game loop that:
/// 1. Processes host events (key presses, extra frame ticks, force end, restart)
/// 2. Ticks the session at a fixed rate
/// 3. Forwards core events to the host
/// 4. Sends render snapshots
pub fn start_thread(bus: SystemBus, settings: GameSettings) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("Logic Thread".to_string())
        .spawn(move || {
            log::info!("LOGIC: Thread started");

            let mut session = match SessionContext::new(settings) {
                Ok(session) => session,
                Err(e) => {
                    log::error!("LOGIC: Cannot start session: {}", e);
                    bus.request_shutdown();
                    return;
                }
            };
            let mut bindings = KeyBindings::from_settings(session.settings());

            let mut accumulator = Duration::new(0, 0);
            let mut last_time = Instant::now();
            let target_dt = Duration::from_secs_f64(1.0 / TPS as f64);

            while !bus.is_shutting_down() {
                // 1. Process host events
                while let Ok(event) = bus.host_rx.try_recv() {
                    if dispatch(&mut session, &mut bindings, event) == Flow::Quit {
                        log::info!("LOGIC: Quit received...");
                        return;
                    }
                }

                // 2. Fixed-timestep update loop
                let current_time = Instant::now();
                accumulator += current_time - last_time;
                last_time = current_time;

                let mut loops = 0;
                while accumulator >= target_dt && loops < 10 {
                    Update::update(&mut session, target_dt.as_secs_f64());
                    accumulator -= target_dt;
                    loops += 1;
                }

                // 3. Forward events produced by input and ticks
                for event in session.drain_events() {
                    if bus.event_tx.send(event).is_err() {
                        log::error!("LOGIC: Host event channel closed");
                        return;
                    }
                }

                // 4. Send render snapshot only if we updated
                if loops > 0 {
                    let _ = bus.render_tx.try_send(session.create_snapshot());
                } else {
                    thread::sleep(Duration::from_millis(1));
                }
            }

            log::info!("LOGIC: Thread stopped");
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::engine::SessionState;
    use crate::models::stats::Judgement;
    use crate::shared::messages::CoreEvent;

    fn session() -> SessionContext {
        SessionContext::new(GameSettings {
            seed: Some(1),
            ..GameSettings::new()
        })
        .unwrap()
    }

    #[test]
    fn test_key_names_resolve_to_lanes() {
        let mut session = session();
        let mut bindings = KeyBindings::from_settings(session.settings());
        session.spawn_note(1).unwrap();
        session.advance_notes(500.0);
        session.drain_events();

        let flow = dispatch(
            &mut session,
            &mut bindings,
            HostEvent::KeyDown { key: "KeyF".into() },
        );
        assert_eq!(flow, Flow::Continue);

        let events = session.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            CoreEvent::JudgementOccurred {
                judgement: Judgement::Perfect,
                lane: 1,
                ..
            }
        )));
    }

    #[test]
    fn test_frame_tick_sweeps_overshot_note() {
        let mut session = session();
        let mut bindings = KeyBindings::from_settings(session.settings());
        let id = session.spawn_note(3).unwrap();
        // 90 past the line, beyond the MISS threshold of 80.
        session.advance_notes(590.0);
        session.drain_events();

        let flow = dispatch(&mut session, &mut bindings, HostEvent::FrameTick { dt: 0.0 });
        assert_eq!(flow, Flow::Continue);

        assert!(session.notes().get(id).is_none());
        let events = session.drain_events();
        assert_eq!(events[0], CoreEvent::NoteRemoved { id });
        assert!(matches!(
            events[1],
            CoreEvent::JudgementOccurred {
                judgement: Judgement::Miss,
                lane: 3,
                ..
            }
        ));
        assert_eq!(session.score().hit_stats.miss, 1);
    }

    #[test]
    fn test_escape_then_enter_restarts() {
        let mut session = session();
        let mut bindings = KeyBindings::from_settings(session.settings());

        dispatch(&mut session, &mut bindings, HostEvent::KeyDown { key: "Escape".into() });
        assert_eq!(session.state(), SessionState::Finished);

        dispatch(&mut session, &mut bindings, HostEvent::KeyDown { key: "Enter".into() });
        assert_eq!(session.state(), SessionState::Playing);
    }

    #[test]
    fn test_quit_and_unbound_keys() {
        let mut session = session();
        let mut bindings = KeyBindings::from_settings(session.settings());
        session.drain_events();

        assert_eq!(
            dispatch(&mut session, &mut bindings, HostEvent::KeyDown { key: "KeyZ".into() }),
            Flow::Continue
        );
        assert!(session.drain_events().is_empty());
        assert_eq!(
            dispatch(&mut session, &mut bindings, HostEvent::Quit),
            Flow::Quit
        );
    }
}
