//! Application entry point and thread bootstrapper.
//!
//! Runs one headless session: the logic thread owns the game, the autoplay
//! thread presses keys from render snapshots, and the main thread reports
//! core events until the session ends.

use std::path::PathBuf;
use std::process::ExitCode;
use synthstellar::logic;
use synthstellar::logic::autoplay::{Autoplay, AutoplayConfig};
use synthstellar::models::settings::GameSettings;
use synthstellar::shared::messages::{CoreEvent, HostEvent};
use synthstellar::system::bus::SystemBus;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("MAIN: Booting SynthStellar...");

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("synthstellar.toml"));

    let settings = match GameSettings::load(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("MAIN: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let bus = SystemBus::new();
    let autoplay = Autoplay::new(AutoplayConfig::default(), settings.seed);

    let logic_thread = match logic::start_thread(bus.clone(), settings) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("MAIN: Failed to spawn Logic thread: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let autoplay_thread = match logic::autoplay::start_thread(bus.clone(), autoplay) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("MAIN: Failed to spawn Autoplay thread: {}", e);
            bus.request_shutdown();
            let _ = logic_thread.join();
            return ExitCode::FAILURE;
        }
    };

    let mut summary = None;
    while summary.is_none() && !bus.is_shutting_down() {
        let Ok(event) = bus.event_rx.recv_timeout(std::time::Duration::from_millis(100)) else {
            if logic_thread.is_finished() {
                log::error!("MAIN: Logic thread exited before the session ended");
                break;
            }
            continue;
        };
        match event {
            CoreEvent::JudgementOccurred {
                judgement,
                lane,
                cumulative_score,
                combo,
                ..
            } => {
                log::info!(
                    "HOST: {:<7} lane {} | score {:>6} | combo {}",
                    judgement,
                    lane,
                    cumulative_score,
                    combo
                );
            }
            CoreEvent::SessionEnded(result) => summary = Some(result),
            other => log::debug!("HOST: {:?}", other),
        }
    }

    let _ = bus.host_tx.send(HostEvent::Quit);
    bus.request_shutdown();
    let _ = logic_thread.join();
    let _ = autoplay_thread.join();

    match summary.map(|s| serde_json::to_string_pretty(&s)) {
        Some(Ok(json)) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Some(Err(e)) => {
            log::error!("MAIN: Failed to serialize summary: {}", e);
            ExitCode::FAILURE
        }
        None => ExitCode::FAILURE,
    }
}
