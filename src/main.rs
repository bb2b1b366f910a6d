//! Deep Rain - headless native runner
//!
//! Drives the simulation with a scripted input pattern at a fixed step and
//! logs the HUD as it goes. Usage: `deep-rain [settings.json]`.

use deep_rain::consts::SIM_DT;
use deep_rain::hud::hud_lines;
use deep_rain::platform::{FrameClock, InputState, Key};
use deep_rain::renderer::build_instances;
use deep_rain::sim::{GamePhase, GameState, tick};
use deep_rain::{ConfigError, Settings};
use rand::Rng;

/// Frames between HUD log lines
const HUD_LOG_INTERVAL: u64 = 600;
/// Frames to keep running after the session ends (ending shot)
const ENDING_FRAMES: u32 = 120;

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        log::info!("No settings file given, using defaults");
        return Settings::default();
    };

    match Settings::load(&path) {
        Ok(settings) => settings,
        Err(err @ ConfigError::Io { .. }) => {
            log::error!("{err}; using default settings");
            Settings::default()
        }
        Err(err) => {
            log::error!("Ignoring {path}: {err}");
            Settings::default()
        }
    }
}

/// Scripted player: walk a square, sweep the view, shoot and reload
fn script_input(input: &mut InputState, frame: u32) {
    let walking_forward = frame % 240 < 120;
    input.key(Key::Forward, walking_forward);
    input.key(Key::Left, !walking_forward);
    input.key(Key::Buy, true);
    input.pointer_moved(2.0, if frame % 400 < 200 { 0.2 } else { -0.2 });

    if frame % 30 == 0 {
        input.click();
    }
    if frame % 200 == 199 {
        input.key(Key::Reload, true);
        input.key(Key::Reload, false);
    }
}

fn main() {
    env_logger::init();
    log::info!("Deep Rain (headless) starting...");

    let settings = load_settings();
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Session seed {seed}");

    let mut state = GameState::new(seed);
    state.camera.mouse_sensitivity = settings.mouse_sensitivity;
    state.camera.zoom_sensitivity = settings.zoom_sensitivity;

    let mut clock = FrameClock::fixed(SIM_DT);
    let mut input = InputState::default();
    let mut last_phase = state.phase;
    let mut ending_frames = 0;

    for frame in 0..settings.demo_frames {
        script_input(&mut input, frame);
        let (dt, now) = clock.tick();
        let frame_input = input.take_frame(now);
        tick(&mut state, &frame_input, dt.min(settings.max_delta_time));

        let instances = build_instances(&state, settings.show_hitboxes);
        log::trace!("frame {frame}: {} instances", instances.len());

        if state.time_ticks % HUD_LOG_INTERVAL == 0 {
            log::info!("[{:>5}] {}", state.time_ticks, hud_lines(&state.hud()).join(" | "));
        }

        if state.phase != last_phase {
            log::info!("{}", hud_lines(&state.hud()).join(" | "));
            last_phase = state.phase;
        }

        if state.phase != GamePhase::Playing {
            ending_frames += 1;
            if ending_frames >= ENDING_FRAMES {
                break;
            }
        }
    }

    match serde_json::to_string(&state.hud()) {
        Ok(json) => log::info!("Final HUD: {json}"),
        Err(err) => log::warn!("Could not serialize HUD snapshot: {err}"),
    }
}
