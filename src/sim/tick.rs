//! Per-frame simulation tick
//!
//! Runs the update passes in a fixed order. Later passes see the results of
//! earlier ones within the same frame.

use glam::Vec2;

use super::ai::{update_boss, update_flying_monster, update_monsters};
use super::camera::update_camera;
use super::combat::{advance_projectiles, fire, reload, resolve_player_collisions};
use super::state::{GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement keys (held)
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Buy key held while at a capsule
    pub buy: bool,
    /// Fire pressed this frame (edge)
    pub fire: bool,
    /// Reload pressed this frame (edge)
    pub reload: bool,
    /// Pointer motion in pixels since the last tick
    pub pointer_delta: Vec2,
    /// Scroll units since the last tick
    pub scroll: f32,
    /// Host monotonic clock in seconds; drives the HUD message windows
    pub now: f64,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;
    state.elapsed_secs = input.now;

    let previous = update_camera(state, input, dt);

    if !state.phase.is_terminal() {
        resolve_player_collisions(state, input, previous);
    }

    // Everything but the camera holds still during the boss cutscene
    if !state.camera.is_locked() {
        update_monsters(state, dt);
    }
    update_boss(state, dt);

    if !state.phase.is_terminal() {
        if input.fire {
            fire(state);
        }
        if input.reload {
            reload(state);
        }
        advance_projectiles(state, dt);
    }

    update_flying_monster(state);

    if state.phase == GamePhase::Playing {
        state.messages.expire(input.now);
    }

    state.cutscene.tick();
}
