//! First-person camera and movement resolution
//!
//! The camera sits at the player's position. In free look its view vector
//! comes from spherical angles driven by pointer motion. During the boss
//! cutscene the view is forced onto the boss, and on a terminal outcome it
//! is forced onto a fixed off-world point for the ending shot.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::state::GameState;
use super::tick::TickInput;
use crate::consts::*;
use crate::spherical_to_cartesian;

/// Pointer radians per pixel unless overridden by settings
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.01;
/// Distance per scroll unit unless overridden by settings
pub const DEFAULT_ZOOM_SENSITIVITY: f32 = 0.9;

/// Vertical look limit; keeps the view off the up axis
pub const PHI_LIMIT: f32 = std::f32::consts::FRAC_PI_2;

/// Who controls the view direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Pointer-driven spherical angles
    #[default]
    FreeLook,
    /// Staring at the boss for the cutscene; pointer input is ignored
    LockedOnBoss,
}

/// Unit movement axes derived from the view vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

/// Camera angles, mode and the state saved across the boss cutscene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRig {
    /// Yaw in the ZX plane
    pub theta: f32,
    /// Elevation, clamped to [-PHI_LIMIT, PHI_LIMIT]
    pub phi: f32,
    /// Length of the free-look view vector (scroll zoom)
    pub distance: f32,
    pub mode: CameraMode,
    /// View vector used this frame (not normalized)
    pub view: Vec3,
    pub mouse_sensitivity: f32,
    pub zoom_sensitivity: f32,
    saved_view: Vec3,
    saved_position: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        let mut rig = Self {
            theta: CAMERA_START_THETA,
            phi: CAMERA_START_PHI,
            distance: CAMERA_START_DISTANCE,
            mode: CameraMode::FreeLook,
            view: Vec3::ZERO,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            saved_view: Vec3::ZERO,
            saved_position: PLAYER_START,
        };
        rig.view = rig.free_look_vector();
        rig
    }
}

impl CameraRig {
    pub fn is_locked(&self) -> bool {
        self.mode == CameraMode::LockedOnBoss
    }

    /// Turn the camera by a pointer delta in pixels (ignored while locked)
    pub fn apply_pointer_delta(&mut self, delta: Vec2) {
        if self.is_locked() {
            return;
        }
        self.theta += self.mouse_sensitivity * delta.x;
        self.phi = (self.phi - self.mouse_sensitivity * delta.y).clamp(-PHI_LIMIT, PHI_LIMIT);
    }

    /// Move the camera in or out; the distance never reaches zero
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance - self.zoom_sensitivity * scroll).max(f32::EPSILON);
    }

    /// View vector implied by the spherical angles
    pub fn free_look_vector(&self) -> Vec3 {
        spherical_to_cartesian(self.distance, self.theta, self.phi)
    }

    /// Movement axes for the current view, re-normalized every call
    pub fn basis(&self) -> CameraBasis {
        let w = -self.view;
        let right = Vec3::Y.cross(w).normalize_or_zero();
        CameraBasis {
            forward: self.view.normalize_or_zero(),
            right,
        }
    }

    /// Engage the boss cutscene lock
    pub fn lock_on_boss(&mut self) {
        if !self.is_locked() {
            log::info!("Camera locked on boss");
        }
        self.mode = CameraMode::LockedOnBoss;
    }

    /// Drop the lock and hand back the view and position saved when it began
    fn release(&mut self) -> Vec3 {
        self.mode = CameraMode::FreeLook;
        self.view = self.saved_view;
        log::info!("Camera lock released");
        self.saved_position
    }
}

/// Resolve this frame's view vector and move the player.
///
/// Returns the player position from before any movement was applied, which
/// the collision pass uses to undo or knock back the move.
pub fn update_camera(state: &mut GameState, input: &TickInput, dt: f32) -> Vec3 {
    let terminal = state.phase.is_terminal();

    state.camera.apply_pointer_delta(input.pointer_delta);
    state.camera.zoom(input.scroll);

    if terminal {
        state.camera.view = ENDING_LOOK_TARGET - state.player.position;
    } else if state.camera.is_locked() && state.cutscene.is_finished() {
        state.player.position = state.camera.release();
    } else if state.camera.is_locked() {
        state.camera.saved_view = state.camera.free_look_vector();
        state.camera.view = state.boss.position - state.player.position;
    } else {
        state.camera.view = state.camera.free_look_vector();
    }

    let basis = state.camera.basis();

    if terminal && state.ending_teleport_pending {
        state.player.position = ENDING_CAMERA;
        state.ending_teleport_pending = false;
        log::info!("Camera moved to ending shot");
    }

    if state.camera.is_locked() && state.boss_teleport_pending {
        state.camera.saved_position = state.player.position;
        state.player.position = BOSS_CUTSCENE_CAMERA;
        state.boss_teleport_pending = false;
        log::info!("Camera moved to boss cutscene");
    }

    let previous = state.player.position;
    let step = state.player.speed * dt;

    if !state.camera.is_locked() && !terminal {
        let pos = &mut state.player.position;
        if input.forward {
            *pos += basis.forward * step;
        }
        if input.back {
            *pos -= basis.forward * step;
        }
        if input.left {
            *pos -= basis.right * step;
        }
        if input.right {
            *pos += basis.right * step;
        }
    }

    // Cutscene pull-back: drift away from whatever the camera stares at
    let drift = state.camera.view * (CAMERA_DRIFT_FACTOR * step);
    if !state.ending_teleport_pending {
        state.player.position -= drift;
    }
    if state.camera.is_locked() && !state.boss_teleport_pending {
        state.player.position -= drift;
    }

    previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use proptest::prelude::*;

    #[test]
    fn test_default_basis() {
        let rig = CameraRig::default();
        let basis = rig.basis();
        assert!((basis.forward - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert!((basis.right - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_basis_is_orthonormal_when_looking_up() {
        let mut rig = CameraRig::default();
        rig.apply_pointer_delta(Vec2::new(40.0, -1000.0));
        rig.view = rig.free_look_vector();
        let basis = rig.basis();
        assert!((basis.right.length() - 1.0).abs() < 1e-3);
        assert!(basis.right.dot(Vec3::Y).abs() < 1e-5);
    }

    #[test]
    fn test_pointer_ignored_while_locked() {
        let mut rig = CameraRig::default();
        rig.lock_on_boss();
        rig.apply_pointer_delta(Vec2::new(100.0, 100.0));
        assert_eq!(rig.theta, CAMERA_START_THETA);
        assert_eq!(rig.phi, CAMERA_START_PHI);
    }

    #[test]
    fn test_zoom_floors_at_epsilon() {
        let mut rig = CameraRig::default();
        rig.zoom(1000.0);
        assert_eq!(rig.distance, f32::EPSILON);
        assert!(rig.free_look_vector().length() > 0.0);
        rig.zoom(-1.0);
        assert!(rig.distance > 0.8);
    }

    #[test]
    fn test_forward_key_moves_along_view() {
        let mut state = GameState::new(1);
        let start = state.player.position;
        let input = TickInput {
            forward: true,
            ..Default::default()
        };
        let previous = update_camera(&mut state, &input, 0.1);
        assert_eq!(previous, start);
        // speed 10 * dt 0.1 = one unit down -Z
        assert!((state.player.position - (start + Vec3::new(0.0, 0.0, -1.0))).length() < 1e-5);
    }

    #[test]
    fn test_strafe_keys_cancel() {
        let mut state = GameState::new(1);
        let start = state.player.position;
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        update_camera(&mut state, &input, 0.1);
        assert!((state.player.position - start).length() < 1e-5);
    }

    #[test]
    fn test_no_movement_while_locked() {
        let mut state = GameState::new(1);
        state.camera.lock_on_boss();
        state.cutscene.start();
        let input = TickInput {
            forward: true,
            ..Default::default()
        };
        update_camera(&mut state, &input, 0.016);
        // Teleported to the cutscene spot, then only drifting away from the boss
        assert!(!state.boss_teleport_pending);
        let away = (state.player.position - BOSS_CUTSCENE_CAMERA).normalize();
        let to_boss = (state.boss.position - BOSS_CUTSCENE_CAMERA).normalize();
        assert!(away.dot(to_boss) < 0.0);
    }

    #[test]
    fn test_lock_release_restores_position() {
        let mut state = GameState::new(1);
        let home = Vec3::new(3.0, 1.0, 4.0);
        state.player.position = home;
        state.camera.lock_on_boss();
        state.cutscene.start();
        update_camera(&mut state, &TickInput::default(), 0.016);
        assert_ne!(state.player.position, home);

        while !state.cutscene.is_finished() {
            state.cutscene.tick();
        }
        update_camera(&mut state, &TickInput::default(), 0.016);
        assert_eq!(state.camera.mode, CameraMode::FreeLook);
        assert_eq!(state.player.position, home);
    }

    #[test]
    fn test_terminal_teleports_once() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        update_camera(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.player.position, ENDING_CAMERA);
        assert!(!state.ending_teleport_pending);

        // Afterwards the camera drifts instead of snapping back
        update_camera(&mut state, &TickInput::default(), 0.5);
        assert_ne!(state.player.position, ENDING_CAMERA);
        assert!(state.player.position.distance(ENDING_CAMERA) < 1.0);
    }

    proptest! {
        #[test]
        fn prop_phi_stays_clamped(deltas in proptest::collection::vec((-5000.0f32..5000.0, -5000.0f32..5000.0), 1..64)) {
            let mut rig = CameraRig::default();
            for (dx, dy) in deltas {
                rig.apply_pointer_delta(Vec2::new(dx, dy));
                prop_assert!(rig.phi >= -PHI_LIMIT && rig.phi <= PHI_LIMIT);
            }
        }
    }
}
