//! Deep Rain - first-person arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Per-frame game state update (camera, combat, AI, progression)
//! - `renderer`: Per-entity instance data handed to the GPU layer
//! - `platform`: Host clock and input plumbing
//! - `hud`: Text lines for the heads-up display
//! - `settings`: JSON-loadable preferences

pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, Settings};

use glam::Vec3;

/// World and gameplay constants
pub mod consts {
    use glam::Vec3;

    /// Fixed step used by the headless runner and tests (seconds)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Player spawn point (camera height 1 above the ground plane)
    pub const PLAYER_START: Vec3 = Vec3::new(0.0, 1.0, 2.0);
    pub const PLAYER_SPEED: f32 = 10.0;
    pub const PLAYER_LIVES: i32 = 3;
    pub const PLAYER_DAMAGE: i32 = 1;
    /// Fixed knockback applied from the pre-move position on monster contact
    pub const CONTACT_KNOCKBACK: Vec3 = Vec3::new(2.0, 0.0, 2.0);

    /// Magazine size
    pub const MAX_SHOTS: u32 = 6;
    pub const PROJECTILE_RADIUS: f32 = 0.25;
    /// Shot velocity is this multiple of the camera view vector
    pub const PROJECTILE_SPEED_FACTOR: f32 = 10.0;
    /// Shots farther than this from the player are retired
    pub const PROJECTILE_RANGE: f32 = 60.0;

    pub const MONSTER_SPAWNS: [Vec3; 10] = [
        Vec3::new(-50.0, 0.6, 0.0),
        Vec3::new(-30.0, 0.6, -30.0),
        Vec3::new(-5.0, 0.6, -50.0),
        Vec3::new(-10.0, 0.6, 30.0),
        Vec3::new(-50.0, 0.6, 50.0),
        Vec3::new(30.0, 0.6, -40.0),
        Vec3::new(40.0, 0.6, -50.0),
        Vec3::new(30.0, 0.6, 40.0),
        Vec3::new(35.0, 0.6, 35.0),
        Vec3::new(50.0, 0.6, 50.0),
    ];
    pub const MONSTER_SPEED: f32 = 2.0;
    pub const MONSTER_RADIUS: f32 = 1.5;
    pub const MONSTER_LIVES: i32 = 3;
    /// Monsters notice the player inside this distance
    pub const AGGRO_RADIUS: f32 = 30.0;
    /// Per-axis dead zone for the chase step
    pub const CHASE_DEADZONE: f32 = 1.0;
    pub const MONSTER_KILL_POINTS: i32 = 50;

    pub const BOSS_SPAWN: Vec3 = Vec3::new(100.0, 11.0, -100.0);
    pub const BOSS_SPEED: f32 = 3.0;
    /// Units per second the boss covers on its way to the spaceship
    pub const BOSS_APPROACH_SPEED: f32 = 5.0;
    pub const BOSS_RADIUS: f32 = 11.0;
    pub const BOSS_LIVES: i32 = 3;
    /// Frames the camera stays locked on the boss after it wakes
    pub const BOSS_CUTSCENE_FRAMES: u32 = 600;
    /// Where the camera is placed for the boss cutscene
    pub const BOSS_CUTSCENE_CAMERA: Vec3 = Vec3::new(90.0, 11.0, -70.0);

    pub const SPACESHIP_POSITION: Vec3 = Vec3::new(0.0, 0.0, 7.5);
    pub const SPACESHIP_RADIUS: f32 = 1.5;
    /// The boarding volume sits beside the hull, not at its origin
    pub const SPACESHIP_HITBOX_OFFSET: Vec3 = Vec3::new(-2.0, 0.0, 2.0);

    pub const PIECE_COUNT: usize = 5;
    pub const PIECE_RADIUS: f32 = 0.8;
    pub const PIECE_HEIGHT: f32 = 0.5;
    /// Collected-piece count that wakes the boss and unlocks the win.
    /// Five pieces spawn but the boarding check fires on the first one.
    pub const PIECES_TO_WIN: u32 = 1;

    pub const CAPSULE_COUNT: usize = 3;
    pub const CAPSULE_RADIUS: f32 = 0.3;
    pub const CAPSULE_HEIGHT: f32 = -0.5;
    /// Extra radius for the "press to buy" interaction volume
    pub const CAPSULE_REACH: f32 = 3.0;
    pub const CAPSULE_BASE_PRICE: i32 = 100;
    pub const CAPSULE_PRICE_STEP: i32 = 100;

    /// Spawn coordinates for pieces and capsules are drawn from [0, this)
    pub const SCATTER_EXTENT: u32 = 100;

    pub const STATUE_POSITION: Vec3 = Vec3::new(55.0, 28.125, 30.0);
    pub const STATUE_RADIUS: f32 = 2.0;

    /// Point the ending camera stares at
    pub const ENDING_LOOK_TARGET: Vec3 = Vec3::new(-500.0, -100.0, -500.0);
    /// Where the camera is placed for the ending shot
    pub const ENDING_CAMERA: Vec3 = Vec3::new(-500.0, -95.0, -492.0);
    /// Fraction of `view * speed` the camera drifts each second in cutscenes
    pub const CAMERA_DRIFT_FACTOR: f32 = 0.01;

    pub const CAMERA_START_THETA: f32 = 0.0;
    pub const CAMERA_START_PHI: f32 = 0.0;
    pub const CAMERA_START_DISTANCE: f32 = 3.5;

    /// Upgrade/insufficient-funds banners stay up this long (wall clock)
    pub const MESSAGE_DURATION_SECS: f64 = 2.0;

    /// Bezier parameter increment per frame for the flying monster
    pub const FLY_T_STEP: f32 = 0.008;
    /// Outbound leg control points
    pub const FLY_LEG_OUT: [Vec3; 4] = [
        Vec3::new(40.0, 10.0, 70.0),
        Vec3::new(52.0, 35.0, 40.0),
        Vec3::new(70.0, 50.0, 70.0),
        Vec3::new(85.0, 20.0, 40.0),
    ];
    /// Return leg control points (closes the loop back to the outbound start)
    pub const FLY_LEG_BACK: [Vec3; 4] = [
        Vec3::new(85.0, 20.0, 40.0),
        Vec3::new(60.0, 35.0, 10.0),
        Vec3::new(20.0, 50.0, 10.0),
        Vec3::new(40.0, 10.0, 70.0),
    ];

    /// Oxygen shown on the HUD counts down from this
    pub const OXYGEN_SECS: f64 = 600.0;
}

/// Point on a sphere of radius `r` around the origin.
///
/// `theta` is measured in the ZX plane from the -Z axis, `phi` is the
/// elevation from that plane. Zero angles look down -Z.
#[inline]
pub fn spherical_to_cartesian(r: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        r * phi.cos() * theta.sin(),
        r * phi.sin(),
        -r * phi.cos() * theta.cos(),
    )
}

/// Yaw (rotation about +Y) that turns a model at `from` to face `to`
#[inline]
pub fn yaw_towards(from: Vec3, to: Vec3) -> f32 {
    -(from.z - to.z).atan2(from.x - to.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spherical_default_looks_down_negative_z() {
        let v = spherical_to_cartesian(1.0, 0.0, 0.0);
        assert!((v - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_spherical_preserves_radius() {
        let v = spherical_to_cartesian(3.5, 1.2, -0.4);
        assert!((v.length() - 3.5).abs() < 1e-5);
    }

    #[test]
    fn test_yaw_towards_is_finite_for_coincident_points() {
        assert!(yaw_towards(Vec3::ONE, Vec3::ONE).is_finite());
    }
}
