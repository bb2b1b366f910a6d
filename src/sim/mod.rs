//! Game simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - Wall-clock time arrives as a number on `TickInput`
//! - Randomness comes from the session's seeded RNG
//! - Entity collections are iterated in a fixed order

pub mod ai;
pub mod camera;
pub mod combat;
pub mod entities;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod timers;

pub use camera::{CameraBasis, CameraMode, CameraRig};
pub use combat::{Purchase, Upgrade};
pub use entities::{
    Body, Boss, BossPhase, Capsule, EntityKind, FlyingMonster, Monster, PatrolLeg, Piece, Player,
    Projectile, Spaceship, Statue,
};
pub use geometry::{bezier_cubic, point_in_sphere, point_side_of_plane, sphere_sphere_intersect};
pub use state::{GamePhase, GameState, HudSnapshot, Message, MessageBoard};
pub use tick::{TickInput, tick};
pub use timers::{Deadline, FrameCountdown};
