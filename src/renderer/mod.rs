//! Scene extraction for the mesh renderer
//!
//! Turns a `GameState` into a flat list of [`Instance`] records each frame.
//! The GPU side (pipelines, textures, text) lives in the host application;
//! this module only decides what is visible and where.

pub mod instance;

pub use instance::{Instance, MeshKind, colors};

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use crate::consts::*;
use crate::sim::{Body, EntityKind, GameState};

pub const MONSTER_SCALE: f32 = 2.0;
pub const BOSS_SCALE: f32 = 10.0;
pub const SPACESHIP_SCALE: f32 = 5.0;
pub const PIECE_SCALE: f32 = 0.4;
pub const PROJECTILE_SCALE: f32 = 0.025;
/// Debug sphere radius drawn around the spaceship trigger
pub const SPACESHIP_HITBOX_SCALE: f32 = 2.0;
/// Debug sphere radius drawn around each capsule
pub const CAPSULE_HITBOX_SCALE: f32 = 1.0;

const GROUND_POSITION: Vec3 = Vec3::new(0.0, -1.0, 0.0);
const LIBERTY_POSITION: Vec3 = Vec3::new(-60.0, 10.0, -60.0);
const MOUNT_POSITION: Vec3 = Vec3::new(55.0, 18.0, 30.0);
const TREE_POSITION: Vec3 = Vec3::new(-40.0, 8.0, 60.0);
const ROCK_OFFSET: f32 = 98.0;

/// Static set dressing: ground, landmarks and the corner rocks
fn scenery(out: &mut Vec<Instance>) {
    out.push(Instance::new(
        MeshKind::Ground,
        GROUND_POSITION,
        Vec3::new(100.0, 1.0, 100.0),
        0.0,
    ));
    out.push(Instance::uniform(MeshKind::Liberty, LIBERTY_POSITION, 10.0).with_yaw(PI * 0.75));
    out.push(Instance::uniform(MeshKind::Mount, MOUNT_POSITION, 20.0));
    out.push(Instance::uniform(MeshKind::Tree, TREE_POSITION, 10.0));

    // One rock per map corner, each a little bigger and higher than the last
    let corners = [(1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (-1.0, -1.0)];
    for (i, (sx, sz)) in corners.into_iter().enumerate() {
        let i = i as f32;
        let position = Vec3::new(sx * ROCK_OFFSET, 0.6 * i, sz * ROCK_OFFSET);
        out.push(Instance::uniform(MeshKind::Rock, position, 2.0 + i).with_yaw(PI / 2.0 * (i + 1.0)));
    }

    // The ending shot looks at a second statue far below the map
    out.push(Instance::uniform(MeshKind::Statue, ENDING_LOOK_TARGET, 1.0));
}

/// Mesh instance for one scene entity; `None` for entities with no mesh
fn mesh_for(body: &dyn Body, spin: f32) -> Option<Instance> {
    let at = body.position();
    let instance = match body.kind() {
        // The camera sits inside the player; the skybox follows it instead
        EntityKind::Player => return None,
        EntityKind::Projectile => Instance::uniform(MeshKind::Projectile, at, PROJECTILE_SCALE),
        EntityKind::Monster => {
            Instance::uniform(MeshKind::Monster, at, MONSTER_SCALE).with_yaw(body.facing())
        }
        EntityKind::FlyingMonster => {
            Instance::uniform(MeshKind::FlyingMonster, at, 1.0).with_yaw(body.facing())
        }
        EntityKind::Boss => Instance::uniform(MeshKind::Boss, at, BOSS_SCALE).with_yaw(body.facing()),
        EntityKind::Spaceship => {
            Instance::uniform(MeshKind::Spaceship, at, SPACESHIP_SCALE).with_yaw(PI * 0.75)
        }
        EntityKind::Piece => Instance::uniform(MeshKind::Piece, at, PIECE_SCALE).with_yaw(spin),
        EntityKind::Capsule => {
            Instance::uniform(MeshKind::Capsule, at, body.radius()).with_yaw(spin)
        }
        EntityKind::Statue => Instance::uniform(MeshKind::Statue, at, 1.0),
    };
    Some(instance)
}

/// Translucent collision sphere for the entities that show one
fn hitbox_for(body: &dyn Body) -> Option<Instance> {
    let radius = match body.kind() {
        EntityKind::Monster | EntityKind::Boss | EntityKind::Statue => body.radius(),
        EntityKind::Spaceship => SPACESHIP_HITBOX_SCALE,
        EntityKind::Capsule => CAPSULE_HITBOX_SCALE,
        EntityKind::Player
        | EntityKind::Projectile
        | EntityKind::FlyingMonster
        | EntityKind::Piece => return None,
    };
    Some(Instance::hitbox(body.hitbox(), radius))
}

/// Everything to draw this frame, in a stable order.
///
/// Dead, spent and collected entities are skipped. With `show_hitboxes`
/// the collision spheres are appended as translucent instances.
pub fn build_instances(state: &GameState, show_hitboxes: bool) -> Vec<Instance> {
    let mut out = Vec::with_capacity(64);
    let spin = (state.elapsed_secs as f32) % TAU;

    out.push(Instance::uniform(MeshKind::Skybox, state.player.position, 1.0));
    scenery(&mut out);

    let live: Vec<&dyn Body> = state.bodies().filter(|b| b.is_active()).collect();
    out.extend(live.iter().filter_map(|body| mesh_for(*body, spin)));

    if show_hitboxes {
        out.extend(live.iter().filter_map(|body| hitbox_for(*body)));
    }

    out
}
