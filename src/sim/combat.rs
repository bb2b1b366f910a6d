//! Collision and combat resolution
//!
//! Runs after the player's move for the frame has been computed. The order
//! of the checks in [`resolve_player_collisions`] decides precedence when
//! several things happen in the same frame.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{Body, Capsule, Player, Projectile};
use super::geometry::{point_in_sphere, point_side_of_plane, sphere_sphere_intersect};
use super::state::{GamePhase, GameState, Message, MessageBoard};
use super::tick::TickInput;
use crate::consts::*;

/// Capsule rewards, drawn uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Upgrade {
    ExtraLife,
    DamageUp,
    SpeedUp,
}

impl Upgrade {
    /// Uniform draw over the three rewards
    pub fn roll(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..3) {
            0 => Upgrade::ExtraLife,
            1 => Upgrade::DamageUp,
            _ => Upgrade::SpeedUp,
        }
    }

    pub fn apply(self, player: &mut Player) {
        match self {
            Upgrade::ExtraLife => player.lives += 1,
            Upgrade::DamageUp => player.damage += 1,
            Upgrade::SpeedUp => player.speed += 1.0,
        }
    }

    pub fn message(self) -> Message {
        match self {
            Upgrade::ExtraLife => Message::ExtraLife,
            Upgrade::DamageUp => Message::DamageUp,
            Upgrade::SpeedUp => Message::SpeedUp,
        }
    }
}

/// What happened when the buy key was held at a capsule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    Bought(Upgrade),
    /// Not enough points; the insufficient-points banner went up
    Insufficient,
    /// A banner is still up, so the capsule ignored the request
    Throttled,
}

/// Attempt to buy from `capsule`.
///
/// Nothing happens while the gate is closed. Otherwise either a random
/// upgrade is bought (price deducted, next price raised) or the
/// insufficient-points banner is shown; both close the gate.
pub fn try_purchase(
    player: &mut Player,
    capsule: &mut Capsule,
    messages: &mut MessageBoard,
    rng: &mut Pcg32,
    now: f64,
) -> Purchase {
    if !messages.can_buy {
        return Purchase::Throttled;
    }
    if player.points < capsule.price {
        messages.show(Message::InsufficientPoints, now);
        return Purchase::Insufficient;
    }

    let upgrade = Upgrade::roll(rng);
    player.points -= capsule.price;
    upgrade.apply(player);
    capsule.price += CAPSULE_PRICE_STEP;
    messages.show(upgrade.message(), now);
    log::info!(
        "Bought {:?}; {} points left, next price {}",
        upgrade,
        player.points,
        capsule.price
    );
    Purchase::Bought(upgrade)
}

/// Resolve everything the player's new position touches.
///
/// `previous` is the position before this frame's movement.
pub fn resolve_player_collisions(state: &mut GameState, input: &TickInput, previous: Vec3) {
    // Ground: hold the camera height rather than letting it change
    if point_side_of_plane(state.player.position, Vec3::Y) {
        state.player.position.y = previous.y;
    }

    // Monster contact: lose a life and get shoved off the monster
    for i in 0..state.monsters.len() {
        let monster = &state.monsters[i];
        if monster.lives > 0
            && point_in_sphere(state.player.position, monster.position, monster.radius)
        {
            state.player.lives -= 1;
            log::debug!("Monster contact, {} lives left", state.player.lives);
            if state.player.lives <= 0 {
                state.player.alive = false;
                state.finish(GamePhase::GameOver);
            }
            state.player.position.x = previous.x + CONTACT_KNOCKBACK.x;
            state.player.position.z = previous.z + CONTACT_KNOCKBACK.z;
        }
    }

    for piece in &mut state.pieces {
        if !piece.collected && piece.contains_point(state.player.position) && piece.collect() {
            state.pieces_collected += 1;
            log::info!("Piece collected ({}/{})", state.pieces_collected, PIECE_COUNT);
        }
    }

    for capsule in &mut state.capsules {
        capsule.overlapping = capsule.in_reach(state.player.position);
        if capsule.overlapping && input.buy {
            try_purchase(
                &mut state.player,
                capsule,
                &mut state.messages,
                &mut state.rng,
                input.now,
            );
        }
    }

    if state.statue.present && state.statue.contains_point(state.player.position) {
        state.statue.present = false;
        log::debug!("Statue knocked over");
    }

    if state.spaceship.contains_point(state.player.position)
        && !state.boss.is_alive()
        && state.pieces_collected == PIECES_TO_WIN
    {
        state.finish(GamePhase::Won);
    }

    if state.boss.lives > 0 && state.spaceship.touches(&state.boss) {
        log::info!("Boss reached the spaceship");
        state.finish(GamePhase::GameOver);
    }
}

/// Fire one round along the current view; returns false with an empty magazine
pub fn fire(state: &mut GameState) -> bool {
    if state.player.shots == 0 {
        return false;
    }
    let velocity = state.camera.view * PROJECTILE_SPEED_FACTOR;
    state
        .projectiles
        .push(Projectile::new(state.player.position, velocity));
    state.player.shots -= 1;
    true
}

pub fn reload(state: &mut GameState) {
    state.player.shots = MAX_SHOTS;
}

/// Move rounds in flight and resolve their hits.
///
/// Rounds spent on an earlier frame are compacted away first; rounds spent
/// this frame stay in the list, inactive, until the next call.
pub fn advance_projectiles(state: &mut GameState, dt: f32) {
    state.projectiles.retain(|p| p.active);

    let GameState {
        projectiles,
        monsters,
        boss,
        player,
        ..
    } = state;

    for shot in projectiles.iter_mut() {
        shot.position += shot.velocity * dt;

        // Out of range rounds retire but still resolve this frame's hits
        if player.position.distance(shot.position) > PROJECTILE_RANGE {
            shot.active = false;
        }

        for monster in monsters.iter_mut().filter(|m| m.is_active()) {
            if sphere_sphere_intersect(shot.position, shot.radius, monster.hitbox, monster.radius) {
                shot.active = false;
                if monster.take_hit(player.damage) {
                    player.points += MONSTER_KILL_POINTS;
                    log::debug!("Monster killed, points {}", player.points);
                }
            }
        }

        if boss.lives > 0 && sphere_sphere_intersect(shot.position, shot.radius, boss.position, boss.radius) {
            shot.active = false;
            if boss.take_hit(player.damage) {
                log::info!("Boss defeated");
            }
        }
    }
}
