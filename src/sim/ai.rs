//! Monster, boss and flyer behaviour

use glam::Vec3;

use super::entities::{Body, BossPhase};
use super::geometry::bezier_cubic_points;
use super::state::GameState;
use crate::consts::*;
use crate::yaw_towards;

/// Frames spent on each flyer leg (`FLY_T_STEP * 125 == 1`)
pub const FLY_STEPS_PER_LEG: u32 = 125;

/// One chase step along a single axis, holding still inside the dead zone
fn chase_axis(current: f32, target: f32, step: f32) -> f32 {
    let delta = target - current;
    if delta > CHASE_DEADZONE {
        current + step
    } else if delta < -CHASE_DEADZONE {
        current - step
    } else {
        current
    }
}

/// Ground monsters: notice the player when close and walk towards them.
///
/// X and Z are stepped independently, so a diagonal chase covers more
/// ground per frame than a straight one.
pub fn update_monsters(state: &mut GameState, dt: f32) {
    let target = state.player.position;

    for monster in state.monsters.iter_mut().filter(|m| m.is_active()) {
        monster.aggro = monster.position.distance(target) < AGGRO_RADIUS;
        if !monster.aggro {
            continue;
        }

        monster.facing = yaw_towards(monster.position, target);
        let step = monster.speed * dt;
        monster.position.x = chase_axis(monster.position.x, target.x, step);
        monster.position.z = chase_axis(monster.position.z, target.z, step);
        monster.hitbox = monster.position;
    }
}

/// Wake the boss once the first piece is in, then march it on the spaceship.
///
/// Waking locks the camera for the cutscene; the boss holds still until the
/// lock is released.
pub fn update_boss(state: &mut GameState, dt: f32) {
    let boss = &mut state.boss;

    let may_wake = !state.phase.is_terminal()
        && boss.phase == BossPhase::Dormant
        && boss.lives > 0
        && state.pieces_collected == PIECES_TO_WIN
        && !state.cutscene.is_finished();
    if may_wake {
        boss.heading = (boss.position - state.spaceship.position).normalize_or_zero();
        boss.facing = -boss.heading.z.atan2(boss.heading.x);
        boss.phase = BossPhase::Approaching;
        state.camera.lock_on_boss();
        state.cutscene.start();
        log::info!("Boss awake at {:?}", boss.position);
    }

    if boss.phase == BossPhase::Approaching && !state.camera.is_locked() {
        let travel = boss.heading * (BOSS_APPROACH_SPEED * dt);
        boss.position -= Vec3::new(travel.x, 0.0, travel.z);
        boss.hitbox = boss.position;
    }
}

/// Advance the flyer one frame along its patrol loop
pub fn update_flying_monster(state: &mut GameState) {
    let flyer = &mut state.flyer;

    flyer.position = bezier_cubic_points(flyer.t(), flyer.leg.control_points());
    flyer.facing = yaw_towards(flyer.position, state.player.position);

    flyer.step += 1;
    if flyer.step >= FLY_STEPS_PER_LEG {
        flyer.step = 0;
        flyer.leg = flyer.leg.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::PatrolLeg;
    use crate::sim::GamePhase;

    #[test]
    fn test_chase_axis_dead_zone() {
        assert_eq!(chase_axis(0.0, 0.5, 0.1), 0.0);
        assert_eq!(chase_axis(0.0, -1.0, 0.1), 0.0);
        assert_eq!(chase_axis(0.0, 5.0, 0.1), 0.1);
        assert_eq!(chase_axis(0.0, -5.0, 0.1), -0.1);
    }

    #[test]
    fn test_monster_ignores_distant_player() {
        let mut state = GameState::new(1);
        state.player.position = Vec3::new(0.0, 1.0, 200.0);
        let before: Vec<Vec3> = state.monsters.iter().map(|m| m.position).collect();
        update_monsters(&mut state, 0.5);
        for (m, start) in state.monsters.iter().zip(before) {
            assert_eq!(m.position, start);
            assert!(!m.aggro);
        }
    }

    #[test]
    fn test_monster_chases_near_player() {
        let mut state = GameState::new(1);
        // First spawn is (-50, 0.6, 0)
        state.player.position = Vec3::new(-40.0, 1.0, 5.0);
        update_monsters(&mut state, 0.5);
        let m = &state.monsters[0];
        assert!(m.aggro);
        assert_eq!(m.position, Vec3::new(-49.0, 0.6, 1.0));
        assert_eq!(m.hitbox, m.position);
        // Facing is taken before the step
        let target = state.player.position;
        assert_eq!(m.facing, yaw_towards(MONSTER_SPAWNS[0], target));
        assert_ne!(m.facing, yaw_towards(m.position, target));
    }

    #[test]
    fn test_dead_monster_stays_put() {
        let mut state = GameState::new(1);
        state.player.position = Vec3::new(-40.0, 1.0, 5.0);
        state.monsters[0].take_hit(MONSTER_LIVES);
        update_monsters(&mut state, 0.5);
        assert_eq!(state.monsters[0].position, MONSTER_SPAWNS[0]);
    }

    #[test]
    fn test_boss_sleeps_until_piece() {
        let mut state = GameState::new(1);
        update_boss(&mut state, 0.1);
        assert_eq!(state.boss.phase, BossPhase::Dormant);
        assert!(!state.camera.is_locked());
    }

    #[test]
    fn test_boss_wakes_locks_camera_then_approaches() {
        let mut state = GameState::new(1);
        state.pieces_collected = PIECES_TO_WIN;
        update_boss(&mut state, 0.1);
        assert_eq!(state.boss.phase, BossPhase::Approaching);
        assert!(state.camera.is_locked());
        assert!(state.cutscene.is_running());
        assert_eq!(state.boss.position, BOSS_SPAWN);

        // Lock released: now it closes on the ship in the XZ plane only
        state.camera.mode = crate::sim::camera::CameraMode::FreeLook;
        let before = state.boss.position.distance(state.spaceship.position);
        let dt = 0.5;
        update_boss(&mut state, dt);
        assert!(state.boss.position.distance(state.spaceship.position) < before);
        assert_eq!(state.boss.position.y, BOSS_SPAWN.y);

        // 5 units per second along the wake-up heading, XZ components only
        let moved = state.boss.position - BOSS_SPAWN;
        let heading = state.boss.heading;
        assert!((moved.x + heading.x * BOSS_APPROACH_SPEED * dt).abs() < 1e-4);
        assert!((moved.z + heading.z * BOSS_APPROACH_SPEED * dt).abs() < 1e-4);
        let planar = Vec3::new(heading.x, 0.0, heading.z).length();
        assert!((moved.length() - BOSS_APPROACH_SPEED * dt * planar).abs() < 1e-4);
        assert!(moved.length() <= BOSS_APPROACH_SPEED * dt);
    }

    #[test]
    fn test_boss_stays_down_when_defeated() {
        let mut state = GameState::new(1);
        state.pieces_collected = PIECES_TO_WIN;
        state.boss.take_hit(BOSS_LIVES);
        update_boss(&mut state, 0.1);
        assert_eq!(state.boss.phase, BossPhase::Defeated);
        assert!(!state.camera.is_locked());
    }

    #[test]
    fn test_boss_not_woken_after_outcome() {
        let mut state = GameState::new(1);
        state.pieces_collected = PIECES_TO_WIN;
        state.phase = GamePhase::Won;
        update_boss(&mut state, 0.1);
        assert_eq!(state.boss.phase, BossPhase::Dormant);
    }

    #[test]
    fn test_flyer_switches_leg_after_full_curve() {
        let mut state = GameState::new(1);
        update_flying_monster(&mut state);
        assert_eq!(state.flyer.position, FLY_LEG_OUT[0]);

        for _ in 1..FLY_STEPS_PER_LEG {
            update_flying_monster(&mut state);
        }
        assert_eq!(state.flyer.leg, PatrolLeg::Back);
        assert_eq!(state.flyer.step, 0);
        assert_eq!(state.flyer.t(), 0.0);
        // Last sample of the out leg sits just short of its end point
        assert!(state.flyer.position.distance(FLY_LEG_OUT[3]) < 2.0);

        update_flying_monster(&mut state);
        assert_eq!(state.flyer.position, FLY_LEG_BACK[0]);
    }
}
