//! Entity records
//!
//! Every entity is a plain value record. Dead or spent entities are never
//! removed from their collections (apart from projectile compaction); they
//! carry an `alive`/`active`/`collected` flag instead and the update passes
//! skip them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::geometry::{point_in_sphere, sphere_sphere_intersect};
use crate::consts::*;

/// Closed set of entity kinds in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Projectile,
    Monster,
    FlyingMonster,
    Boss,
    Spaceship,
    Piece,
    Capsule,
    Statue,
}

/// Shared view of anything with a transform and a collision sphere
pub trait Body {
    fn kind(&self) -> EntityKind;

    /// Current world position (what gets drawn)
    fn position(&self) -> Vec3;

    /// Last collidable position; equal to `position` unless overridden
    fn hitbox(&self) -> Vec3 {
        self.position()
    }

    fn radius(&self) -> f32;

    /// Yaw in radians
    fn facing(&self) -> f32 {
        0.0
    }

    /// Whether the entity still takes part in the simulation
    fn is_active(&self) -> bool {
        true
    }

    /// Point containment against the hitbox sphere
    fn contains_point(&self, point: Vec3) -> bool {
        point_in_sphere(point, self.hitbox(), self.radius())
    }

    /// Sphere overlap between two hitboxes
    fn touches(&self, other: &dyn Body) -> bool {
        sphere_sphere_intersect(self.hitbox(), self.radius(), other.hitbox(), other.radius())
    }
}

/// The first-person player; the camera sits at `position`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    /// Movement speed (units per second), raised by upgrades
    pub speed: f32,
    pub alive: bool,
    /// Damage per projectile hit, raised by upgrades
    pub damage: i32,
    pub lives: i32,
    /// Currency earned from kills and spent at capsules
    pub points: i32,
    /// Rounds left in the magazine
    pub shots: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: PLAYER_START,
            speed: PLAYER_SPEED,
            alive: true,
            damage: PLAYER_DAMAGE,
            lives: PLAYER_LIVES,
            points: 0,
            shots: MAX_SHOTS,
        }
    }
}

impl Body for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn radius(&self) -> f32 {
        0.0
    }
    fn is_active(&self) -> bool {
        self.alive
    }
}

/// A fired round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    pub velocity: Vec3,
    pub active: bool,
    pub radius: f32,
}

impl Projectile {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            active: true,
            radius: PROJECTILE_RADIUS,
        }
    }
}

impl Body for Projectile {
    fn kind(&self) -> EntityKind {
        EntityKind::Projectile
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn is_active(&self) -> bool {
        self.active
    }
}

/// A ground monster that chases the player when close
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub position: Vec3,
    pub hitbox: Vec3,
    pub alive: bool,
    /// Player is inside the notice radius
    pub aggro: bool,
    pub speed: f32,
    pub facing: f32,
    pub radius: f32,
    pub lives: i32,
}

impl Monster {
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            hitbox: spawn,
            alive: true,
            aggro: false,
            speed: MONSTER_SPEED,
            facing: 0.0,
            radius: MONSTER_RADIUS,
            lives: MONSTER_LIVES,
        }
    }

    /// Apply `damage`; returns true only on the hit that kills.
    ///
    /// Lives are clamped at zero so a kill is reported exactly once
    /// whether the hit lands on zero or overshoots it.
    pub fn take_hit(&mut self, damage: i32) -> bool {
        self.lives -= damage;
        if self.lives <= 0 && self.alive {
            self.alive = false;
            self.lives = 0;
            return true;
        }
        self.lives = self.lives.max(0);
        false
    }
}

impl Body for Monster {
    fn kind(&self) -> EntityKind {
        EntityKind::Monster
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn hitbox(&self) -> Vec3 {
        self.hitbox
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn facing(&self) -> f32 {
        self.facing
    }
    fn is_active(&self) -> bool {
        self.alive && self.lives > 0
    }
}

/// Boss lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BossPhase {
    /// Waiting out of sight for the pieces to be collected
    #[default]
    Dormant,
    /// Awake and heading for the spaceship
    Approaching,
    /// Lives exhausted; never respawns
    Defeated,
}

/// The boss: dormant until woken, then marches on the spaceship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub position: Vec3,
    pub hitbox: Vec3,
    pub phase: BossPhase,
    pub speed: f32,
    pub facing: f32,
    pub radius: f32,
    pub lives: i32,
    /// Unit vector from the spaceship to the boss, fixed at wake-up
    pub heading: Vec3,
}

impl Default for Boss {
    fn default() -> Self {
        Self {
            position: BOSS_SPAWN,
            hitbox: BOSS_SPAWN,
            phase: BossPhase::Dormant,
            speed: BOSS_SPEED,
            facing: 0.0,
            radius: BOSS_RADIUS,
            lives: BOSS_LIVES,
            heading: Vec3::ZERO,
        }
    }
}

impl Boss {
    pub fn is_alive(&self) -> bool {
        self.phase == BossPhase::Approaching
    }

    /// Apply `damage`; returns true on the hit that defeats the boss
    pub fn take_hit(&mut self, damage: i32) -> bool {
        self.lives -= damage;
        if self.lives <= 0 {
            self.lives = 0;
            let newly = self.phase != BossPhase::Defeated;
            self.phase = BossPhase::Defeated;
            return newly;
        }
        false
    }
}

impl Body for Boss {
    fn kind(&self) -> EntityKind {
        EntityKind::Boss
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn hitbox(&self) -> Vec3 {
        self.hitbox
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn facing(&self) -> f32 {
        self.facing
    }
    fn is_active(&self) -> bool {
        self.is_alive()
    }
}

/// The player's way home and the boss's target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spaceship {
    pub position: Vec3,
    pub radius: f32,
}

impl Default for Spaceship {
    fn default() -> Self {
        Self {
            position: SPACESHIP_POSITION,
            radius: SPACESHIP_RADIUS,
        }
    }
}

impl Body for Spaceship {
    fn kind(&self) -> EntityKind {
        EntityKind::Spaceship
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn hitbox(&self) -> Vec3 {
        self.position + SPACESHIP_HITBOX_OFFSET
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

/// A ship fragment to collect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Piece {
    pub position: Vec3,
    pub hitbox: Vec3,
    pub radius: f32,
    pub collected: bool,
}

impl Piece {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            hitbox: position,
            radius: PIECE_RADIUS,
            collected: false,
        }
    }

    /// Mark collected; returns false if it already was
    pub fn collect(&mut self) -> bool {
        !std::mem::replace(&mut self.collected, true)
    }
}

impl Body for Piece {
    fn kind(&self) -> EntityKind {
        EntityKind::Piece
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn hitbox(&self) -> Vec3 {
        self.hitbox
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn is_active(&self) -> bool {
        !self.collected
    }
}

/// Upgrade station with an escalating price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capsule {
    pub position: Vec3,
    pub hitbox: Vec3,
    pub radius: f32,
    pub price: i32,
    /// Player is inside the interaction volume this frame
    pub overlapping: bool,
}

impl Capsule {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            hitbox: position,
            radius: CAPSULE_RADIUS,
            price: CAPSULE_BASE_PRICE,
            overlapping: false,
        }
    }

    /// Radius of the "press to buy" volume
    pub fn reach(&self) -> f32 {
        self.radius + CAPSULE_REACH
    }

    pub fn in_reach(&self, point: Vec3) -> bool {
        point_in_sphere(point, self.hitbox, self.reach())
    }
}

impl Body for Capsule {
    fn kind(&self) -> EntityKind {
        EntityKind::Capsule
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn hitbox(&self) -> Vec3 {
        self.hitbox
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Decorative statue; vanishes for good when touched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statue {
    pub position: Vec3,
    pub radius: f32,
    pub present: bool,
}

impl Default for Statue {
    fn default() -> Self {
        Self {
            position: STATUE_POSITION,
            radius: STATUE_RADIUS,
            present: true,
        }
    }
}

impl Body for Statue {
    fn kind(&self) -> EntityKind {
        EntityKind::Statue
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn is_active(&self) -> bool {
        self.present
    }
}

/// Which of the two patrol curves the flying monster is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PatrolLeg {
    #[default]
    Out,
    Back,
}

impl PatrolLeg {
    pub fn control_points(self) -> &'static [Vec3; 4] {
        match self {
            PatrolLeg::Out => &FLY_LEG_OUT,
            PatrolLeg::Back => &FLY_LEG_BACK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PatrolLeg::Out => PatrolLeg::Back,
            PatrolLeg::Back => PatrolLeg::Out,
        }
    }
}

/// Scripted flyer on a closed two-leg Bezier loop; no combat interaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlyingMonster {
    pub position: Vec3,
    pub facing: f32,
    pub leg: PatrolLeg,
    /// Frames elapsed on the current leg; the curve parameter is `step * FLY_T_STEP`
    pub step: u32,
}

impl FlyingMonster {
    /// Curve parameter in [0, 1)
    pub fn t(&self) -> f32 {
        self.step as f32 * FLY_T_STEP
    }
}

impl Body for FlyingMonster {
    fn kind(&self) -> EntityKind {
        EntityKind::FlyingMonster
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn radius(&self) -> f32 {
        0.0
    }
    fn facing(&self) -> f32 {
        self.facing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_kill_reported_once() {
        let mut m = Monster::new(Vec3::ZERO);
        assert!(!m.take_hit(1));
        assert!(!m.take_hit(1));
        assert_eq!(m.lives, 1);
        assert!(m.take_hit(1));
        assert!(!m.alive);
        assert!(!m.take_hit(1));
        assert_eq!(m.lives, 0);
    }

    #[test]
    fn test_monster_overkill_clamps_to_zero() {
        let mut m = Monster::new(Vec3::ZERO);
        assert!(m.take_hit(5));
        assert_eq!(m.lives, 0);
    }

    #[test]
    fn test_boss_defeat_clamps() {
        let mut b = Boss {
            phase: BossPhase::Approaching,
            ..Default::default()
        };
        assert!(!b.take_hit(1));
        assert!(!b.take_hit(1));
        assert!(b.take_hit(1));
        assert_eq!(b.phase, BossPhase::Defeated);
        assert!(!b.take_hit(1));
        assert_eq!(b.lives, 0);
    }

    #[test]
    fn test_piece_collect_is_monotonic() {
        let mut p = Piece::new(Vec3::ZERO);
        assert!(p.collect());
        assert!(!p.collect());
        assert!(p.collected);
    }

    #[test]
    fn test_spaceship_hitbox_is_offset() {
        let ship = Spaceship::default();
        assert_eq!(ship.hitbox(), Vec3::new(-2.0, 0.0, 9.5));
        assert!(ship.contains_point(Vec3::new(-2.0, 1.0, 9.5)));
        assert!(!ship.contains_point(ship.position));
    }

    #[test]
    fn test_capsule_reach_is_inflated() {
        let c = Capsule::new(Vec3::ZERO);
        assert!(!c.contains_point(Vec3::new(2.0, 0.0, 0.0)));
        assert!(c.in_reach(Vec3::new(2.0, 0.0, 0.0)));
        assert!(!c.in_reach(Vec3::new(3.5, 0.0, 0.0)));
    }

    #[test]
    fn test_patrol_leg_toggles() {
        assert_eq!(PatrolLeg::Out.toggled(), PatrolLeg::Back);
        assert_eq!(PatrolLeg::Back.toggled().control_points()[0], FLY_LEG_OUT[0]);
    }
}
