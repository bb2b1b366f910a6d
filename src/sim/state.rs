//! Game state and core simulation types
//!
//! `GameState` owns everything the per-frame update touches. No other
//! module holds mutable game data.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::CameraRig;
use super::entities::{
    Body, Boss, Capsule, FlyingMonster, Monster, Piece, Player, Projectile, Spaceship, Statue,
};
use super::timers::{Deadline, FrameCountdown};
use crate::consts::*;

/// Session outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Player ran out of lives or the boss reached the ship
    GameOver,
    /// Player boarded the ship
    Won,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Timed banners shown after using a capsule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    ExtraLife,
    DamageUp,
    SpeedUp,
    InsufficientPoints,
}

impl Message {
    pub const ALL: [Message; 4] = [
        Message::ExtraLife,
        Message::DamageUp,
        Message::SpeedUp,
        Message::InsufficientPoints,
    ];

    fn index(self) -> usize {
        match self {
            Message::ExtraLife => 0,
            Message::DamageUp => 1,
            Message::SpeedUp => 2,
            Message::InsufficientPoints => 3,
        }
    }
}

/// Per-message display windows plus the shared purchase gate.
///
/// Showing any message closes the gate; it reopens when a window expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBoard {
    windows: [Deadline; 4],
    /// Whether a capsule may be used right now
    pub can_buy: bool,
}

impl Default for MessageBoard {
    fn default() -> Self {
        Self {
            windows: [Deadline::default(); 4],
            can_buy: true,
        }
    }
}

impl MessageBoard {
    /// Put `message` up for the standard duration and close the gate
    pub fn show(&mut self, message: Message, now: f64) {
        self.windows[message.index()].arm(now, MESSAGE_DURATION_SECS);
        self.can_buy = false;
    }

    /// Take down expired messages, reopening the gate for each
    pub fn expire(&mut self, now: f64) {
        for window in &mut self.windows {
            if window.is_expired(now) {
                window.clear();
                self.can_buy = true;
            }
        }
    }

    pub fn is_showing(&self, message: Message) -> bool {
        self.windows[message.index()].is_armed()
    }

    /// First message currently on screen
    pub fn active(&self) -> Option<Message> {
        Message::ALL.into_iter().find(|m| self.is_showing(*m))
    }
}

/// Read-only values for the HUD after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub phase: GamePhase,
    pub lives: i32,
    pub points: i32,
    pub shots: u32,
    pub max_shots: u32,
    pub pieces: u32,
    pub piece_total: u32,
    /// Host clock seconds at the last tick
    pub elapsed_secs: f64,
    /// Display-only oxygen countdown, floored at zero
    pub oxygen_secs: f64,
    pub message: Option<Message>,
    /// Price of the capsule in reach, if any
    pub upgrade_price: Option<i32>,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session was created with
    pub seed: u64,
    /// Drives spawn scatter and upgrade draws
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub camera: CameraRig,
    /// Fired rounds; spent ones stay until the next compaction
    pub projectiles: Vec<Projectile>,
    pub monsters: Vec<Monster>,
    pub boss: Boss,
    pub spaceship: Spaceship,
    pub pieces: Vec<Piece>,
    pub capsules: Vec<Capsule>,
    pub statue: Statue,
    pub flyer: FlyingMonster,
    /// Number of pieces picked up so far
    pub pieces_collected: u32,
    pub messages: MessageBoard,
    /// Boss cutscene camera lock duration
    pub cutscene: FrameCountdown,
    /// One-shot: move the camera to the cutscene spot when the lock begins
    pub boss_teleport_pending: bool,
    /// One-shot: move the camera to the ending spot on a terminal outcome
    pub ending_teleport_pending: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Host clock seconds seen by the last tick
    pub elapsed_secs: f64,
}

impl GameState {
    /// Create a new session; `seed` fixes piece/capsule placement and upgrade draws
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        // (x, z) quadrant signs of the spawn layout
        let piece_quadrants = [(-1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)];
        let capsule_quadrants = [(-1.0, 1.0), (1.0, -1.0), (-1.0, 1.0)];

        let pieces = piece_quadrants
            .iter()
            .map(|&(sx, sz)| Piece::new(scatter(&mut rng, sx, sz, PIECE_HEIGHT)))
            .collect();
        let capsules = capsule_quadrants
            .iter()
            .map(|&(sx, sz)| Capsule::new(scatter(&mut rng, sx, sz, CAPSULE_HEIGHT)))
            .collect();

        let mut state = Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            player: Player::default(),
            camera: CameraRig::default(),
            projectiles: Vec::new(),
            monsters: MONSTER_SPAWNS.iter().copied().map(Monster::new).collect(),
            boss: Boss::default(),
            spaceship: Spaceship::default(),
            pieces,
            capsules,
            statue: Statue::default(),
            flyer: FlyingMonster::default(),
            pieces_collected: 0,
            messages: MessageBoard::default(),
            cutscene: FrameCountdown::new(BOSS_CUTSCENE_FRAMES),
            boss_teleport_pending: true,
            ending_teleport_pending: true,
            time_ticks: 0,
            elapsed_secs: 0.0,
        };
        state.flyer.position = FLY_LEG_OUT[0];

        log::debug!(
            "Session {} pieces at {:?}",
            seed,
            state.pieces.iter().map(|p| p.position).collect::<Vec<_>>()
        );
        state
    }

    /// Enter a terminal phase; the first outcome of a session sticks
    pub fn finish(&mut self, outcome: GamePhase) {
        if self.phase.is_terminal() || !outcome.is_terminal() {
            return;
        }
        self.phase = outcome;
        log::info!(
            "Session over: {:?} (points {}, lives {}, pieces {})",
            outcome,
            self.player.points,
            self.player.lives,
            self.pieces_collected
        );
    }

    /// Every entity in the scene, in a fixed order
    pub fn bodies(&self) -> impl Iterator<Item = &dyn Body> + '_ {
        std::iter::once(&self.player as &dyn Body)
            .chain(self.projectiles.iter().map(|p| p as &dyn Body))
            .chain(self.monsters.iter().map(|m| m as &dyn Body))
            .chain(std::iter::once(&self.flyer as &dyn Body))
            .chain(std::iter::once(&self.boss as &dyn Body))
            .chain(std::iter::once(&self.spaceship as &dyn Body))
            .chain(self.pieces.iter().map(|p| p as &dyn Body))
            .chain(self.capsules.iter().map(|c| c as &dyn Body))
            .chain(std::iter::once(&self.statue as &dyn Body))
    }

    /// Snapshot for the HUD renderer
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            phase: self.phase,
            lives: self.player.lives,
            points: self.player.points,
            shots: self.player.shots,
            max_shots: MAX_SHOTS,
            pieces: self.pieces_collected,
            piece_total: self.pieces.len() as u32,
            elapsed_secs: self.elapsed_secs,
            oxygen_secs: (OXYGEN_SECS - self.elapsed_secs).max(0.0),
            message: self.messages.active(),
            upgrade_price: self.capsules.iter().find(|c| c.overlapping).map(|c| c.price),
        }
    }
}

/// Random ground position in the quadrant given by the signs
fn scatter(rng: &mut Pcg32, sign_x: f32, sign_z: f32, height: f32) -> Vec3 {
    let x = rng.random_range(0..SCATTER_EXTENT) as f32;
    let z = rng.random_range(0..SCATTER_EXTENT) as f32;
    Vec3::new(sign_x * x, height, sign_z * z)
}
