//! Input accumulation between ticks
//!
//! Host event handlers write into an [`InputState`]; once per frame the game
//! loop drains it into a [`TickInput`]. Held keys persist across frames,
//! while pointer motion, scroll and button presses are consumed.

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Back,
    Left,
    Right,
    /// Use an upgrade capsule
    Buy,
    Reload,
}

/// Pending input since the last tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
    buy: bool,
    fire: bool,
    reload: bool,
    pointer_delta: Vec2,
    scroll: f32,
}

impl InputState {
    /// Record a key transition; the latest event wins
    pub fn key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Forward => self.forward = pressed,
            Key::Back => self.back = pressed,
            Key::Left => self.left = pressed,
            Key::Right => self.right = pressed,
            Key::Buy => self.buy = pressed,
            // Reload acts on press only and is consumed by the next tick
            Key::Reload => self.reload |= pressed,
        }
    }

    /// Accumulate relative pointer motion in pixels
    pub fn pointer_moved(&mut self, dx: f32, dy: f32) {
        self.pointer_delta += Vec2::new(dx, dy);
    }

    pub fn scroll(&mut self, amount: f32) {
        self.scroll += amount;
    }

    /// Primary button press fires once
    pub fn click(&mut self) {
        self.fire = true;
    }

    /// Reload request from a non-key source (touch button, script)
    pub fn reload(&mut self) {
        self.reload = true;
    }

    /// Build this frame's input and clear everything that does not persist
    pub fn take_frame(&mut self, now: f64) -> TickInput {
        let input = TickInput {
            forward: self.forward,
            back: self.back,
            left: self.left,
            right: self.right,
            buy: self.buy,
            fire: self.fire,
            reload: self.reload,
            pointer_delta: self.pointer_delta,
            scroll: self.scroll,
            now,
        };

        self.fire = false;
        self.reload = false;
        self.pointer_delta = Vec2::ZERO;
        self.scroll = 0.0;
        input
    }
}
