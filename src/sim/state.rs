//! Fly state and input state
//!
//! Everything the stepper reads or writes lives here. There is exactly one
//! fly and it lives for the whole page session.

use glam::Vec2;

use crate::consts::*;

/// The four logical movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a raw key identifier (as delivered by `KeyboardEvent.key`) to a
    /// logical direction. Case-insensitive; unrecognized keys yield `None`
    /// and are ignored by the embedder.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" | "arrowup" => Some(Direction::Up),
            "s" | "arrowdown" => Some(Direction::Down),
            "a" | "arrowleft" => Some(Direction::Left),
            "d" | "arrowright" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Held state of the four directions
///
/// Mutated by key events between ticks, read (never written) by the tick.
/// Multiple directions held at once combine linearly.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Record a press or release of one direction
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }
}

/// Authoritative fly state: position, velocity, and the playground extent
#[derive(Debug, Clone)]
pub struct FlyState {
    /// Top-left corner of the fly's bounding box, in playground pixels
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Playground extent (width, height); updated only on resize
    pub bounds: Vec2,
}

impl FlyState {
    /// Create a fly at rest, centered horizontally and near the bottom
    pub fn new(bounds: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                bounds.x / 2.0 - FLY_SIZE / 2.0,
                bounds.y - SPAWN_BOTTOM_OFFSET,
            ),
            vel: Vec2::ZERO,
            bounds,
        }
    }

    /// Adopt a new playground extent
    ///
    /// The position is kept where it still fits. An axis that no longer fits
    /// snaps back to its spawn default (bottom-safe offset vertically,
    /// centered horizontally) rather than rescaling in place.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
        if self.pos.y > bounds.y - FLY_SIZE {
            self.pos.y = bounds.y - SPAWN_BOTTOM_OFFSET;
        }
        if self.pos.x > bounds.x - FLY_SIZE {
            self.pos.x = bounds.x / 2.0 - FLY_SIZE / 2.0;
        }
    }
}
