//! Boundary detection and bounce response
//!
//! The playground is an axis-aligned box and each edge has its own bounce
//! coefficient: walls damp hard, the ceiling barely pushes back, the floor
//! returns the most energy. The upper boundary is not y=0 but a thin band
//! (1% of the playground height) below it.

use super::state::FlyState;
use crate::consts::*;

/// Height of the ceiling band for a given playground height
#[inline]
pub fn ceiling_zone(height: f32) -> f32 {
    height * CEILING_ZONE_FRAC
}

/// Clamp the fly inside the playground, reversing and damping velocity on
/// every edge it crossed.
///
/// The four checks run unconditionally in a fixed order (left, right,
/// ceiling, floor), never as exclusive branches. In a degenerate playground
/// smaller than the fly, a position past two edges at once gets both
/// corrections, which keeps the result defined if visually meaningless.
pub fn resolve_boundaries(state: &mut FlyState) {
    let ceiling = ceiling_zone(state.bounds.y);

    if state.pos.x < 0.0 {
        state.pos.x = 0.0;
        state.vel.x *= BOUNCE_WALL;
    }
    if state.pos.x > state.bounds.x - FLY_SIZE {
        state.pos.x = state.bounds.x - FLY_SIZE;
        state.vel.x *= BOUNCE_WALL;
    }
    if state.pos.y < ceiling {
        state.pos.y = ceiling;
        state.vel.y *= BOUNCE_CEILING;
    }
    if state.pos.y > state.bounds.y - FLY_SIZE {
        state.pos.y = state.bounds.y - FLY_SIZE;
        state.vel.y *= BOUNCE_FLOOR;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state_at(pos: Vec2, vel: Vec2) -> FlyState {
        let mut state = FlyState::new(Vec2::new(400.0, 300.0));
        state.pos = pos;
        state.vel = vel;
        state
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut state = state_at(Vec2::new(-10.0, 100.0), Vec2::new(-4.0, 0.0));
        resolve_boundaries(&mut state);
        assert_eq!(state.pos.x, 0.0);
        assert!((state.vel.x - 1.2).abs() < 0.001);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut state = state_at(Vec2::new(398.0, 100.0), Vec2::new(3.0, 0.0));
        resolve_boundaries(&mut state);
        assert_eq!(state.pos.x, 392.0);
        assert!((state.vel.x - (-0.9)).abs() < 0.001);
    }

    #[test]
    fn test_ceiling_pushback() {
        let mut state = state_at(Vec2::new(100.0, 0.0), Vec2::new(0.0, -5.0));
        resolve_boundaries(&mut state);
        // Ceiling band is 1% of height = 3px; sign flips, 20% magnitude kept
        assert_eq!(state.pos.y, 3.0);
        assert!((state.vel.y - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_floor_bounce() {
        let mut state = state_at(Vec2::new(100.0, 296.0), Vec2::new(0.0, 2.0));
        resolve_boundaries(&mut state);
        assert_eq!(state.pos.y, 292.0);
        assert!((state.vel.y - (-1.2)).abs() < 0.001);
    }

    #[test]
    fn test_interior_untouched() {
        let mut state = state_at(Vec2::new(100.0, 100.0), Vec2::new(1.5, -2.5));
        resolve_boundaries(&mut state);
        assert_eq!(state.pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.vel, Vec2::new(1.5, -2.5));
    }

    #[test]
    fn test_degenerate_playground_applies_all_corrections() {
        // Playground smaller than the fly: left then right then ceiling then
        // floor all fire, last write wins per axis, nothing panics.
        let mut state = state_at(Vec2::new(-5.0, -5.0), Vec2::new(-1.0, -1.0));
        state.bounds = Vec2::new(4.0, 4.0);
        resolve_boundaries(&mut state);
        // x: clamped to 0, then past 4 - 8 = -4, clamped again to -4
        assert_eq!(state.pos.x, -4.0);
        // Both wall corrections scaled vx
        assert!((state.vel.x - (-1.0 * -0.3 * -0.3)).abs() < 0.001);
        // y: ceiling clamp to 0.04, then floor clamp to -4
        assert_eq!(state.pos.y, -4.0);
    }
}
