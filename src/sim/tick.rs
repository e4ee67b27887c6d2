//! Per-frame physics tick
//!
//! Advances the simulation by exactly one tick. The in-tick order is fixed
//! and load-bearing for the feel of the toy: gravity, altitude scaling,
//! input impulses, drag, Euler integration, boundary resolution.

use super::boundary::resolve_boundaries;
use super::state::{FlyState, InputState};
use crate::consts::*;

/// Advance the fly by one tick
///
/// There is no resting state: a fly on the floor keeps receiving gravity and
/// keeps getting bounced back by the floor, in ever-smaller amounts.
pub fn tick(state: &mut FlyState, input: &InputState) {
    // Gravity, amplified while falling
    let gravity_mult = if state.vel.y > 0.0 {
        FALL_GRAVITY_MULT
    } else {
        1.0
    };
    state.vel.y += GRAVITY * gravity_mult;

    // Upward thrust weakens with altitude: full strength at the floor,
    // ALTITUDE_THRUST_MIN of it at the very top. The ratio is deliberately
    // left unclamped for positions outside the playground.
    let height_ratio = state.pos.y / state.bounds.y;
    let altitude_mult = ALTITUDE_THRUST_MIN + (1.0 - ALTITUDE_THRUST_MIN) * height_ratio;

    // Impulses are additive and independent; held opposites cancel
    if input.up {
        state.vel.y -= MOVE_FORCE * altitude_mult;
    }
    if input.down {
        state.vel.y += MOVE_FORCE;
    }
    if input.left {
        state.vel.x -= MOVE_FORCE;
    }
    if input.right {
        state.vel.x += MOVE_FORCE;
    }

    // Drag: horizontal velocity persists roughly twice as long as vertical
    state.vel.x *= AIR_RESISTANCE_X;
    state.vel.y *= AIR_RESISTANCE_Y;

    // Explicit Euler, one unit timestep per tick
    state.pos += state.vel;

    resolve_boundaries(state);
}
