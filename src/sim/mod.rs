//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - One tick per call, no internal timing
//! - No randomness
//! - No rendering or platform dependencies
//!
//! The embedder owns the cadence: it calls [`tick`] once per rendering frame
//! and reads the resulting position back out of [`FlyState`].

pub mod boundary;
pub mod state;
pub mod tick;

pub use boundary::resolve_boundaries;
pub use state::{Direction, FlyState, InputState};
pub use tick::tick;
