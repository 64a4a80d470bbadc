//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the session state
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{circle_overlaps_rect, reflect_horizontal, reflect_vertical};
pub use rect::Rect;
pub use state::{
    Ball, GameEvent, GameMode, GameState, Paddle, Particle, ParticlePool, Raindrop, Screen, Side,
    ICE_COLOR, LAVA_COLOR,
};
pub use tick::{tick, TickInput};
