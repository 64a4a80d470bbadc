//! Pong: Lava vs Ice - a two-paddle arcade duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (menus, physics, collisions, scoring)
//! - `tuning`: Data-driven difficulty presets
//! - `audio`: Procedural sound cues (with a no-op sink for headless use)
//! - `renderer`: WebGPU rendering pipeline

pub mod audio;
pub mod renderer;
pub mod sim;
pub mod tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the arcade cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical playfield size in pixels
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// First side to reach this score wins the match
    pub const WIN_SCORE: u32 = 5;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 20.0;

    /// Paddle geometry - x is fixed per side, height comes from the preset
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const LEFT_PADDLE_X: f32 = 50.0;
    pub const RIGHT_PADDLE_X: f32 = SCREEN_WIDTH - 70.0;

    /// Vertical spin added to the ball on every paddle hit
    pub const PADDLE_SPIN: f32 = 0.5;

    /// Center-line obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_HEIGHT: f32 = 50.0;
    pub const OBSTACLE_YS: [f32; 3] = [100.0, 300.0, 500.0];

    /// Back button (top-right corner)
    pub const BACK_BUTTON_X: f32 = SCREEN_WIDTH - 150.0;
    pub const BACK_BUTTON_Y: f32 = 20.0;
    pub const BACK_BUTTON_W: f32 = 120.0;
    pub const BACK_BUTTON_H: f32 = 40.0;

    /// Trail-spark pool capacity per paddle
    pub const PARTICLES_PER_SIDE: usize = 10;
    /// Chance (percent per tick) that an expired spark slot respawns
    pub const PARTICLE_SPAWN_PCT: i32 = 5;

    /// Ambient background layers
    pub const NUM_STARS: usize = 200;
    pub const NUM_RAINDROPS: usize = 64;
}
