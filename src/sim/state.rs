//! Game session state and entity types
//!
//! Everything one play session owns lives here: the active screen, menu
//! cursors, scores, the ball, both paddles, the center-line obstacles, the
//! spark pools and the ambient background layers. The session carries its
//! own seeded RNG so a run is reproducible from the seed and input stream.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::{Difficulty, Preset};

/// Which screen the session is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Title screen, waits for confirm
    Menu,
    /// Pick Player-vs-Player or Player-vs-Computer
    ModeSelect,
    /// Pick Easy/Medium/Hard
    DifficultySelect,
    /// A round is in progress
    Playing,
    /// Someone reached the win score
    GameOver,
}

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    #[default]
    PlayerVsPlayer,
    PlayerVsAi,
}

impl GameMode {
    /// All modes, in menu order
    pub const ALL: [GameMode; 2] = [GameMode::PlayerVsPlayer, GameMode::PlayerVsAi];

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsAi => "Player vs Computer",
        }
    }
}

/// The two sides of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Lava (fiery orange, left paddle)
    Left,
    /// Ice (icy blue, right paddle)
    Right,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "Lava",
            Side::Right => "Ice",
        }
    }

    /// Banner shown on the game-over screen
    pub fn win_label(&self) -> &'static str {
        match self {
            Side::Left => "Lava Wins!",
            Side::Right => "Ice Wins!",
        }
    }
}

/// Discrete triggers for the audio layer
///
/// The simulation queues these as it updates; the frontend drains the queue
/// once per frame and maps each to a sound cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit,
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball bounced off a center-line obstacle
    ObstacleHit,
    /// A side scored (round continues)
    Score(Side),
    /// A side reached the win score
    MatchWon(Side),
    /// Menu cursor moved
    MenuMove,
    /// Menu selection confirmed
    MenuConfirm,
}

/// Lava side color (fiery orange)
pub const LAVA_COLOR: [f32; 4] = [1.0, 0.27, 0.0, 1.0];
/// Ice side color (icy blue)
pub const ICE_COLOR: [f32; 4] = [0.0, 0.75, 1.0, 1.0];

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// A motionless ball at screen center
    pub fn centered() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

/// A paddle; x never changes, y and height do
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// A paddle at the given column, vertically centered
    pub fn new(x: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, SCREEN_HEIGHT / 2.0 - height / 2.0, PADDLE_WIDTH, height),
        }
    }

    /// Re-center vertically with a (possibly new) height
    pub fn recenter(&mut self, height: f32) {
        self.rect.h = height;
        self.rect.y = SCREEN_HEIGHT / 2.0 - height / 2.0;
    }

    /// Keep the paddle fully on screen
    pub fn clamp_to_screen(&mut self) {
        self.rect = self.rect.clamped_vertically(SCREEN_HEIGHT);
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.rect.center_y()
    }
}

/// A short-lived spark drifting off a paddle edge
///
/// A slot is live while `lifetime > 0`; expired slots sit in the pool until
/// they are re-armed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in seconds; doubles as the render alpha
    pub lifetime: f32,
    pub color: [f32; 4],
}

impl Particle {
    const DEAD: Particle = Particle {
        pos: Vec2::ZERO,
        vel: Vec2::ZERO,
        lifetime: 0.0,
        color: [0.0; 4],
    };

    #[inline]
    pub fn alive(&self) -> bool {
        self.lifetime > 0.0
    }
}

/// Fixed-capacity spark pool with in-place slot reuse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticlePool {
    slots: [Particle; PARTICLES_PER_SIDE],
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self {
            slots: [Particle::DEAD; PARTICLES_PER_SIDE],
        }
    }
}

impl ParticlePool {
    /// Advance live sparks and probabilistically re-arm expired slots
    ///
    /// Live sparks move by their velocity each tick and lose `dt` of
    /// lifetime. A dead slot has a small chance per tick to respawn at
    /// `spawn_at` with a short random lifetime and a lazy drift.
    pub fn update(&mut self, dt: f32, rng: &mut Pcg32, spawn_at: Vec2, color: [f32; 4]) {
        for slot in &mut self.slots {
            if slot.alive() {
                slot.pos += slot.vel;
                slot.lifetime -= dt;
            } else if rng.random_range(0..100) < PARTICLE_SPAWN_PCT {
                slot.pos = spawn_at;
                slot.vel = Vec2::new(
                    rng.random_range(-2..=2) as f32,
                    rng.random_range(-2..=2) as f32,
                );
                slot.lifetime = rng.random_range(5..=10) as f32 / 10.0;
                slot.color = color;
            }
        }
    }

    /// Iterate the live sparks (render order is slot order)
    pub fn iter_alive(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.alive())
    }

    /// Kill every slot (used when leaving a round)
    pub fn clear(&mut self) {
        self.slots = [Particle::DEAD; PARTICLES_PER_SIDE];
    }
}

/// One ambient raindrop streak
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Raindrop {
    pub pos: Vec2,
    /// Fall speed, pixels per tick
    pub speed: f32,
    /// Streak length in pixels
    pub len: f32,
}

/// Complete session state, exclusively owned by the frame loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG; every random draw in the simulation goes through this
    pub rng: Pcg32,
    /// Active screen
    pub screen: Screen,
    /// Selected mode (meaningful once past ModeSelect)
    pub mode: GameMode,
    /// Selected difficulty (meaningful once past DifficultySelect)
    pub difficulty: Difficulty,
    /// Tunables applied when the current round started
    pub preset: Preset,
    /// Cursor on the mode-select screen
    pub mode_cursor: usize,
    /// Cursor on the difficulty-select screen
    pub difficulty_cursor: usize,
    pub left_score: u32,
    pub right_score: u32,
    /// Set exactly once, when a side reaches the win score
    pub winner: Option<Side>,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    /// Immovable center-line reflectors
    pub obstacles: [Rect; 3],
    pub lava_particles: ParticlePool,
    pub ice_particles: ParticlePool,
    /// Static starfield, positions fixed at session start
    pub stars: Vec<Vec2>,
    /// Falling rain streaks, recycled at the top edge
    pub rain: Vec<Raindrop>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending audio triggers, drained by the frontend each frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session on the title screen
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let stars = (0..NUM_STARS)
            .map(|_| {
                Vec2::new(
                    rng.random_range(0..=SCREEN_WIDTH as i32) as f32,
                    rng.random_range(0..=SCREEN_HEIGHT as i32) as f32,
                )
            })
            .collect();

        let rain = (0..NUM_RAINDROPS)
            .map(|_| Raindrop {
                pos: Vec2::new(
                    rng.random_range(0..=SCREEN_WIDTH as i32) as f32,
                    rng.random_range(0..=SCREEN_HEIGHT as i32) as f32,
                ),
                speed: rng.random_range(3..=8) as f32,
                len: rng.random_range(8..=20) as f32,
            })
            .collect();

        let difficulty = Difficulty::default();
        let preset = difficulty.preset();

        Self {
            seed,
            rng,
            screen: Screen::Menu,
            mode: GameMode::default(),
            difficulty,
            preset,
            mode_cursor: 0,
            difficulty_cursor: 0,
            left_score: 0,
            right_score: 0,
            winner: None,
            ball: Ball::centered(),
            left_paddle: Paddle::new(LEFT_PADDLE_X, preset.paddle_height),
            right_paddle: Paddle::new(RIGHT_PADDLE_X, preset.paddle_height),
            obstacles: OBSTACLE_YS.map(|y| {
                Rect::new(
                    SCREEN_WIDTH / 2.0 - OBSTACLE_WIDTH / 2.0,
                    y,
                    OBSTACLE_WIDTH,
                    OBSTACLE_HEIGHT,
                )
            }),
            lava_particles: ParticlePool::default(),
            ice_particles: ParticlePool::default(),
            stars,
            rain,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// The back button's hit-box (top-right corner, all in-game screens)
    pub fn back_button() -> Rect {
        Rect::new(BACK_BUTTON_X, BACK_BUTTON_Y, BACK_BUTTON_W, BACK_BUTTON_H)
    }

    /// Queue an audio trigger
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending audio triggers, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_on_menu() {
        let state = GameState::new(7);
        assert_eq!(state.screen, Screen::Menu);
        assert_eq!(state.left_score, 0);
        assert_eq!(state.right_score, 0);
        assert!(state.winner.is_none());
        assert_eq!(state.stars.len(), NUM_STARS);
        assert_eq!(state.rain.len(), NUM_RAINDROPS);
    }

    #[test]
    fn test_obstacles_sit_on_the_center_line() {
        let state = GameState::new(7);
        for obstacle in &state.obstacles {
            assert_eq!(obstacle.x, SCREEN_WIDTH / 2.0 - OBSTACLE_WIDTH / 2.0);
            assert_eq!(obstacle.w, OBSTACLE_WIDTH);
            assert_eq!(obstacle.h, OBSTACLE_HEIGHT);
        }
    }

    #[test]
    fn test_paddle_recenter_applies_height() {
        let mut paddle = Paddle::new(LEFT_PADDLE_X, 100.0);
        paddle.recenter(70.0);
        assert_eq!(paddle.rect.h, 70.0);
        assert_eq!(paddle.rect.y, SCREEN_HEIGHT / 2.0 - 35.0);
        assert_eq!(paddle.rect.x, LEFT_PADDLE_X);
    }

    #[test]
    fn test_pool_respawns_and_expires() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut pool = ParticlePool::default();
        let spawn = Vec2::new(70.0, 400.0);

        // With ~5% per slot per tick, 500 ticks will arm slots many times over
        for _ in 0..500 {
            pool.update(1.0 / 60.0, &mut rng, spawn, LAVA_COLOR);
        }
        assert!(pool.iter_alive().count() > 0);
        for p in pool.iter_alive() {
            // Fresh lifetimes are drawn from 0.5..=1.0 and only decay
            assert!(p.lifetime <= 1.0);
            assert_eq!(p.color, LAVA_COLOR);
        }

        // Starve the pool of respawns by never rolling: just tick lifetimes down
        let mut drained = pool.clone();
        for _ in 0..120 {
            for slot in drained.slots.iter_mut().filter(|s| s.alive()) {
                slot.lifetime -= 1.0 / 60.0;
            }
        }
        assert_eq!(drained.iter_alive().count(), 0);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(1);
        state.push_event(GameEvent::WallBounce);
        state.push_event(GameEvent::Score(Side::Left));
        let drained = state.drain_events();
        assert_eq!(drained.len(), 2);
        assert!(state.events.is_empty());
    }
}
