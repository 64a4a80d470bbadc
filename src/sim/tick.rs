//! Fixed timestep simulation tick
//!
//! One call advances the session by one 60 Hz step: menu screens react to
//! edge-triggered input, the playing screen runs the physics/scoring update
//! in a fixed order that is part of the game's feel and must not be
//! re-shuffled.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{circle_overlaps_rect, reflect_horizontal, reflect_vertical};
use super::state::{GameEvent, GameMode, GameState, Screen, Side, ICE_COLOR, LAVA_COLOR};
use crate::consts::*;
use crate::tuning::Difficulty;

/// Input snapshot for a single tick (deterministic)
///
/// Edge fields are true only on the tick the key/button went down; held
/// fields mirror the current key level. The frontend clears edges after
/// each processed tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in logical screen coordinates
    pub pointer: Vec2,
    /// Left mouse button went down this tick
    pub click: bool,
    /// Enter went down this tick
    pub confirm: bool,
    /// Escape went down this tick
    pub back: bool,
    /// Menu cursor edges (arrow keys on menu screens)
    pub menu_up: bool,
    pub menu_down: bool,
    /// Right paddle keys, held (Up/Down arrows)
    pub up_held: bool,
    pub down_held: bool,
    /// Left paddle keys, held (W/S)
    pub w_held: bool,
    pub s_held: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // Rain falls on every screen
    update_rain(state);

    match state.screen {
        Screen::Menu => {
            // Only confirm leaves the title screen
            if input.confirm {
                state.screen = Screen::ModeSelect;
                state.push_event(GameEvent::MenuConfirm);
            }
        }

        Screen::ModeSelect => {
            let (cursor, moved) = step_cursor(
                state.mode_cursor,
                GameMode::ALL.len(),
                input.menu_up,
                input.menu_down,
            );
            state.mode_cursor = cursor;
            if moved {
                state.push_event(GameEvent::MenuMove);
            }
            if input.confirm {
                state.mode = GameMode::ALL[state.mode_cursor];
                state.screen = Screen::DifficultySelect;
                state.push_event(GameEvent::MenuConfirm);
            } else if input.back {
                state.screen = Screen::Menu;
            }
        }

        Screen::DifficultySelect => {
            let (cursor, moved) = step_cursor(
                state.difficulty_cursor,
                Difficulty::ALL.len(),
                input.menu_up,
                input.menu_down,
            );
            state.difficulty_cursor = cursor;
            if moved {
                state.push_event(GameEvent::MenuMove);
            }
            if input.confirm {
                state.difficulty = Difficulty::ALL[state.difficulty_cursor];
                start_round(state);
                state.push_event(GameEvent::MenuConfirm);
            } else if input.back {
                state.screen = Screen::ModeSelect;
            }
        }

        Screen::Playing => update_playing(state, input, dt),

        Screen::GameOver => {
            if input.confirm {
                // Rematch path
                state.screen = Screen::ModeSelect;
                state.push_event(GameEvent::MenuConfirm);
            } else if input.back
                || (input.click && GameState::back_button().contains_point(input.pointer))
            {
                state.screen = Screen::Menu;
            }
        }
    }
}

/// Apply the selected preset and launch a fresh round
fn start_round(state: &mut GameState) {
    let preset = state.difficulty.preset();
    state.preset = preset;
    state.left_score = 0;
    state.right_score = 0;
    state.winner = None;
    state.left_paddle.recenter(preset.paddle_height);
    state.right_paddle.recenter(preset.paddle_height);
    state.lava_particles.clear();
    state.ice_particles.clear();
    launch_ball(state);
    state.screen = Screen::Playing;
}

/// Recenter the ball and send it off on a random diagonal at preset speed
fn launch_ball(state: &mut GameState) {
    let speed = state.preset.ball_speed;
    state.ball.pos = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    state.ball.vel = Vec2::new(
        speed * random_sign(&mut state.rng),
        speed * random_sign(&mut state.rng),
    );
}

fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random_range(0..2) == 0 { 1.0 } else { -1.0 }
}

fn step_cursor(cursor: usize, len: usize, up: bool, down: bool) -> (usize, bool) {
    let mut c = cursor;
    let mut moved = false;
    if up {
        c = (c + len - 1) % len;
        moved = true;
    }
    if down {
        c = (c + 1) % len;
        moved = true;
    }
    (c, moved)
}

/// One playing-screen step; the order of operations here is load-bearing
fn update_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    // 1. Integrate ball position
    state.ball.pos += state.ball.vel;

    // 2. Horizontal bounds -> scoring
    if state.ball.pos.x >= SCREEN_WIDTH - state.ball.radius {
        award_point(state, Side::Left);
    } else if state.ball.pos.x <= state.ball.radius {
        award_point(state, Side::Right);
    }

    // 3. Top/bottom bounce
    if state.ball.pos.y >= SCREEN_HEIGHT - state.ball.radius
        || state.ball.pos.y <= state.ball.radius
    {
        state.ball.vel = reflect_vertical(state.ball.vel);
        state.push_event(GameEvent::WallBounce);
    }

    // 4. Paddle control
    match state.mode {
        GameMode::PlayerVsPlayer => {
            // Left paddle rides the pointer, right paddle uses the arrows
            state.left_paddle.rect.y = input.pointer.y - state.left_paddle.rect.h / 2.0;
            if input.up_held {
                state.right_paddle.rect.y -= state.preset.paddle_speed;
            }
            if input.down_held {
                state.right_paddle.rect.y += state.preset.paddle_speed;
            }
        }
        GameMode::PlayerVsAi => {
            if input.w_held {
                state.left_paddle.rect.y -= state.preset.paddle_speed;
            }
            if input.s_held {
                state.left_paddle.rect.y += state.preset.paddle_speed;
            }
            // Step a fixed amount toward the ball. No prediction, no
            // easing; the oscillation when closer than one step is part of
            // the computer player's charm.
            let center = state.right_paddle.center_y();
            if center < state.ball.pos.y {
                state.right_paddle.rect.y += state.preset.ai_speed;
            } else if center > state.ball.pos.y {
                state.right_paddle.rect.y -= state.preset.ai_speed;
            }
        }
    }

    // 5. Keep paddles on screen
    state.left_paddle.clamp_to_screen();
    state.right_paddle.clamp_to_screen();

    // 6. Ball vs paddles: flip horizontally, snap flush to the face so the
    //    hit cannot re-trigger next tick, and add spin
    if circle_overlaps_rect(state.ball.pos, state.ball.radius, &state.left_paddle.rect) {
        state.ball.vel = reflect_horizontal(state.ball.vel);
        state.ball.pos.x = state.left_paddle.rect.right() + state.ball.radius;
        state.ball.vel.y += spin_nudge(state.ball.vel.y);
        state.push_event(GameEvent::PaddleHit);
    }
    if circle_overlaps_rect(state.ball.pos, state.ball.radius, &state.right_paddle.rect) {
        state.ball.vel = reflect_horizontal(state.ball.vel);
        state.ball.pos.x = state.right_paddle.rect.x - state.ball.radius;
        state.ball.vel.y += spin_nudge(state.ball.vel.y);
        state.push_event(GameEvent::PaddleHit);
    }

    // 7. Ball vs obstacles: full reversal, then step out along the new
    //    heading. Independent of the paddle checks above; if both fire in
    //    one tick the ball gets both flips. Paddles and obstacles never
    //    overlap in the layout, so this stays a curiosity, not a bug.
    for obstacle in state.obstacles {
        if circle_overlaps_rect(state.ball.pos, state.ball.radius, &obstacle) {
            state.ball.vel = -state.ball.vel;
            state.ball.pos += state.ball.vel;
            state.push_event(GameEvent::ObstacleHit);
        }
    }

    // 8. Spin accumulates; cap the vertical speed
    let max = state.preset.max_speed;
    state.ball.vel.y = state.ball.vel.y.clamp(-max, max);

    // 9. Trail sparks off each paddle's inner face
    let left_spawn = Vec2::new(state.left_paddle.rect.right(), state.left_paddle.center_y());
    let right_spawn = Vec2::new(state.right_paddle.rect.x, state.right_paddle.center_y());
    state
        .lava_particles
        .update(dt, &mut state.rng, left_spawn, LAVA_COLOR);
    state
        .ice_particles
        .update(dt, &mut state.rng, right_spawn, ICE_COLOR);

    // 10. Back button bails out to difficulty select
    if input.click && GameState::back_button().contains_point(input.pointer) {
        state.screen = Screen::DifficultySelect;
    }
}

/// Score for `side`; relaunch the ball, or end the match at the win score
fn award_point(state: &mut GameState, side: Side) {
    let score = match side {
        Side::Left => {
            state.left_score += 1;
            state.left_score
        }
        Side::Right => {
            state.right_score += 1;
            state.right_score
        }
    };

    if score >= WIN_SCORE {
        state.winner = Some(side);
        state.screen = Screen::GameOver;
        state.push_event(GameEvent::MatchWon(side));
    } else {
        state.push_event(GameEvent::Score(side));
        launch_ball(state);
    }
}

/// Advance the ambient rain; drops recycle at the top with a fresh column
fn update_rain(state: &mut GameState) {
    for raindrop in &mut state.rain {
        raindrop.pos.y += raindrop.speed;
        if raindrop.pos.y - raindrop.len > SCREEN_HEIGHT {
            raindrop.pos.y = -raindrop.len;
            raindrop.pos.x = state.rng.random_range(0..=SCREEN_WIDTH as i32) as f32;
        }
    }
}

/// Original spin rule: half a pixel per tick, in the current sign direction
fn spin_nudge(vy: f32) -> f32 {
    if vy > 0.0 { PADDLE_SPIN } else { -PADDLE_SPIN }
}
