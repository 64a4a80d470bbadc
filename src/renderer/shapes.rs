//! Shape generation for 2D primitives
//!
//! Everything is triangles: rectangles are two, circles are a fan, lines
//! are thin quads. `scene` assembles the whole frame from a read-only view
//! of the session state; text overlays live in the DOM, not here.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{colors, Vertex};
use crate::consts::*;
use crate::sim::{GameState, Rect, Screen, Side};

/// Append a filled rectangle (two triangles)
pub fn push_rect(out: &mut Vec<Vertex>, rect: &Rect, color: [f32; 4]) {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.right(), rect.bottom());

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x0, y1, color));
}

/// Append a filled circle as a triangle fan
pub fn push_circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Append a line segment as a thin quad
pub fn push_line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(d.x, d.y, color));
}

/// Star color depends on which half of the court it sits in during play
fn star_color(screen: Screen, x: f32) -> [f32; 4] {
    match screen {
        Screen::Playing | Screen::GameOver => {
            if x < SCREEN_WIDTH / 2.0 {
                colors::STAR_LAVA
            } else {
                colors::STAR_ICE
            }
        }
        _ => colors::STAR,
    }
}

/// Build the full frame for the current state
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(2048);

    // Background layers first
    for star in &state.stars {
        let c = star_color(state.screen, star.x);
        push_rect(&mut out, &Rect::new(star.x, star.y, 2.0, 2.0), c);
    }
    for drop in &state.rain {
        push_line(
            &mut out,
            drop.pos,
            Vec2::new(drop.pos.x, drop.pos.y + drop.len),
            1.5,
            colors::RAIN,
        );
    }

    // Menu screens are background + DOM text only
    if !matches!(state.screen, Screen::Playing | Screen::GameOver) {
        return out;
    }

    // Dashed center line
    let mut y = 0.0;
    while y < SCREEN_HEIGHT {
        push_rect(
            &mut out,
            &Rect::new(SCREEN_WIDTH / 2.0 - 1.0, y, 2.0, 10.0),
            colors::CENTER_LINE,
        );
        y += 20.0;
    }

    for obstacle in &state.obstacles {
        let c = if obstacle.center().x < SCREEN_WIDTH / 2.0 {
            colors::OBSTACLE_LEFT
        } else {
            colors::OBSTACLE_RIGHT
        };
        push_rect(&mut out, obstacle, c);
    }

    push_rect(&mut out, &state.left_paddle.rect, colors::PADDLE_LEFT);
    push_rect(&mut out, &state.right_paddle.rect, colors::PADDLE_RIGHT);

    push_circle(&mut out, state.ball.pos, state.ball.radius, colors::BALL, 32);

    // Sparks fade out with their remaining lifetime
    for pool in [&state.lava_particles, &state.ice_particles] {
        for p in pool.iter_alive() {
            let mut c = p.color;
            c[3] = p.lifetime.min(1.0);
            push_circle(&mut out, p.pos, 3.0, c, 12);
        }
    }

    push_rect(&mut out, &GameState::back_button(), colors::BACK_BUTTON);

    // Winner banner text is DOM; tint the loser's half down a touch
    if let Some(winner) = state.winner {
        let shade = Rect::new(
            match winner {
                Side::Left => SCREEN_WIDTH / 2.0,
                Side::Right => 0.0,
            },
            0.0,
            SCREEN_WIDTH / 2.0,
            SCREEN_HEIGHT,
        );
        push_rect(&mut out, &shade, [0.0, 0.0, 0.0, 0.35]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{tick, TickInput};

    #[test]
    fn test_rect_is_two_triangles() {
        let mut out = Vec::new();
        push_rect(&mut out, &Rect::new(0.0, 0.0, 10.0, 10.0), colors::BALL);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_circle_fan_size() {
        let mut out = Vec::new();
        push_circle(&mut out, Vec2::ZERO, 5.0, colors::BALL, 16);
        assert_eq!(out.len(), 16 * 3);
    }

    #[test]
    fn test_menu_scene_is_background_only() {
        let state = GameState::new(1);
        let verts = scene(&state);
        // Stars (6 each) + rain (6 each), nothing else
        assert_eq!(verts.len(), NUM_STARS * 6 + NUM_RAINDROPS * 6);
    }

    #[test]
    fn test_playing_scene_includes_the_court() {
        let mut state = GameState::new(2);
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        for _ in 0..3 {
            tick(&mut state, &confirm, SIM_DT);
        }
        assert_eq!(state.screen, Screen::Playing);

        let background_only = NUM_STARS * 6 + NUM_RAINDROPS * 6;
        assert!(scene(&state).len() > background_only);
    }
}
