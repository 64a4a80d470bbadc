//! Data-driven game balance
//!
//! Every tunable that differs between difficulty levels lives in one table
//! here. Adding a level means adding a row, not hunting branches.

use serde::{Deserialize, Serialize};

/// Difficulty levels, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, in menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// The preset row for this level
    pub fn preset(&self) -> Preset {
        match self {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }
}

/// One row of the balance table
///
/// Speeds are pixels per tick at the fixed 60 Hz timestep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Ball launch speed per axis
    pub ball_speed: f32,
    /// Cap on the ball's vertical speed (spin accumulates toward this)
    pub max_speed: f32,
    /// Player paddle speed
    pub paddle_speed: f32,
    /// Computer paddle tracking speed
    pub ai_speed: f32,
    /// Paddle height (shorter paddles = harder)
    pub paddle_height: f32,
}

const EASY: Preset = Preset {
    ball_speed: 4.0,
    max_speed: 8.0,
    paddle_speed: 7.0,
    ai_speed: 3.0,
    paddle_height: 150.0,
};

const MEDIUM: Preset = Preset {
    ball_speed: 5.0,
    max_speed: 12.0,
    paddle_speed: 6.0,
    ai_speed: 5.0,
    paddle_height: 100.0,
};

const HARD: Preset = Preset {
    ball_speed: 7.0,
    max_speed: 15.0,
    paddle_speed: 5.0,
    ai_speed: 7.0,
    paddle_height: 70.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_preset() {
        let p = Difficulty::Easy.preset();
        assert_eq!(p.ball_speed, 4.0);
        assert_eq!(p.max_speed, 8.0);
        assert_eq!(p.paddle_speed, 7.0);
        assert_eq!(p.ai_speed, 3.0);
        assert_eq!(p.paddle_height, 150.0);
    }

    #[test]
    fn test_medium_preset() {
        let p = Difficulty::Medium.preset();
        assert_eq!(p.ball_speed, 5.0);
        assert_eq!(p.max_speed, 12.0);
        assert_eq!(p.paddle_speed, 6.0);
        assert_eq!(p.ai_speed, 5.0);
        assert_eq!(p.paddle_height, 100.0);
    }

    #[test]
    fn test_hard_preset() {
        let p = Difficulty::Hard.preset();
        assert_eq!(p.ball_speed, 7.0);
        assert_eq!(p.max_speed, 15.0);
        assert_eq!(p.paddle_speed, 5.0);
        assert_eq!(p.ai_speed, 7.0);
        assert_eq!(p.paddle_height, 70.0);
    }

    #[test]
    fn test_harder_levels_shrink_the_paddle() {
        let heights: Vec<f32> = Difficulty::ALL
            .iter()
            .map(|d| d.preset().paddle_height)
            .collect();
        assert!(heights.windows(2).all(|w| w[0] > w[1]));
    }
}
