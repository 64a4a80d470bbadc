//! Audio cues
//!
//! Procedurally generated sound effects - no external files needed. The
//! simulation queues [`GameEvent`]s; a sink maps them to effects. Headless
//! runs (and the silent edition) use [`NullAudio`].

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball hits the top/bottom edge
    WallHit,
    /// Ball hits a center-line obstacle
    ObstacleHit,
    /// A point is scored
    Score,
    /// Menu cursor moved
    MenuMove,
    /// Menu selection confirmed
    MenuSelect,
    /// Match decided
    MatchWon,
}

impl SoundEffect {
    /// Map a simulation event to its cue
    pub fn from_event(event: GameEvent) -> Self {
        match event {
            GameEvent::PaddleHit => SoundEffect::PaddleHit,
            GameEvent::WallBounce => SoundEffect::WallHit,
            GameEvent::ObstacleHit => SoundEffect::ObstacleHit,
            GameEvent::Score(_) => SoundEffect::Score,
            GameEvent::MenuMove => SoundEffect::MenuMove,
            GameEvent::MenuConfirm => SoundEffect::MenuSelect,
            GameEvent::MatchWon(_) => SoundEffect::MatchWon,
        }
    }
}

/// Destination for sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every cue
///
/// Used by the native headless entry and by tests; also what you get when
/// the browser refuses to hand out an audio context.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    //! Web Audio implementation: every effect is a couple of oscillators
    //! with a gain envelope.

    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, SoundEffect};

    /// Oscillator-synth sink backed by the Web Audio API
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        master_volume: f32,
        muted: bool,
    }

    impl Default for WebAudio {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudio {
        pub fn new() -> Self {
            // May fail outside a secure context; the game plays on silently
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: 0.8,
                muted: false,
            }
        }

        /// Resume the audio context (required after a user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.master_volume }
        }

        /// Create an oscillator wired through a gain node
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Paddle hit - solid thump, pitch dropping off
        fn play_paddle_hit(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 180.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.5, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.frequency().set_value_at_time(180.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(70.0, t + 0.1)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Wall bounce - short high ping
        fn play_wall_hit(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 420.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.08)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.1).ok();
        }

        /// Obstacle hit - hollow metallic knock
        fn play_obstacle_hit(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            if let Some((osc, gain)) = self.create_osc(ctx, 260.0, OscillatorType::Square) {
                gain.gain().set_value_at_time(vol * 0.25, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                    .ok();
                osc.frequency().set_value_at_time(260.0, t).ok();
                osc.frequency().set_value_at_time(200.0, t + 0.05).ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.15).ok();
            }

            if let Some((osc, gain)) = self.create_osc(ctx, 90.0, OscillatorType::Sine) {
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.12).ok();
            }
        }

        /// Score - two quick rising notes
        fn play_score(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [500.0, 750.0].iter().enumerate() {
                let delay = i as f64 * 0.1;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.25).ok();
                }
            }
        }

        /// Menu cursor - soft tick
        fn play_menu_move(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 700.0, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.15, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.05)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.07).ok();
        }

        /// Menu confirm - happy ding
        fn play_menu_select(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [600.0, 900.0].iter().enumerate() {
                let delay = i as f64 * 0.06;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.25, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.2).ok();
                }
            }
        }

        /// Match won - four-note fanfare
        fn play_match_won(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [400.0, 500.0, 600.0, 800.0].iter().enumerate() {
                let delay = i as f64 * 0.12;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.35)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.4).ok();
                }
            }
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, effect: SoundEffect) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers suspend the context until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::PaddleHit => self.play_paddle_hit(ctx, vol),
                SoundEffect::WallHit => self.play_wall_hit(ctx, vol),
                SoundEffect::ObstacleHit => self.play_obstacle_hit(ctx, vol),
                SoundEffect::Score => self.play_score(ctx, vol),
                SoundEffect::MenuMove => self.play_menu_move(ctx, vol),
                SoundEffect::MenuSelect => self.play_menu_select(ctx, vol),
                SoundEffect::MatchWon => self.play_match_won(ctx, vol),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[test]
    fn test_event_mapping_covers_scoring() {
        assert_eq!(
            SoundEffect::from_event(GameEvent::Score(Side::Left)),
            SoundEffect::Score
        );
        assert_eq!(
            SoundEffect::from_event(GameEvent::Score(Side::Right)),
            SoundEffect::Score
        );
        assert_eq!(
            SoundEffect::from_event(GameEvent::MatchWon(Side::Right)),
            SoundEffect::MatchWon
        );
    }

    #[test]
    fn test_null_sink_swallows_everything() {
        let mut sink = NullAudio;
        for event in [
            GameEvent::PaddleHit,
            GameEvent::WallBounce,
            GameEvent::ObstacleHit,
            GameEvent::MenuMove,
            GameEvent::MenuConfirm,
        ] {
            sink.play(SoundEffect::from_event(event));
        }
    }
}
