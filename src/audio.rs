//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!
//! The event-to-sound mapping is platform independent; playback is wasm only.

use crate::sim::{BallKind, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Normal ball caught
    Catch,
    /// Multiplier ball caught
    MultiplierCatch,
    /// Negative ball caught
    NegativeCatch,
    /// Ball fell past the bottom
    Miss,
    /// Countdown started
    CountdownStart,
    /// Balls start falling
    Go,
    /// Target hit exactly
    RoundComplete,
    /// Pause toggled
    Pause,
}

impl SoundEffect {
    /// Sound to play for a gameplay event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BallCaught { kind, .. } => Some(match kind {
                BallKind::Normal => SoundEffect::Catch,
                BallKind::Multiplier => SoundEffect::MultiplierCatch,
                BallKind::Negative => SoundEffect::NegativeCatch,
            }),
            GameEvent::BallMissed { .. } => Some(SoundEffect::Miss),
            GameEvent::CountdownStarted => Some(SoundEffect::CountdownStart),
            GameEvent::PlayStarted => Some(SoundEffect::Go),
            GameEvent::RoundCompleted { .. } => Some(SoundEffect::RoundComplete),
            GameEvent::Paused | GameEvent::Resumed => Some(SoundEffect::Pause),
            GameEvent::BallSpawned { .. } | GameEvent::GameReset => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        /// `volume` is the effective sfx volume (0.0 - 1.0)
        pub fn new(volume: f32) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: volume.clamp(0.0, 1.0),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Catch => self.play_blip(ctx, vol, 520.0, 780.0),
                SoundEffect::MultiplierCatch => self.play_multiplier(ctx, vol),
                SoundEffect::NegativeCatch => self.play_blip(ctx, vol, 420.0, 220.0),
                SoundEffect::Miss => self.play_miss(ctx, vol),
                SoundEffect::CountdownStart => self.play_tone(ctx, vol * 0.5, 440.0, 0.12),
                SoundEffect::Go => self.play_tone(ctx, vol * 0.6, 880.0, 0.2),
                SoundEffect::RoundComplete => self.play_round_complete(ctx, vol),
                SoundEffect::Pause => self.play_tone(ctx, vol * 0.3, 330.0, 0.08),
            }
        }

        // === Sound generators ===

        /// Create an oscillator with gain envelope
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

        /// Short pitch glide, up for gains and down for losses
        fn play_blip(&self, ctx: &AudioContext, vol: f32, from: f32, to: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, from, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(from, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(to, t + 0.1)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Plain beep
        fn play_tone(&self, ctx: &AudioContext, vol: f32, freq: f32, length: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + length)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + length + 0.02).ok();
        }

        /// Multiplier - two quick rising square chirps
        fn play_multiplier(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [600.0, 900.0].iter().enumerate() {
                let delay = i as f64 * 0.06;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Square) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.2, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.12).ok();
                }
            }
        }

        /// Miss - soft low thud
        fn play_miss(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 120.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.2, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                .ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(60.0, t + 0.15)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.2).ok();
        }

        /// Round complete - rising arpeggio
        fn play_round_complete(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [400.0, 500.0, 600.0, 800.0].iter().enumerate() {
                let delay = i as f64 * 0.1;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.5).ok();
                }
            }
        }
    }
}
