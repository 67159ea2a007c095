//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// New game started
    Start,
    /// Accepted shake
    Shuffle,
    /// Puzzle landed sorted
    Win,
}

impl SoundEffect {
    /// Sound for a session event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Started => Some(SoundEffect::Start),
            GameEvent::Shuffled => Some(SoundEffect::Shuffle),
            GameEvent::Won { .. } => Some(SoundEffect::Win),
            GameEvent::Reset => None,
        }
    }
}

/// Audio manager for the game
#[cfg(target_arch = "wasm32")]
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

#[cfg(target_arch = "wasm32")]
impl AudioManager {
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

    /// Play a sound effect (fire and forget)
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
            SoundEffect::Start => self.play_start(ctx, vol),
            SoundEffect::Shuffle => self.play_shuffle(ctx, vol),
            SoundEffect::Win => self.play_win(ctx, vol),
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

    /// Start - whoosh up
    fn play_start(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.2)
            .ok();
        osc.frequency().set_value_at_time(200.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(600.0, t + 0.15)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.25).ok();
    }

    /// Shuffle - soft rattle tap
    fn play_shuffle(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.2, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.05)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.08).ok();
    }

    /// Win - bright ascending ding
    fn play_win(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [660.0, 880.0, 1320.0].iter().enumerate() {
            let delay = i as f64 * 0.08;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.35, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.6)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.7).ok();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameSession, ScriptedShuffler};

    #[test]
    fn test_event_sounds() {
        assert_eq!(SoundEffect::for_event(&GameEvent::Started), Some(SoundEffect::Start));
        assert_eq!(SoundEffect::for_event(&GameEvent::Shuffled), Some(SoundEffect::Shuffle));
        assert_eq!(SoundEffect::for_event(&GameEvent::Reset), None);
    }

    #[test]
    fn test_win_sound_plays_once() {
        let script = ScriptedShuffler::from_arrays(vec![[2, 1, 3, 4, 5], [1, 2, 3, 4, 5]]);
        let mut session = GameSession::with_shuffler(3, Box::new(script));
        session.on_primary_action(0.0);
        session.on_player_input(50.0);
        // Inputs after the win are ignored and must not replay it
        session.on_player_input(100.0);
        session.on_key_down(150.0);

        let sounds: Vec<_> = session
            .drain_events()
            .iter()
            .filter_map(SoundEffect::for_event)
            .collect();
        assert_eq!(
            sounds,
            vec![SoundEffect::Start, SoundEffect::Shuffle, SoundEffect::Win]
        );
    }
}
