//! Sound-event collaborator interface
//!
//! The simulation emits [`GameEvent`]s; hosts that can make noise
//! implement [`AudioSink`] and feed each frame's events through
//! [`route_events`]. Playback is fire-and-forget: a sink that cannot play
//! a sound just drops it, and the core never hears about it.

use crate::sim::GameEvent;

/// Sound effect kinds the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball bounced off a wall or paddle
    Hit,
    /// A side scored
    Score,
    /// Powerup token consumed
    Powerup,
}

/// Fire-and-forget sound playback, implemented by the host
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that drops every sound, for headless hosts and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Map one frame's events to their sound effects
pub fn route_events(events: &[GameEvent], sink: &mut dyn AudioSink) {
    for event in events {
        match event {
            GameEvent::WallHit | GameEvent::PaddleHit(_) => sink.play(SoundEffect::Hit),
            GameEvent::Goal { .. } => sink.play(SoundEffect::Score),
            GameEvent::PowerupHit { .. } => sink.play(SoundEffect::Powerup),
            GameEvent::NewHighScore(_) | GameEvent::MatchOver { .. } => {}
        }
    }
}
