//! Audio collaborator
//!
//! The engine emits fire-and-forget cue events; this side owns playback
//! policy. Enabled-vs-disabled is a flag on the director, never an optional
//! capability on the command surface, and a backend that fails to
//! initialize degrades to silence rather than aborting the game.

use crate::sim::{AudioCue, GameEvent};

/// A playback backend for cues and music
pub trait CueSink {
    fn play(&mut self, cue: AudioCue, volume: f32);
    fn music_start(&mut self) {}
    fn music_stop(&mut self) {}
}

/// Discards every cue; for tests and hosts without audio
#[derive(Debug, Default)]
pub struct NullSink;

impl CueSink for NullSink {
    fn play(&mut self, _cue: AudioCue, _volume: f32) {}
}

/// Logs cues at debug level; the headless demo's "speaker"
#[derive(Debug, Default)]
pub struct DebugSink;

impl CueSink for DebugSink {
    fn play(&mut self, cue: AudioCue, volume: f32) {
        log::debug!("cue {cue:?} at volume {volume:.2}");
    }

    fn music_start(&mut self) {
        log::debug!("music start");
    }

    fn music_stop(&mut self) {
        log::debug!("music stop");
    }
}

/// Routes engine events to a playback backend
pub struct AudioDirector<S: CueSink> {
    sink: S,
    enabled: bool,
}

impl<S: CueSink> AudioDirector<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            enabled: true,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Consume one engine event. Non-audio events pass through silently.
    pub fn handle(&mut self, event: &GameEvent) {
        if !self.enabled {
            return;
        }
        match event {
            GameEvent::Cue { cue, volume } => self.sink.play(*cue, *volume),
            GameEvent::Started => self.sink.music_start(),
            GameEvent::GameOver => self.sink.music_stop(),
            _ => {}
        }
    }
}
