//! Frame-loop driver
//!
//! Pure scheduling: samples real elapsed time since the previous frame,
//! bounds it, and advances the engine exactly once. Holds no simulation
//! state beyond the previous timestamp, so it can be stopped between any
//! two ticks, and re-arming it never leaves a stale time base behind (no
//! double loop).

use std::time::Instant;

use crate::consts::MAX_DT;
use crate::engine::Engine;

pub struct LoopDriver {
    last: Option<Instant>,
    running: bool,
}

impl LoopDriver {
    pub fn new() -> Self {
        Self {
            last: None,
            running: false,
        }
    }

    /// Arm the loop. Starting while already running restarts the time base,
    /// so a prior loop can never keep driving the engine.
    pub fn start(&mut self) {
        self.running = true;
        self.last = None;
    }

    /// Cancel the loop; frames become no-ops until the next `start`
    pub fn stop(&mut self) {
        self.running = false;
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Drive one frame off the host clock. Returns the simulated delta, or
    /// `None` when the loop is stopped (no render pass should follow).
    pub fn frame(&mut self, engine: &mut Engine) -> Option<f32> {
        self.frame_at(engine, Instant::now())
    }

    /// Clock-injected variant of [`frame`](Self::frame)
    pub fn frame_at(&mut self, engine: &mut Engine, now: Instant) -> Option<f32> {
        if !self.running {
            return None;
        }
        let dt = match self.last {
            // The first frame after start only establishes the time base
            None => 0.0,
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32().min(MAX_DT),
        };
        self.last = Some(now);
        engine.step(dt);
        Some(dt)
    }
}

impl Default for LoopDriver {
    fn default() -> Self {
        Self::new()
    }
}
