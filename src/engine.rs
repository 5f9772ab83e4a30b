//! The engine instance
//!
//! One `Engine` per game session owns the live world, the run stats and a
//! settings mirror, and exposes the command surface the UI drives. External
//! collaborators pull read-only snapshots once per frame; nothing outside
//! the engine mutates engine-owned state.

use crate::consts::MAX_DT;
use crate::settings::{Difficulty, Settings};
use crate::sim::{GameEvent, GameState, InputState, RunPhase, tick};
use crate::stats::Stats;

/// Read-only HUD projection of the current stats and run flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: u64,
    pub lives: u8,
    pub wave: u32,
    pub high_score: u64,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
}

/// An owned game session: world, stats, settings, and the most recent input
/// snapshot
pub struct Engine {
    state: GameState,
    stats: Stats,
    settings: Settings,
    input: InputState,
}

impl Engine {
    pub fn new(seed: u64) -> Self {
        Self::with_persisted(seed, Settings::default(), Stats::default())
    }

    /// Build a session around previously persisted settings and stats
    pub fn with_persisted(seed: u64, settings: Settings, stats: Stats) -> Self {
        Self {
            state: GameState::new(seed),
            stats,
            settings,
            input: InputState::default(),
        }
    }

    // --- loop ---

    /// Adopt the latest input snapshot; sampled at the start of each tick,
    /// last write wins
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Advance one tick. The delta is bounded to 50ms regardless of how long
    /// the host stalled.
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_DT);
        let input = self.input;
        tick(&mut self.state, &mut self.stats, &input, &self.settings, dt);
    }

    // --- run lifecycle commands ---

    /// Begin the run. A no-op unless the game has never started; the first
    /// tick after this seeds the initial wave.
    pub fn start(&mut self) {
        if self.state.phase != RunPhase::NotStarted {
            return;
        }
        self.state.phase = RunPhase::Running;
        self.state.events.push(GameEvent::Started);
        log::info!("game started");
    }

    /// Reset to a fresh wave-1 run from any state. The high-score board
    /// survives; everything live is cleared.
    pub fn restart(&mut self) {
        self.stats.reset_run();
        self.state.reset();
        self.state.events.push(GameEvent::Started);
        log::info!("game restarted");
    }

    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            RunPhase::Running => self.state.phase = RunPhase::Paused,
            RunPhase::Paused => self.state.phase = RunPhase::Running,
            _ => {}
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        match (self.state.phase, paused) {
            (RunPhase::Running, true) => self.state.phase = RunPhase::Paused,
            (RunPhase::Paused, false) => self.state.phase = RunPhase::Running,
            _ => {}
        }
    }

    /// Adopt new playfield bounds (host resize), keeping the player inside
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    // --- settings commands ---

    pub fn set_volume(&mut self, v: f32) {
        self.settings.set_volume(v);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
    }

    /// Set difficulty from a raw string; unknown values fall back to normal
    pub fn set_difficulty_str(&mut self, difficulty: &str) {
        self.settings.set_difficulty_str(difficulty);
    }

    pub fn set_particles(&mut self, enabled: bool) {
        self.settings.particles = enabled;
    }

    pub fn toggle_mute(&mut self) {
        self.settings.muted = !self.settings.muted;
    }

    pub fn reset_settings(&mut self) {
        self.settings = Settings::default();
    }

    // --- read-only views ---

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.stats.score,
            lives: self.stats.lives,
            wave: self.stats.wave,
            high_score: self.stats.high_score,
            started: self.state.phase != RunPhase::NotStarted,
            paused: self.state.phase == RunPhase::Paused,
            game_over: self.state.phase == RunPhase::GameOver,
        }
    }

    /// Entity view for the renderer
    pub fn world(&self) -> &GameState {
        &self.state
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Settings mirror for a settings UI
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> RunPhase {
        self.state.phase
    }

    /// Take this tick's events (audio cues, life losses, game over)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STARTING_LIVES;
    use crate::sim::AudioCue;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_nothing_moves_before_start() {
        let mut engine = Engine::new(3);
        engine.set_input(InputState {
            right: true,
            shoot: true,
            ..Default::default()
        });
        engine.step(DT);

        assert_eq!(engine.phase(), RunPhase::NotStarted);
        assert!(engine.world().enemies.is_empty());
        assert!(engine.world().bullets.is_empty());
    }

    #[test]
    fn test_start_begins_running_and_seeds_wave() {
        let mut engine = Engine::new(3);
        engine.start();
        assert_eq!(engine.phase(), RunPhase::Running);
        assert!(engine.drain_events().contains(&GameEvent::Started));

        engine.step(DT);
        assert_eq!(engine.world().enemies.len(), 6);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut engine = Engine::new(3);
        engine.start();
        engine.step(DT);
        engine.drain_events();

        let hud = engine.hud();
        let enemies = engine.world().enemies.len();
        let bullets = engine.world().bullets.len();

        engine.start();

        assert_eq!(engine.hud(), hud);
        assert_eq!(engine.world().enemies.len(), enemies);
        assert_eq!(engine.world().bullets.len(), bullets);
        assert!(engine.drain_events().is_empty(), "second start emits nothing");
    }

    #[test]
    fn test_restart_resets_run_and_preserves_board() {
        let mut engine = Engine::new(3);
        engine.start();
        engine.step(DT);
        engine.stats.score = 500;
        engine.stats.high_score = 500;
        engine.stats.high_scores = vec![500, 120];
        engine.stats.lives = 0;
        engine.state.phase = RunPhase::GameOver;

        engine.restart();

        let hud = engine.hud();
        assert_eq!(hud.score, 0);
        assert_eq!(hud.lives, STARTING_LIVES);
        assert_eq!(hud.wave, 1);
        assert!(!hud.game_over);
        assert!(!hud.paused);
        assert!(hud.started);
        assert!(engine.world().enemies.is_empty());
        assert!(engine.world().bullets.is_empty());
        assert!(engine.world().enemy_bullets.is_empty());
        assert!(engine.world().particles.is_empty());
        assert_eq!(engine.stats().high_scores, vec![500, 120]);
        assert_eq!(engine.stats().high_score, 500);

        // First tick after restart reseeds wave 1
        engine.step(DT);
        assert_eq!(engine.world().enemies.len(), 6);
    }

    #[test]
    fn test_pause_toggle_round_trip() {
        let mut engine = Engine::new(3);
        engine.start();

        engine.toggle_pause();
        assert_eq!(engine.phase(), RunPhase::Paused);

        // Paused ticks change nothing
        engine.step(DT);
        assert!(engine.world().enemies.is_empty());

        engine.toggle_pause();
        assert_eq!(engine.phase(), RunPhase::Running);
    }

    #[test]
    fn test_pause_is_noop_when_game_over_or_not_started() {
        let mut engine = Engine::new(3);
        engine.toggle_pause();
        assert_eq!(engine.phase(), RunPhase::NotStarted);

        engine.start();
        engine.state.phase = RunPhase::GameOver;
        engine.toggle_pause();
        engine.set_paused(true);
        assert_eq!(engine.phase(), RunPhase::GameOver);
    }

    #[test]
    fn test_set_paused_explicit_states() {
        let mut engine = Engine::new(3);
        engine.start();

        engine.set_paused(true);
        assert_eq!(engine.phase(), RunPhase::Paused);
        // Redundant pause stays paused
        engine.set_paused(true);
        assert_eq!(engine.phase(), RunPhase::Paused);

        engine.set_paused(false);
        assert_eq!(engine.phase(), RunPhase::Running);
    }

    #[test]
    fn test_settings_commands() {
        let mut engine = Engine::new(3);

        engine.set_volume(2.0);
        assert_eq!(engine.settings().volume, 1.0);

        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.settings().difficulty, Difficulty::Hard);

        engine.set_difficulty_str("bogus");
        assert_eq!(engine.settings().difficulty, Difficulty::Normal);

        engine.set_particles(false);
        assert!(!engine.settings().particles);

        engine.toggle_mute();
        assert!(engine.settings().muted);
        engine.toggle_mute();
        assert!(!engine.settings().muted);

        engine.set_volume(0.1);
        engine.reset_settings();
        assert_eq!(*engine.settings(), Settings::default());
    }

    #[test]
    fn test_step_clamps_delta() {
        // 200ms of wall time in, at most 50ms of motion out
        let mut engine = Engine::new(3);
        engine.start();
        engine.step(DT); // seed the wave
        let y0 = engine.world().enemies[0].pos.y;

        engine.step(0.2);

        let moved = engine.world().enemies[0].pos.y - y0;
        let expected = engine.settings().difficulty.descent_speed() * MAX_DT;
        assert!((moved - expected).abs() < 1e-4);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut engine = Engine::new(3);
        engine.start();
        engine.set_input(InputState {
            shoot: true,
            ..Default::default()
        });
        engine.step(DT);

        let events = engine.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Cue {
                cue: AudioCue::Shoot,
                ..
            }
        )));
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_resize_keeps_player_inside() {
        let mut engine = Engine::new(3);
        engine.start();
        engine.resize(200.0, 300.0);
        let p = &engine.world().player;
        assert!(p.pos.x + p.size.x <= 200.0);
        assert!(p.pos.y + p.size.y <= 300.0);
    }

    #[test]
    fn test_hud_reflects_run_state() {
        let mut engine = Engine::new(3);
        let hud = engine.hud();
        assert!(!hud.started && !hud.paused && !hud.game_over);
        assert_eq!(hud.lives, STARTING_LIVES);
        assert_eq!(hud.wave, 1);

        engine.start();
        engine.step(DT);
        assert!(engine.hud().started);

        // Drop an enemy bullet on the ship until the run ends
        while !engine.hud().game_over {
            engine.state.enemy_bullets.push(crate::sim::Bullet {
                pos: engine.state.player.pos,
                size: Vec2::new(6.0, 10.0),
                vy: 0.0,
                big: false,
            });
            engine.step(DT);
        }
        assert_eq!(engine.hud().lives, 0);
        assert!(engine.hud().game_over);
    }
}
