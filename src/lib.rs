//! Nova Raid - a wave-defense arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Simulation step (entities, collisions, wave spawning)
//! - `engine`: Owned engine instance exposing the command surface
//! - `driver`: Frame-loop driver with bounded delta-time
//! - `settings` / `stats`: Persisted preference and score blobs
//! - `persistence`: Key-value storage the blobs serialize through
//! - `audio`: Cue-event collaborator

pub mod audio;
pub mod driver;
pub mod engine;
pub mod persistence;
pub mod settings;
pub mod sim;
pub mod stats;

pub use engine::{Engine, HudSnapshot};
pub use settings::{Difficulty, Settings};
pub use stats::Stats;

/// Game configuration constants
pub mod consts {
    /// Maximum delta-time fed into one simulation step (bounds tab-stall blowups)
    pub const MAX_DT: f32 = 0.05;

    /// Default playfield dimensions
    pub const PLAYFIELD_W: f32 = 480.0;
    pub const PLAYFIELD_H: f32 = 600.0;

    /// Player ship defaults
    pub const PLAYER_W: f32 = 48.0;
    pub const PLAYER_H: f32 = 20.0;
    pub const PLAYER_START_X: f32 = 240.0;
    pub const PLAYER_START_Y: f32 = 540.0;
    pub const PLAYER_SPEED: f32 = 300.0;

    /// Player fire: in-flight cap and upward muzzle velocity
    pub const MAX_PLAYER_BULLETS: usize = 6;
    pub const PLAYER_BULLET_VY: f32 = -500.0;

    /// Bullet dimensions (big enemies fire the larger shape)
    pub const BULLET_W: f32 = 6.0;
    pub const BULLET_H: f32 = 10.0;
    pub const BIG_BULLET_W: f32 = 12.0;
    pub const BIG_BULLET_H: f32 = 20.0;

    /// Enemy defaults
    pub const ENEMY_W: f32 = 36.0;
    pub const ENEMY_H: f32 = 28.0;
    /// Linear size multiplier for "big" enemies
    pub const BIG_ENEMY_SCALE: f32 = 1.8;

    /// Wave layout: left/top spawn margins and horizontal spacing
    pub const SPAWN_LEFT: f32 = 40.0;
    pub const SPAWN_TOP: f32 = 40.0;
    pub const SPAWN_SPACING: f32 = 70.0;
    /// Side margin enemies bounce off
    pub const SIDE_MARGIN: f32 = 10.0;

    /// Enemy fire: downward velocity range and cooldown range (seconds,
    /// divided by the difficulty multiplier)
    pub const ENEMY_BULLET_VY_MIN: f32 = 180.0;
    pub const ENEMY_BULLET_VY_MAX: f32 = 300.0;
    pub const SHOOT_COOLDOWN_MIN: f32 = 1.0;
    pub const SHOOT_COOLDOWN_MAX: f32 = 4.0;
    /// Enemy shots play quieter than player shots
    pub const ENEMY_SHOOT_VOLUME: f32 = 0.9;

    /// Particles: burst sizes, downward acceleration, lifetimes
    pub const HIT_PARTICLES: usize = 10;
    pub const KILL_PARTICLES: usize = 15;
    pub const PARTICLE_GRAVITY: f32 = 300.0;
    pub const HIT_PARTICLE_LIFE: f32 = 0.6;
    pub const KILL_PARTICLE_LIFE: f32 = 0.8;

    /// Entities despawn this far past the playfield edge
    pub const OFFSCREEN_PAD: f32 = 20.0;

    /// Scoring
    pub const SCORE_NORMAL: u64 = 10;
    pub const SCORE_BIG: u64 = 30;

    pub const STARTING_LIVES: u8 = 3;

    /// How long a big enemy shows its health after a hit (seconds)
    pub const HEALTH_DISPLAY_SECS: f32 = 2.0;
}
