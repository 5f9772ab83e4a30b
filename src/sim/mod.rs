//! Simulation module
//!
//! All gameplay logic lives here, free of rendering, input and platform
//! dependencies:
//! - Bounded delta-time only (the step clamps what it is handed)
//! - Entity collections owned by one `GameState` per session
//! - Randomness from a per-session `Pcg32` stream

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, clamp, intersects};
pub use state::{
    AudioCue, Bullet, CreatureKind, Enemy, GameEvent, GameState, Particle, Player, RunPhase,
    PARTICLE_BIG_SPARK, PARTICLE_DEBRIS, PARTICLE_SPARK,
};
pub use tick::{InputState, spawn_wave, tick};
