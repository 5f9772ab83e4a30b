//! Entity records and live game state
//!
//! Plain data only: all behavior lives in the tick. The engine owns one
//! `GameState` per session; external collaborators read it through the
//! engine's snapshot API and never mutate it directly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Rect, clamp};
use crate::consts::*;

/// Run lifecycle: NotStarted -> Running <-> Paused, Running -> GameOver,
/// GameOver -> Running via restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl RunPhase {
    /// Whether the simulation advances this tick
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, RunPhase::Running)
    }
}

/// Cosmetic enemy family, derived from the wave number. Purely a sprite
/// selector; no gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatureKind {
    Octopod,
    Insectoid,
    Biomech,
    Crystalline,
}

impl CreatureKind {
    pub fn for_wave(wave: u32) -> Self {
        if wave >= 7 {
            CreatureKind::Crystalline
        } else if wave >= 5 {
            CreatureKind::Biomech
        } else if wave >= 3 {
            CreatureKind::Insectoid
        } else {
            CreatureKind::Octopod
        }
    }

    /// Sprite sheet index for the renderer
    pub fn sprite_index(self) -> usize {
        match self {
            CreatureKind::Octopod => 0,
            CreatureKind::Insectoid => 1,
            CreatureKind::Biomech => 2,
            CreatureKind::Crystalline => 3,
        }
    }
}

/// Named audio cues the engine emits; playback is external
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Shoot,
    EnemyShoot,
    Explode,
}

/// Events produced by a tick, drained by the shell once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Fire-and-forget audio cue with a pre-scaled volume
    Cue { cue: AudioCue, volume: f32 },
    /// Run began (start or restart); external music should begin
    Started,
    LifeLost { remaining: u8 },
    WaveCleared { wave: u32 },
    /// Lives hit zero; external music should halt, end screen shows
    GameOver,
}

/// The player ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Player {
    pub fn at_start(scale: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            size: Vec2::new(PLAYER_W, PLAYER_H) * scale,
            speed: PLAYER_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Muzzle position: a player bullet spawns centered just above the ship
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x * 0.5 - BULLET_W * 0.5,
            self.pos.y - BULLET_H,
        )
    }
}

/// A bullet; player-fired and enemy-fired share the shape and live in
/// separate collections
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity: negative flies up (player), positive down (enemy)
    pub vy: f32,
    pub big: bool,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// An invader
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity; sign flips on side-margin bounce
    pub vx: f32,
    /// Seconds until the next shot
    pub shoot_timer: f32,
    pub creature: CreatureKind,
    pub health: u8,
    pub max_health: u8,
    pub big: bool,
    /// Cosmetic countdown: big enemies show their health briefly after a hit
    pub health_display: f32,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Leading (bottom) edge; reaching the player's line costs a life
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Particle color tags for the renderer's palette lookup
pub const PARTICLE_SPARK: u32 = 0;
pub const PARTICLE_BIG_SPARK: u32 = 1;
pub const PARTICLE_DEBRIS: u32 = 2;

/// A cosmetic particle; never collides, never scores
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in seconds; pruned at <= 0
    pub life: f32,
    pub color: u32,
}

/// Complete live world for one game session
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: RunPhase,
    /// Playfield bounds
    pub width: f32,
    pub height: f32,
    /// Layout scale (compact screens use < 1.0)
    pub scale: f32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
    /// First tick of a run seeds the wave; re-armed by restart
    pub initial_wave_spawned: bool,
    /// Screen shake magnitude (cosmetic, decays each tick)
    pub shake: f32,
    /// Previous tick's fire intent, for rising-edge detection
    pub(crate) last_shoot: bool,
    pub(crate) rng: Pcg32,
    /// Events produced this tick; drained by the engine
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_playfield(seed, PLAYFIELD_W, PLAYFIELD_H, 1.0)
    }

    pub fn with_playfield(seed: u64, width: f32, height: f32, scale: f32) -> Self {
        Self {
            phase: RunPhase::NotStarted,
            width,
            height,
            scale,
            player: Player::at_start(scale),
            bullets: Vec::new(),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            particles: Vec::new(),
            initial_wave_spawned: false,
            shake: 0.0,
            last_shoot: false,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Clear the live world for a fresh run and resume play. The RNG stream
    /// continues; restarts are not replays.
    pub fn reset(&mut self) {
        self.bullets.clear();
        self.enemies.clear();
        self.enemy_bullets.clear();
        self.particles.clear();
        self.player = Player::at_start(self.scale);
        self.initial_wave_spawned = false;
        self.shake = 0.0;
        self.last_shoot = false;
        self.events.clear();
        self.phase = RunPhase::Running;
    }

    /// Adopt new playfield bounds, keeping the player inside them
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.player.pos.x = clamp(self.player.pos.x, 0.0, width - self.player.size.x);
        self.player.pos.y = clamp(self.player.pos.y, 0.0, height - self.player.size.y);
    }
}
