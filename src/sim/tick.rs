//! The simulation step
//!
//! One bounded-delta advance of the whole world. The order of operations is
//! load-bearing: spawn, player movement, player fire, bullet advance, enemy
//! advance/fire, enemy bullets vs player, player bullets vs enemies,
//! particles, wave completion. Reordering changes which side wins a tick.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{clamp, intersects};
use super::state::{
    AudioCue, Bullet, CreatureKind, Enemy, GameEvent, GameState, PARTICLE_BIG_SPARK,
    PARTICLE_DEBRIS, PARTICLE_SPARK, Particle, RunPhase,
};
use crate::consts::*;
use crate::settings::{Difficulty, Settings};
use crate::stats::Stats;

/// Input snapshot sampled at the start of a tick; producer is external.
/// Last write wins - there is no event queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
}

/// Advance the world by one tick. `dt` is bounded to [`MAX_DT`] internally so
/// a stalled host cannot tunnel entities through each other.
pub fn tick(state: &mut GameState, stats: &mut Stats, input: &InputState, settings: &Settings, dt: f32) {
    if !state.phase.is_running() {
        return;
    }
    let dt = dt.clamp(0.0, MAX_DT);

    // Decay screen shake
    if state.shake > 0.0 {
        state.shake *= 0.9;
        if state.shake < 0.5 {
            state.shake = 0.0;
        }
    }

    // 1. Initial spawn: the first tick of a run seeds 6 enemies per wave
    if !state.initial_wave_spawned {
        spawn_wave(state, settings, stats.wave, 6 * stats.wave as usize);
        state.initial_wave_spawned = true;
    }

    let difficulty = settings.difficulty;
    let descent = difficulty.descent_speed();

    // 2. Player movement, clamped into the playfield
    {
        let p = &mut state.player;
        if input.left {
            p.pos.x -= p.speed * dt;
        }
        if input.right {
            p.pos.x += p.speed * dt;
        }
        if input.up {
            p.pos.y -= p.speed * dt;
        }
        if input.down {
            p.pos.y += p.speed * dt;
        }
    }
    state.player.pos.x = clamp(state.player.pos.x, 0.0, state.width - state.player.size.x);
    state.player.pos.y = clamp(state.player.pos.y, 0.0, state.height - state.player.size.y);

    // 3. Player fire: rising edge only (one shot per press, not per tick
    // held), under the in-flight cap
    if input.shoot && !state.last_shoot && state.bullets.len() < MAX_PLAYER_BULLETS {
        state.bullets.push(Bullet {
            pos: state.player.muzzle(),
            size: Vec2::new(BULLET_W, BULLET_H),
            vy: PLAYER_BULLET_VY,
            big: false,
        });
        emit_cue(&mut state.events, settings, AudioCue::Shoot, settings.volume);
    }
    state.last_shoot = input.shoot;

    // 4. Player bullets advance; drop past the top edge
    state.bullets.retain_mut(|b| {
        b.pos.y += b.vy * dt;
        b.pos.y > -OFFSCREEN_PAD
    });

    // 5. Enemies: bounce, descend, shoot, and breach the player's line
    {
        let GameState {
            player,
            enemies,
            enemy_bullets,
            events,
            rng,
            phase,
            shake,
            width,
            ..
        } = state;
        let player_y = player.pos.y;
        let width = *width;

        let mut i = 0;
        while i < enemies.len() {
            let e = &mut enemies[i];
            e.pos.x += e.vx * dt;
            if e.pos.x < SIDE_MARGIN {
                e.pos.x = SIDE_MARGIN;
                e.vx = -e.vx;
            } else if e.pos.x > width - e.size.x - SIDE_MARGIN {
                e.pos.x = width - e.size.x - SIDE_MARGIN;
                e.vx = -e.vx;
            }

            if e.health_display > 0.0 {
                e.health_display -= dt;
            }

            e.pos.y += descent * dt;

            e.shoot_timer -= dt;
            if e.shoot_timer <= 0.0 {
                let size = if e.big {
                    Vec2::new(BIG_BULLET_W, BIG_BULLET_H)
                } else {
                    Vec2::new(BULLET_W, BULLET_H)
                };
                enemy_bullets.push(Bullet {
                    pos: Vec2::new(e.pos.x + e.size.x * 0.5 - size.x * 0.5, e.bottom() + 4.0),
                    size,
                    vy: rng.random_range(ENEMY_BULLET_VY_MIN..ENEMY_BULLET_VY_MAX),
                    big: e.big,
                });
                e.shoot_timer = shoot_cooldown(rng, difficulty);
                emit_cue(
                    events,
                    settings,
                    AudioCue::EnemyShoot,
                    settings.volume * ENEMY_SHOOT_VOLUME,
                );
            }

            // Breaching the player's line costs a life, not a kill: the
            // enemy is removed without score
            if enemies[i].bottom() >= player_y {
                enemies.remove(i);
                emit_cue(events, settings, AudioCue::Explode, settings.volume);
                *shake = 20.0;
                lose_life(stats, phase, events);
                continue;
            }
            i += 1;
        }
    }

    // 6. Enemy bullets: advance, drop past the bottom edge, hit the player
    {
        let GameState {
            player,
            enemy_bullets,
            events,
            phase,
            shake,
            height,
            ..
        } = state;
        let player_rect = player.rect();
        let height = *height;

        let mut i = 0;
        while i < enemy_bullets.len() {
            let b = &mut enemy_bullets[i];
            b.pos.y += b.vy * dt;
            if b.pos.y > height + OFFSCREEN_PAD {
                enemy_bullets.remove(i);
                continue;
            }
            if intersects(&b.rect(), &player_rect) {
                enemy_bullets.remove(i);
                emit_cue(events, settings, AudioCue::Explode, settings.volume);
                *shake = 20.0;
                lose_life(stats, phase, events);
                continue;
            }
            i += 1;
        }
    }

    // 7. Player bullets vs enemies: first match wins, bullet is consumed
    {
        let GameState {
            bullets,
            enemies,
            particles,
            events,
            rng,
            shake,
            ..
        } = state;

        let mut bi = 0;
        'bullets: while bi < bullets.len() {
            let bullet_rect = bullets[bi].rect();
            for ej in 0..enemies.len() {
                if !intersects(&bullet_rect, &enemies[ej].rect()) {
                    continue;
                }
                let center = enemies[ej].rect().center();

                enemies[ej].health = enemies[ej].health.saturating_sub(1);
                if enemies[ej].big {
                    enemies[ej].health_display = HEALTH_DISPLAY_SECS;
                }

                if settings.particles {
                    let color = if enemies[ej].big {
                        PARTICLE_BIG_SPARK
                    } else {
                        PARTICLE_SPARK
                    };
                    burst(particles, rng, center, HIT_PARTICLES, 100.0, HIT_PARTICLE_LIFE, color);
                }

                bullets.remove(bi);
                emit_cue(events, settings, AudioCue::Explode, settings.volume);

                if enemies[ej].health == 0 {
                    let dead = enemies.remove(ej);
                    *shake = if dead.big { 15.0 } else { 5.0 };
                    if settings.particles {
                        burst(
                            particles,
                            rng,
                            center,
                            KILL_PARTICLES,
                            150.0,
                            KILL_PARTICLE_LIFE,
                            PARTICLE_DEBRIS,
                        );
                    }
                    let points = if dead.big { SCORE_BIG } else { SCORE_NORMAL };
                    stats.score += points;
                    stats.high_score = stats.high_score.max(stats.score);
                }

                // The bullet is gone; its slot now holds the next one
                continue 'bullets;
            }
            bi += 1;
        }
    }

    // 8. (life-loss handling is shared by steps 5 and 6; see lose_life)

    // 9. Particles: integrate with downward gravity, prune the dead
    state.particles.retain_mut(|pt| {
        pt.pos += pt.vel * dt;
        pt.vel.y += PARTICLE_GRAVITY * dt;
        pt.life -= dt;
        pt.life > 0.0
    });

    // 10. Wave completion: the next wave is sized from the post-increment
    // wave number
    if state.enemies.is_empty() && state.phase != RunPhase::GameOver {
        stats.wave += 1;
        state.events.push(GameEvent::WaveCleared { wave: stats.wave });
        spawn_wave(state, settings, stats.wave, 6 + stats.wave as usize);
    }
}

/// Append a freshly spawned wave of `count` enemies to the live collection.
/// Layout is a left-to-right row at the top margin; exactly
/// `min(wave, count)` randomly chosen members are "big" with elevated size
/// and health.
pub fn spawn_wave(state: &mut GameState, settings: &Settings, wave: u32, count: usize) {
    let difficulty = settings.difficulty;
    let creature = CreatureKind::for_wave(wave);
    let scale = state.scale;

    // Distinct random indices for the big enemies
    let big_budget = (wave as usize).min(count);
    let mut big_indices = std::collections::HashSet::new();
    while big_indices.len() < big_budget {
        big_indices.insert(state.rng.random_range(0..count));
    }

    log::info!("spawning wave {wave}: {count} enemies ({big_budget} big)");

    for i in 0..count {
        let big = big_indices.contains(&i);
        let size_mul = if big { BIG_ENEMY_SCALE } else { 1.0 };
        let health = if big { difficulty.big_enemy_health() } else { 1 };
        let speed = state.rng.random_range(30.0..70.0);
        let vx = if state.rng.random_bool(0.5) { speed } else { -speed };
        let shoot_timer = shoot_cooldown(&mut state.rng, difficulty);

        state.enemies.push(Enemy {
            pos: Vec2::new(SPAWN_LEFT + i as f32 * SPAWN_SPACING * scale, SPAWN_TOP),
            size: Vec2::new(ENEMY_W, ENEMY_H) * scale * size_mul,
            vx,
            shoot_timer,
            creature,
            health,
            max_health: health,
            big,
            health_display: 0.0,
        });
    }
}

/// Seconds until an enemy's next shot; harder difficulties shoot sooner
fn shoot_cooldown(rng: &mut Pcg32, difficulty: Difficulty) -> f32 {
    rng.random_range(SHOOT_COOLDOWN_MIN..SHOOT_COOLDOWN_MAX) / difficulty.multiplier()
}

/// One life-loss event, shared by line breaches and bullet hits. Lives clamp
/// at zero and game over latches exactly once, so concurrent losses within a
/// tick cannot double-count.
fn lose_life(stats: &mut Stats, phase: &mut RunPhase, events: &mut Vec<GameEvent>) {
    if stats.lives == 0 {
        return;
    }
    stats.lives -= 1;
    events.push(GameEvent::LifeLost {
        remaining: stats.lives,
    });
    if stats.lives == 0 {
        *phase = RunPhase::GameOver;
        stats.record_run();
        events.push(GameEvent::GameOver);
        log::info!("game over at wave {} with score {}", stats.wave, stats.score);
    }
}

fn emit_cue(events: &mut Vec<GameEvent>, settings: &Settings, cue: AudioCue, volume: f32) {
    if settings.muted {
        return;
    }
    events.push(GameEvent::Cue { cue, volume });
}

/// Scatter a particle burst around `center` with velocities uniform in
/// `[-spread, spread)` on both axes
fn burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    center: Vec2,
    count: usize,
    spread: f32,
    life: f32,
    color: u32,
) {
    for _ in 0..count {
        particles.push(Particle {
            pos: center,
            vel: Vec2::new(
                rng.random_range(-spread..spread),
                rng.random_range(-spread..spread),
            ),
            life,
            color,
        });
    }
}
