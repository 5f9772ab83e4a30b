//! Nova Raid entry point
//!
//! The native build has no renderer; it runs a short headless demo of the
//! simulation with scripted input, then persists the run stats. Useful as a
//! smoke test and as a reference for wiring the engine into a real shell.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use nova_raid::audio::{AudioDirector, DebugSink};
use nova_raid::driver::LoopDriver;
use nova_raid::engine::Engine;
use nova_raid::persistence::FileStorage;
use nova_raid::settings::Settings;
use nova_raid::sim::InputState;
use nova_raid::stats::Stats;

/// Demo length: ~10 seconds at 60 frames/s
const DEMO_FRAMES: u32 = 600;

fn main() {
    env_logger::init();
    log::info!("Nova Raid (headless demo) starting...");

    let storage = FileStorage::new(std::env::temp_dir().join("nova-raid"));
    let settings = Settings::load(&storage);
    let stats = Stats::load(&storage);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("session seed: {seed}");

    let mut engine = Engine::with_persisted(seed, settings, stats);
    let mut driver = LoopDriver::new();
    let mut audio = AudioDirector::new(DebugSink);

    engine.start();
    driver.start();

    for frame in 0..DEMO_FRAMES {
        engine.set_input(scripted_input(frame));

        if driver.frame(&mut engine).is_none() {
            break;
        }
        for event in engine.drain_events() {
            audio.handle(&event);
        }

        if frame % 60 == 0 {
            let hud = engine.hud();
            log::info!(
                "wave {} | score {} | lives {} | {} enemies",
                hud.wave,
                hud.score,
                hud.lives,
                engine.world().enemies.len()
            );
        }
        if engine.hud().game_over {
            break;
        }

        thread::sleep(Duration::from_millis(16));
    }

    driver.stop();

    let hud = engine.hud();
    log::info!(
        "demo over: score {} (best {}), wave {}",
        hud.score,
        hud.high_score,
        hud.wave
    );

    engine.settings().save(&storage);
    engine.stats().save(&storage);
}

/// Sweep the ship left and right while tapping fire every other frame
/// (fire is rising-edge, so holding it would shoot once)
fn scripted_input(frame: u32) -> InputState {
    let sweep = (frame / 90) % 2 == 0;
    InputState {
        left: sweep,
        right: !sweep,
        shoot: frame % 2 == 0,
        ..Default::default()
    }
}
