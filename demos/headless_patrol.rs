//! Headless patrol demo.
//!
//! Runs a patrol for a few simulated seconds and logs the actor's pose.
//!
//! ```sh
//! RUST_LOG=info cargo run --example headless_patrol -- [config.json]
//! ```
//!
//! Without a config file, a single actor walks a 4 x 4 square.

use glam::Vec3;
use patrol::{App, AppConfig, PatrolConfig, TaskMode};

const FRAME_DT: f32 = 1.0 / 30.0;
const FRAMES: u64 = 30 * 12;

fn square_config() -> AppConfig {
    let square = [
        Vec3::new(-2.0, -2.0, 0.0),
        Vec3::new(2.0, -2.0, 0.0),
        Vec3::new(2.0, 2.0, 0.0),
        Vec3::new(-2.0, 2.0, 0.0),
    ];
    AppConfig {
        patrols: vec![PatrolConfig::new("walker", &square).with_durations(vec![2.0_f32, 3.0])],
        camera_dolly: true,
        ..Default::default()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => square_config(),
    };

    let mut app = App::from_config(&config)?;

    app.add_task("report", TaskMode::Continuous, |stage, time| {
        if time.frame % 30 != 0 {
            return;
        }
        for (_, actor) in stage.actors() {
            log::info!(
                "t={:5.2}s {:>8} pos=({:6.2}, {:6.2}, {:6.2}) heading={:8.2}",
                time.elapsed,
                actor.name,
                actor.transform.position.x,
                actor.transform.position.y,
                actor.transform.position.z,
                actor.transform.heading,
            );
        }
    });
    app.add_task("hello", TaskMode::Once, |stage, _| {
        log::info!("First frame: {} actor(s) on stage", stage.len());
    });

    app.run_frames(FRAMES, FRAME_DT);

    let camera = app.stage().camera.position;
    log::info!("Camera ended at ({:.2}, {:.2}, {:.2})", camera.x, camera.y, camera.z);

    Ok(())
}
