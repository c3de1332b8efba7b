//! Tether - third-person follow camera demo
//!
//! Walks an actor past a wall, switches camera modes along the way, and logs
//! where the camera ends up.

mod scene;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tether_assets::CatalogLoader;
use tether_camera::FollowCamera;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use scene::DemoScene;
use settings::AppSettings;

/// Simulation rate of the demo loop
const FRAME_RATE: u32 = 60;
/// Length of the demo run in seconds
const RUN_SECONDS: u32 = 10;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    info!("Starting Tether camera demo...");

    let settings = AppSettings::load();
    if !AppSettings::exists() {
        settings.save().context("Failed to write default settings")?;
    }

    let catalog_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/cameras"));
    let catalog = CatalogLoader::new(&catalog_dir)
        .load_catalog()
        .with_context(|| format!("Failed to load camera settings from {}", catalog_dir.display()))?;
    info!("Camera modes available: {}", catalog.names().join(", "));

    let mut scene = DemoScene::build();
    let mut camera = FollowCamera::with_config(catalog, settings.rig_config());

    let dt = 1.0 / FRAME_RATE as f32;
    for frame in 0..FRAME_RATE * RUN_SECONDS {
        let time = frame as f32 * dt;

        match frame {
            f if f == FRAME_RATE * 3 => camera.add_mode("aim", 1),
            f if f == FRAME_RATE * 5 => camera.push_mode("sprint"),
            f if f == FRAME_RATE * 7 => {
                camera.remove_mode("aim");
                camera.remove_mode("sprint");
            }
            _ => {}
        }

        let pose = scene.advance_actor(time);
        let view = camera.frame_simulate(dt, &pose, &scene.physics);

        if frame % FRAME_RATE == 0 {
            info!(
                "t={:>4.1}s mode={:<8} camera=({:>7.2}, {:>6.2}, {:>6.2}) distance={:>6.2} blocked={} fov_y={:.1}",
                time,
                camera.active_mode(),
                view.position.x,
                view.position.y,
                view.position.z,
                camera.rig.last_camera_distance(),
                camera.rig.obstacle_hit(),
                view.fov_y,
            );
        }
    }

    info!("Demo finished");
    Ok(())
}
