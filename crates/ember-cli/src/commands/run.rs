//! Headless scene simulation command

use super::{bounds, check_dt, drive};
use anyhow::{Context, Result};
use ember_particles::SceneConfig;

pub struct RunArgs {
    pub scene: String,
    pub frames: u64,
    pub dt: f64,
    pub seed: Option<u64>,
}

/// What a headless run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub simulated_seconds: f64,
    pub alive: usize,
    pub peak_alive: usize,
}

pub fn run(args: RunArgs) -> Result<()> {
    check_dt(args.dt)?;
    let config = SceneConfig::load(&args.scene)
        .with_context(|| format!("Failed to load scene '{}'", args.scene))?;

    let mut scene = config.build_scene(args.seed);
    tracing::info!(
        scene = %args.scene,
        emitters = scene.emitters().len(),
        effects = scene.effects().len(),
        seed = scene.seed(),
        "simulating"
    );

    let summary = simulate(&mut scene, args.frames, args.dt)?;

    println!("Frames:     {}", summary.frames);
    println!("Simulated:  {:.2}s", summary.simulated_seconds);
    println!("Alive:      {}", summary.alive);
    println!("Peak alive: {}", summary.peak_alive);
    match bounds(scene.particles().iter().map(|p| p.position)) {
        Some((min, max)) => println!(
            "Extent:     [{:.3}, {:.3}] .. [{:.3}, {:.3}]",
            min.x, min.y, max.x, max.y
        ),
        None => println!("Extent:     (no particles)"),
    }
    Ok(())
}

pub fn simulate(
    scene: &mut ember_particles::ParticleScene,
    frames: u64,
    dt: f64,
) -> Result<RunSummary> {
    let mut peak_alive = 0;
    let clock = drive(scene, frames, dt, |scene, clock| {
        let alive = scene.particle_count();
        peak_alive = peak_alive.max(alive);
        tracing::debug!(frame = clock.frame, alive, "frame");
    })?;

    let alive = scene.particle_count();
    if scene.particles().iter().any(|p| !p.position.is_finite()) {
        tracing::warn!("non-finite particle positions after run");
    }
    Ok(RunSummary {
        frames: clock.frame,
        simulated_seconds: clock.total_time,
        alive,
        peak_alive,
    })
}
