//! Headless random system command

use super::{bounds, check_dt, drive};
use anyhow::Result;
use ember_random::{RandomRunner, RandomSystem};

pub struct RandomArgs {
    pub count: usize,
    pub frames: u64,
    pub dt: f64,
    pub speed: f32,
    pub seed: Option<u64>,
}

pub fn run(args: RandomArgs) -> Result<()> {
    check_dt(args.dt)?;
    if !args.speed.is_finite() {
        anyhow::bail!("--speed must be finite, got {}", args.speed);
    }

    let system = match args.seed {
        Some(seed) => RandomSystem::with_seed(args.count, seed),
        None => RandomSystem::new(args.count),
    };
    let mut runner = RandomRunner::new(system, args.speed);
    let clock = drive(&mut runner, args.frames, args.dt, |_, _| {})?;

    let system = &runner.system;
    println!("Particles:  {}", system.len());
    println!("Frames:     {}", clock.frame);
    println!("Simulated:  {:.2}s", clock.total_time);
    if let Some((min, max)) = bounds(system.positions().iter().copied()) {
        println!(
            "Extent:     [{:.3}, {:.3}] .. [{:.3}, {:.3}]",
            min.x, min.y, max.x, max.y
        );
        let n = system.len() as f32;
        let mean_alpha = system.colors().iter().map(|c| c.w).sum::<f32>() / n;
        let mean_size = system.sizes().iter().sum::<f32>() / n;
        println!("Mean alpha: {mean_alpha:.3}");
        println!("Mean size:  {mean_size:.3}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_seeded() {
        run(RandomArgs {
            count: 64,
            frames: 120,
            dt: 0.016,
            speed: 1.0,
            seed: Some(3),
        })
        .unwrap();
    }

    #[test]
    fn empty_system_runs() {
        run(RandomArgs {
            count: 0,
            frames: 10,
            dt: 0.016,
            speed: 1.0,
            seed: None,
        })
        .unwrap();
    }

    #[test]
    fn rejects_bad_speed() {
        let err = run(RandomArgs {
            count: 1,
            frames: 1,
            dt: 0.016,
            speed: f32::INFINITY,
            seed: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("--speed"));
    }
}
