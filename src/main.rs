use solsim::{Scenario, ScenarioConfig};
use solsim::advance;
use solsim::{bench_gravity, bench_verlet};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{debug, info};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Headless driver for the solar system simulator
#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML to load instead of the built-in solar system
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of frames to drive
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Wall seconds each frame represents
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_seconds: f64,

    /// Run physics only every n-th frame, accumulating the skipped wall time
    #[arg(long, default_value_t = 1)]
    physics_stride: u64,

    /// Run the micro-benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_config(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open scenario file {}", path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario file {}", path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_verlet();
        return Ok(());
    }

    ensure!(args.physics_stride >= 1, "--physics-stride must be >= 1");

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::build_scenario(load_scenario_config(path)?)?,
        None => Scenario::solar_system(),
    };

    info!(
        "driving {} bodies for {} frames at {:.4} wall seconds each",
        scenario.system.body_count(),
        args.frames,
        args.frame_seconds
    );

    let mut pending_wall_seconds = 0.0;
    for frame in 1..=args.frames {
        pending_wall_seconds += args.frame_seconds;
        if frame % args.physics_stride == 0 {
            let applied = advance(&mut scenario.system, &scenario.forces, pending_wall_seconds)?;
            pending_wall_seconds = 0.0;
            debug!("frame {frame}: advanced {applied:.4} days");
        }
    }
    // Flush wall time the stride left behind so every frame lands
    if pending_wall_seconds > 0.0 {
        advance(&mut scenario.system, &scenario.forces, pending_wall_seconds)?;
    }

    println!(
        "simulated {:.2} days over {} frames",
        scenario.system.elapsed_simulation_time(),
        args.frames
    );
    for body in scenario.system.bodies() {
        println!(
            "{:<8} position = ({:+.6}, {:+.6}, {:+.6}) AU  velocity = ({:+.7}, {:+.7}, {:+.7}) AU/day  trail = {}",
            body.name,
            body.position.x,
            body.position.y,
            body.position.z,
            body.velocity.x,
            body.velocity.y,
            body.velocity.z,
            body.trajectory.len()
        );
    }

    Ok(())
}
