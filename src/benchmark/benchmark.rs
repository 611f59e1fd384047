use std::time::Instant;

use crate::simulation::forces::{Force, ForceSet, NewtonianGravity};
use crate::simulation::integrator::verlet_step;
use crate::simulation::params::{Parameters, DEFAULT_MIN_DISTANCE};
use crate::simulation::states::{Body, NVec3, SolarSystem};

/// Helper to build a deterministic system of size `n`
/// Bodies sit on slowly winding rings, no rand needed
fn make_system(n: usize) -> SolarSystem {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f32;
        let position = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        bodies.push(
            Body::new(&format!("body-{i}"), position, NVec3::zeros(), 1.0e-6)
                .with_max_history(64),
        );
    }

    SolarSystem::new(bodies, &Parameters::default())
}

/// Time a single gravity pass for a range of system sizes
pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let mut sys = make_system(n);

        let gravity = NewtonianGravity {
            min_distance: DEFAULT_MIN_DISTANCE,
        };

        // Warm up
        gravity.accumulate(&mut sys);

        let t0 = Instant::now();
        gravity.accumulate(&mut sys);
        let dt_pass = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity pass = {dt_pass:8.6} s");
    }
}

/// Time full verlet steps (two gravity passes plus the recorder) for a range
/// of system sizes
pub fn bench_verlet() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 4; // steps per size, averaged

    for n in ns {
        let mut sys = make_system(n);

        let forces = ForceSet::new().with(NewtonianGravity {
            min_distance: DEFAULT_MIN_DISTANCE,
        });

        // Warm-up
        verlet_step(&mut sys, &forces, 0.001);

        let t0 = Instant::now();
        for _ in 0..steps {
            verlet_step(&mut sys, &forces, 0.001);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, verlet step = {per_step:8.6} s");
    }
}
