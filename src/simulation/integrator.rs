//! Fixed-step velocity-Verlet integrator for the solar system
//!
//! Two force evaluations per step: positions advance on the first, velocities
//! finish on the average of old and new accelerations, and the trajectory
//! recorder runs once the state is consistent at the new time level

use super::forces::ForceSet;
use super::states::SolarSystem;
use super::trajectory;

/// Advance the system by one step of `dt_days` using velocity-Verlet
/// Updates positions, velocities, `prev_acceleration`, draw positions and
/// trajectories in place. Callers supply a finite, non-negative step; the
/// clock boundary enforces this for wall-driven updates
pub fn verlet_step(sys: &mut SolarSystem, forces: &ForceSet, dt_days: f64) {
    if sys.bodies.is_empty() {
        return;
    }

    // The state vectors are single precision; dt joins them once here.
    let dt = dt_days as f32;
    let half_dt = 0.5 * dt; // half step dt/2

    // a_n from x_n at time t_n
    forces.accumulate_forces(sys);

    // Position update: x_n+1 = x_n + v_n dt + (1/2) a_n dt^2,
    // caching a_n for the velocity update after the second force pass
    for body in sys.bodies.iter_mut() {
        let accel = body.force / (body.mass as f32);
        body.prev_acceleration = accel;
        body.position += body.velocity * dt + accel * (half_dt * dt);
    }

    // a_n+1 from x_n+1 at time t_n+1
    forces.accumulate_forces(sys);

    // Velocity update: v_n+1 = v_n + (1/2)(a_n + a_n+1) dt
    for body in sys.bodies.iter_mut() {
        let accel = body.force / (body.mass as f32);
        body.velocity += (body.prev_acceleration + accel) * half_dt;
    }

    // Record scaled draw positions now that the step is complete
    trajectory::record(sys);
}
