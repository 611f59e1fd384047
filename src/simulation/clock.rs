//! Wall-clock to simulation-time conversion
//!
//! Frame drivers hand `advance` the wall seconds since their previous call;
//! the clock scales that through the system's time factor, runs one verlet
//! step and accumulates elapsed simulation days

use super::error::SimulationError;
use super::forces::ForceSet;
use super::integrator;
use super::states::SolarSystem;

/// Wall seconds per simulated day before the time factor applies
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Advance the system by one frame's worth of wall time
///
/// Returns the simulation days actually applied: `Ok(0.0)` while paused,
/// otherwise `wall_delta_seconds / 86400 * simulation_time_factor`.
/// Non-finite and negative deltas are rejected before the pause check and
/// mutate nothing.
pub fn advance(
    sys: &mut SolarSystem,
    forces: &ForceSet,
    wall_delta_seconds: f64,
) -> Result<f64, SimulationError> {
    if !wall_delta_seconds.is_finite() || wall_delta_seconds < 0.0 {
        return Err(SimulationError::InvalidTimeDelta(wall_delta_seconds));
    }
    if sys.paused {
        return Ok(0.0);
    }

    let dt_days = wall_delta_seconds / SECONDS_PER_DAY * sys.simulation_time_factor;
    integrator::verlet_step(sys, forces, dt_days);
    sys.elapsed_simulation_time += dt_days;
    Ok(dt_days)
}
