//! Physical and presentation parameters for a simulation run
//!
//! `Parameters` holds the run-wide settings:
//! - gravitational constant for the unit system (`g`),
//! - separation floor for the gravity pass (`min_distance`),
//! - presentation scale applied to draw positions (`position_scale`),
//! - initial simulation time factor (`time_factor`)
//!
//! The defaults are the solar unit system: AU, days, solar masses.

/// Gravitational constant in AU^3 day^-2 M_sun^-1
pub const SOLAR_G: f64 = 2.96e-4;

/// Separation floor in AU for the solar scenarios
pub const DEFAULT_MIN_DISTANCE: f64 = 1e-6;

/// Draw-position scale for the solar scenarios
pub const DEFAULT_POSITION_SCALE: f32 = 2.0;

/// Simulated time per wall time when a scenario does not override it
pub const DEFAULT_TIME_FACTOR: f64 = 1000.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // separation floor
    pub position_scale: f32, // draw position scale
    pub time_factor: f64, // initial simulation time factor
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters {
            g: SOLAR_G,
            min_distance: DEFAULT_MIN_DISTANCE,
            position_scale: DEFAULT_POSITION_SCALE,
            time_factor: DEFAULT_TIME_FACTOR,
        }
    }
}
