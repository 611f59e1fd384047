//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and presentation settings,
//!   every key optional (solar defaults fill the gaps)
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 2.96e-4            # gravitational constant, AU^3 day^-2 M_sun^-1
//!   min_distance: 1.0e-6  # separation floor for the gravity pass, AU
//!   position_scale: 2.0   # draw_position = position * position_scale
//!   time_factor: 1000.0   # simulated time per wall time
//!
//! bodies:
//!   - name: "Sun"
//!     position: [ 0.0, 0.0, 0.0 ]
//!     velocity: [ 0.0, 0.0, 0.0 ]
//!     mass: 1.0
//!     color: [ 1.0, 0.5, 0.0 ]
//!     max_history: 10
//!     is_emitter: true
//!   - name: "Earth"
//!     position: [ 1.0, 0.0, 0.0 ]
//!     velocity: [ 0.0, 0.017199389, 0.0 ]
//!     mass: 2.0e-6
//! ```
//!
//! [`Scenario::build_scenario`](crate::simulation::scenario::Scenario::build_scenario)
//! maps this configuration into the runtime scenario representation,
//! rejecting invalid masses and parameters.

use serde::Deserialize;

/// Global physical and presentation parameters for a scenario
/// Every field is optional; missing keys take the solar defaults
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub g: Option<f64>,              // gravitational constant
    pub min_distance: Option<f64>,   // separation floor for the gravity pass
    pub position_scale: Option<f32>, // draw position scale
    pub time_factor: Option<f64>,    // initial simulation time factor
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,                // display label
    pub position: [f32; 3],          // initial position, AU
    pub velocity: [f32; 3],          // initial velocity, AU/day
    pub mass: f64,                   // mass, solar masses (must be > 0)
    pub color: Option<[f32; 3]>,     // rgb for renderers, defaults to white
    pub max_history: Option<usize>,  // trajectory capacity, defaults to 5000
    pub is_emitter: Option<bool>,    // light-source flag, defaults to false
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // physical and presentation parameters
    pub bodies: Vec<BodyConfig>,      // initial state of the system
}
