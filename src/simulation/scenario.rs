//! Build fully-initialized simulation scenarios
//!
//! Produces the runtime bundle ([`Scenario`]) consumed by frame drivers:
//! - run parameters ([`Parameters`])
//! - system state ([`SolarSystem`] with bodies at t = 0)
//! - active force set ([`ForceSet`])
//!
//! Scenarios come from the built-in solar table ([`Scenario::solar_system`])
//! or from a YAML-facing [`ScenarioConfig`] via [`Scenario::build_scenario`]

use crate::configuration::config::{ParametersConfig, ScenarioConfig};
use crate::simulation::error::SimulationError;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, SolarSystem};
use crate::simulation::trajectory::DEFAULT_MAX_HISTORY;

/// Fully-initialized simulation scenario
///
/// The runtime bundle handed to frame drivers: run parameters, the system
/// state at t = 0, and the set of active force laws
pub struct Scenario {
    pub parameters: Parameters,
    pub system: SolarSystem,
    pub forces: ForceSet,
}

/// One row of the built-in solar table: a body starting on the +x axis with
/// a circular-orbit speed tilted by its orbital inclination
struct BodyRow {
    name: &'static str,
    distance: f32, // AU along +x
    speed: f32, // AU/day
    inclination_deg: f32, // orbital inclination toward +z
    mass: f64, // solar masses
    color: [f32; 3],
    max_history: usize,
    is_emitter: bool,
}

/// Sun and the four inner planets
const SOLAR_TABLE: [BodyRow; 5] = [
    BodyRow {
        name: "Sun",
        distance: 0.0,
        speed: 0.0,
        inclination_deg: 0.0,
        mass: 1.0,
        color: [1.0, 0.5, 0.0],
        max_history: 10,
        is_emitter: true,
    },
    BodyRow {
        name: "Mercury",
        distance: 0.39,
        speed: 0.027352689,
        inclination_deg: 7.004,
        mass: 1.1e-7,
        color: [0.678, 0.6588, 0.647],
        max_history: 2000,
        is_emitter: false,
    },
    BodyRow {
        name: "Venus",
        distance: 0.72,
        speed: 0.020225742,
        inclination_deg: 3.395,
        mass: 1.63e-6,
        color: [0.7568, 0.56078, 0.0901],
        max_history: DEFAULT_MAX_HISTORY,
        is_emitter: false,
    },
    BodyRow {
        name: "Earth",
        distance: 1.0,
        speed: 0.017199389,
        inclination_deg: 0.0,
        mass: 2.0e-6,
        color: [0.4196, 0.57647, 0.83921],
        max_history: DEFAULT_MAX_HISTORY,
        is_emitter: false,
    },
    BodyRow {
        name: "Mars",
        distance: 1.5,
        speed: 0.0139056311,
        inclination_deg: 1.848,
        mass: 3.213e-7,
        color: [0.757, 0.27, 0.0549],
        max_history: 10000,
        is_emitter: false,
    },
];

impl Scenario {
    /// The built-in solar system: Sun plus the four inner planets in solar
    /// units, with the default parameters
    pub fn solar_system() -> Scenario {
        let parameters = Parameters::default();

        // Bodies: map table rows -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = SOLAR_TABLE
            .iter()
            .map(|row| {
                // velocity = speed * (0, cos i, sin i): a circular orbit
                // tilted about the x axis by the inclination
                let incl = row.inclination_deg.to_radians();
                let velocity = NVec3::new(0.0, row.speed * incl.cos(), row.speed * incl.sin());
                Body::new(
                    row.name,
                    NVec3::new(row.distance, 0.0, 0.0),
                    velocity,
                    row.mass,
                )
                .with_color(NVec3::from(row.color))
                .with_max_history(row.max_history)
                .with_emitter(row.is_emitter)
            })
            .collect();

        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity {
            min_distance: parameters.min_distance,
        });

        Scenario {
            system: SolarSystem::new(bodies, &parameters),
            parameters,
            forces,
        }
    }

    /// Build a scenario from a deserialized config, rejecting non-positive
    /// masses and parameters before any state exists
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Scenario, SimulationError> {
        let parameters = validated_parameters(&cfg.parameters)?;

        // Bodies: map `BodyConfig` -> runtime `Body`, masses checked here
        // so the invariant holds from the first step
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            if !bc.mass.is_finite() || bc.mass <= 0.0 {
                return Err(SimulationError::InvalidMass(bc.mass));
            }
            let mut body = Body::new(
                &bc.name,
                NVec3::new(bc.position[0], bc.position[1], bc.position[2]),
                NVec3::new(bc.velocity[0], bc.velocity[1], bc.velocity[2]),
                bc.mass,
            );
            if let Some(color) = bc.color {
                body = body.with_color(NVec3::from(color));
            }
            if let Some(max_history) = bc.max_history {
                body = body.with_max_history(max_history);
            }
            body = body.with_emitter(bc.is_emitter.unwrap_or(false));
            bodies.push(body);
        }

        let forces = ForceSet::new().with(NewtonianGravity {
            min_distance: parameters.min_distance,
        });

        Ok(Scenario {
            system: SolarSystem::new(bodies, &parameters),
            parameters,
            forces,
        })
    }
}

/// Parameters (runtime) from ParametersConfig, defaults filled in and every
/// value checked for finiteness and sign
fn validated_parameters(cfg: &ParametersConfig) -> Result<Parameters, SimulationError> {
    let defaults = Parameters::default();
    let parameters = Parameters {
        g: cfg.g.unwrap_or(defaults.g),
        min_distance: cfg.min_distance.unwrap_or(defaults.min_distance),
        position_scale: cfg.position_scale.unwrap_or(defaults.position_scale),
        time_factor: cfg.time_factor.unwrap_or(defaults.time_factor),
    };

    if !parameters.g.is_finite() || parameters.g <= 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "g = {}",
            parameters.g
        )));
    }
    if !parameters.min_distance.is_finite() || parameters.min_distance <= 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "min_distance = {}",
            parameters.min_distance
        )));
    }
    if !parameters.position_scale.is_finite() || parameters.position_scale <= 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "position_scale = {}",
            parameters.position_scale
        )));
    }
    if !parameters.time_factor.is_finite() || parameters.time_factor <= 0.0 {
        return Err(SimulationError::InvalidTimeFactor(parameters.time_factor));
    }

    Ok(parameters)
}
