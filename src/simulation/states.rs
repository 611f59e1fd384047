//! Core state types for the solar system simulation.
//!
//! `Body` holds the physical state the integrator advances together with the
//! presentation fields renderers read between update calls. `SolarSystem`
//! owns the body list and the run-wide parameters and is the mutation
//! boundary exposed outside the crate: writes go through the validated
//! setters, reads through the accessor methods.

use nalgebra::Vector3;

use crate::simulation::error::SimulationError;
use crate::simulation::params::Parameters;
use crate::simulation::trajectory::Trajectory;

pub type NVec3 = Vector3<f32>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // display label
    pub position: NVec3, // AU
    pub velocity: NVec3, // AU/day
    pub mass: f64, // solar masses, > 0
    pub force: NVec3, // accumulator, rebuilt on every force pass
    pub prev_acceleration: NVec3, // carried between the two verlet half-updates
    pub draw_position: NVec3, // position * position_scale, written by the recorder
    pub trajectory: Trajectory, // bounded history of draw positions
    pub color: NVec3, // rgb, passed through to renderers
    pub is_emitter: bool, // light-source flag, passed through to renderers
}

impl Body {
    pub fn new(name: &str, position: NVec3, velocity: NVec3, mass: f64) -> Body {
        Body {
            name: name.to_string(),
            position,
            velocity,
            mass,
            force: NVec3::zeros(),
            prev_acceleration: NVec3::zeros(),
            draw_position: NVec3::zeros(),
            trajectory: Trajectory::default(),
            color: NVec3::new(1.0, 1.0, 1.0),
            is_emitter: false,
        }
    }

    pub fn with_color(mut self, color: NVec3) -> Body {
        self.color = color;
        self
    }

    /// Replaces the trajectory buffer with one holding at most `max_history`
    /// samples. Meant for setup; nothing recorded so far survives the swap.
    pub fn with_max_history(mut self, max_history: usize) -> Body {
        self.trajectory = Trajectory::with_capacity(max_history);
        self
    }

    pub fn with_emitter(mut self, is_emitter: bool) -> Body {
        self.is_emitter = is_emitter;
        self
    }
}

#[derive(Debug, Clone)]
pub struct SolarSystem {
    pub(crate) bodies: Vec<Body>,
    pub(crate) g: f64, // AU^3 day^-2 M_sun^-1
    pub(crate) position_scale: f32, // draw_position = position * position_scale
    pub(crate) simulation_time_factor: f64, // simulated time per wall time
    pub(crate) elapsed_simulation_time: f64, // days
    pub(crate) paused: bool,
}

impl SolarSystem {
    pub fn new(bodies: Vec<Body>, parameters: &Parameters) -> SolarSystem {
        SolarSystem {
            bodies,
            g: parameters.g,
            position_scale: parameters.position_scale,
            simulation_time_factor: parameters.time_factor,
            elapsed_simulation_time: 0.0,
            paused: false,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn position_scale(&self) -> f32 {
        self.position_scale
    }

    pub fn simulation_time_factor(&self) -> f64 {
        self.simulation_time_factor
    }

    pub fn elapsed_simulation_time(&self) -> f64 {
        self.elapsed_simulation_time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Takes effect on the next `advance` call; a step already underway is
    /// never interrupted.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn set_simulation_time_factor(&mut self, factor: f64) -> Result<(), SimulationError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(SimulationError::InvalidTimeFactor(factor));
        }
        self.simulation_time_factor = factor;
        Ok(())
    }

    /// Rejects non-positive and non-finite masses; the previous value stays
    /// in place on error.
    pub fn set_body_mass(&mut self, index: usize, mass: f64) -> Result<(), SimulationError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimulationError::InvalidMass(mass));
        }
        let body = self
            .bodies
            .get_mut(index)
            .ok_or(SimulationError::UnknownBody(index))?;
        body.mass = mass;
        Ok(())
    }

    /// Total kinetic energy, widened to f64 for stable drift measurements.
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|body| 0.5 * body.mass * body.velocity.cast::<f64>().norm_squared())
            .sum()
    }

    pub fn total_momentum(&self) -> Vector3<f64> {
        let mut momentum = Vector3::zeros();
        for body in &self.bodies {
            momentum += body.velocity.cast::<f64>() * body.mass;
        }
        momentum
    }
}
