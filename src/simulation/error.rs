//! Error types for the simulation boundary.

use thiserror::Error;

/// Rejections surfaced by the validated setters, the clock and the scenario
/// builder. Every variant leaves the simulation state untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid wall-time delta: {0} s (must be finite and >= 0)")]
    InvalidTimeDelta(f64),

    #[error("Invalid body mass: {0} M_sun (must be finite and > 0)")]
    InvalidMass(f64),

    #[error("Invalid simulation time factor: {0} (must be finite and > 0)")]
    InvalidTimeFactor(f64),

    #[error("No body at index {0}")]
    UnknownBody(usize),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
