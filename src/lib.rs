pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, NVec3, SolarSystem};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::verlet_step;
pub use simulation::clock::{advance, SECONDS_PER_DAY};
pub use simulation::trajectory::{Trajectory, DEFAULT_MAX_HISTORY};
pub use simulation::error::SimulationError;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_verlet};
