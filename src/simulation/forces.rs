//! Force contributors for the n-body core.
//!
//! Each term implements [`Force`] and adds into the per-body `force`
//! accumulators; [`ForceSet`] zeroes the accumulators and runs the terms.
//! Direct pairwise Newtonian gravity is the only term the solar scenarios
//! install, but the seam takes any number of contributors.

use crate::simulation::states::{NVec3, SolarSystem};

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into each body's `force` accumulator
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with(mut self, term: impl Force + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Recompute every body's `force` from the current positions
    /// - accumulators are zeroed first, then each term adds its contribution
    /// - no partial sums are observable outside this call
    pub fn accumulate_forces(&self, sys: &mut SolarSystem) {
        // Zero accumulators
        for body in sys.bodies.iter_mut() {
            body.force = NVec3::zeros();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.accumulate(sys);
        }
    }
}

/// Trait for force sources operating on a [`SolarSystem`]
/// Implementations add their contribution into each body's `force`
pub trait Force {
    fn accumulate(&self, sys: &mut SolarSystem);
}

/// Direct pairwise Newtonian gravity (n^2 sum)
/// Pair magnitudes are computed in f64 and narrowed to f32 only where they
/// scale the unit direction; `min_distance` floors the separation so close
/// encounters never divide by zero
pub struct NewtonianGravity {
    pub min_distance: f64, // AU, floor on the pair separation
}

impl Force for NewtonianGravity {
    fn accumulate(&self, sys: &mut SolarSystem) {
        let n = sys.bodies.len();
        // G lives on the system; one unit system per run.
        let g = sys.g;

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                // r is the displacement vector from i to j.
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r.
                let r = sys.bodies[j].position - sys.bodies[i].position;

                // Separation distance with the configured floor.
                // Exactly coincident bodies keep a zero r, so the clamped
                // division below yields a zero direction and zero force.
                let distance = f64::from(r.norm()).max(self.min_distance);

                // Unit direction from i toward j (f32, like the positions).
                let direction = r / (distance as f32);

                // Magnitude G * m_i * m_j / d^2, kept in f64 with the masses.
                let magnitude =
                    g * sys.bodies[i].mass * sys.bodies[j].mass / (distance * distance);

                // Single narrowing point: the f64 magnitude scales the f32
                // direction.
                let force = direction * (magnitude as f32);

                // -------------------------
                // Apply Newton's law:
                // F_i +=  F (toward j)
                // F_j += -F (toward i)
                // (equal and opposite)
                // -------------------------
                sys.bodies[i].force += force;
                sys.bodies[j].force -= force;
            }
        }
    }
}

impl NewtonianGravity {
    /// Pairwise potential energy -G * m_i * m_j / d, summed in f64 with the
    /// same separation floor the force pass uses
    pub fn potential_energy(&self, sys: &SolarSystem) -> f64 {
        let n = sys.bodies.len();
        let mut energy = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = sys.bodies[j].position - sys.bodies[i].position;
                let distance = f64::from(r.norm()).max(self.min_distance);
                energy -= sys.g * sys.bodies[i].mass * sys.bodies[j].mass / distance;
            }
        }
        energy
    }
}
