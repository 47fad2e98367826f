//! Pairwise force contributors for the n-body engine
//!
//! Each term implements [`PairForce`]; a [`ForceSet`] sums every term over every
//! other body to give the net force on one body. Forces (not accelerations)
//! are accumulated, the integrator divides by mass.

use crate::simulation::states::Body;
use crate::simulation::vector::Vector2D;

/// Gravitational constant in N*m^2/kg^2
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67e-11;

/// Force exerted on `free` by `source`
pub trait PairForce {
    fn force(&self, free: &Body, source: &Body) -> Vector2D;
}

/// Whether two bodies are in contact:
/// their separation is below either body's radius
pub fn touching(a: &Body, b: &Body) -> bool {
    let r = a.position.distance(&b.position);
    r < a.radius || r < b.radius
}

/// Collection of pairwise force terms (gravity, contact, etc.)
pub struct ForceSet {
    terms: Vec<Box<dyn PairForce + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Gravity followed by the contact momentum term
    pub fn standard(g: f64) -> Self {
        Self::new().with(NewtonianGravity { g }).with(MomentumInjection)
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: PairForce + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Net force on `bodies[i]` from every other body
    /// - self-interaction is excluded by index, never by comparing positions
    /// - per source body, terms are summed in registration order
    pub fn net_force(&self, i: usize, bodies: &[Body]) -> Vector2D {
        let free = &bodies[i];
        let mut net = Vector2D::zeros();
        for (j, source) in bodies.iter().enumerate() {
            if j == i {
                continue;
            }
            for term in &self.terms {
                net += term.force(free, source);
            }
        }
        net
    }
}

/// Newtonian gravity without softening
///
/// |F| = G * m_free * m_source / r^2, pointing from `free` toward `source`.
/// Coincident bodies (r = 0) produce NaN components; that is left to propagate.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { g: GRAVITATIONAL_CONSTANT }
    }
}

impl PairForce for NewtonianGravity {
    fn force(&self, free: &Body, source: &Body) -> Vector2D {
        let r = free.position.distance(&source.position);
        let magnitude = self.g * free.mass * source.mass / (r * r);

        // d points from source to free; the force is along -d
        let d = free.position - source.position;
        let cos_theta = d.x() / r;
        let sin_theta = d.y() / r;

        -Vector2D::new(magnitude * cos_theta, magnitude * sin_theta)
    }
}

/// Contact term: while two bodies touch, `free` is pushed by the momentum of
/// `source` (velocity * mass) used directly as a force.
///
/// Not a physical impulse. Kept as the model's collision response.
pub struct MomentumInjection;

impl PairForce for MomentumInjection {
    fn force(&self, free: &Body, source: &Body) -> Vector2D {
        if touching(free, source) {
            source.momentum()
        } else {
            Vector2D::zeros()
        }
    }
}
