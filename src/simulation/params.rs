//! Runtime parameters for driving a simulation
//!
//! `Parameters` is the resolved form of a [`RunConfig`](crate::RunConfig):
//! - step size and end time,
//! - gravitational constant,
//! - optional radius override for loaded bodies,
//! - how many aborted ticks in a row the driver tolerates

use crate::simulation::forces::GRAVITATIONAL_CONSTANT;

/// Consecutive aborted ticks after which [`Universe::run`](crate::Universe::run) gives up
pub const DEFAULT_MAX_CONSECUTIVE_ABORTS: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub t_end: f64, // simulation end time
    pub h0: f64, // step size
    pub g: f64, // gravitational constant
    pub body_radius: Option<f64>, // overrides every body's radius when set
    pub max_consecutive_aborts: u64,
}

impl Parameters {
    pub fn new(h0: f64, t_end: f64) -> Self {
        Self {
            t_end,
            h0,
            g: GRAVITATIONAL_CONSTANT,
            body_radius: None,
            max_consecutive_aborts: DEFAULT_MAX_CONSECUTIVE_ABORTS,
        }
    }
}
