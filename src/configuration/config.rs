//! Run configuration loaded from YAML.
//!
//! A run configuration names a scenario text file and says how to drive it.
//! It is the non-interactive stand-in for the values a user would otherwise
//! type in before pressing start.
//!
//! # YAML format
//!
//! ```yaml
//! scenario: planets.txt          # resolved relative to the YAML file's directory
//! delta_time: 25000.0            # step size
//! max_time: 157788000.0          # stop once the clock reaches this
//! gravitational_constant: 6.67e-11   # optional
//! body_radius: 1.0               # optional, overrides every body's radius
//! max_consecutive_aborts: 1000   # optional
//! ```

use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;

use crate::simulation::forces::GRAVITATIONAL_CONSTANT;
use crate::simulation::params::{Parameters, DEFAULT_MAX_CONSECUTIVE_ABORTS};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub scenario: PathBuf, // scenario text file
    pub delta_time: f64,   // step size
    pub max_time: f64,     // end time
    #[serde(default)]
    pub gravitational_constant: Option<f64>,
    #[serde(default)]
    pub body_radius: Option<f64>,
    #[serde(default)]
    pub max_consecutive_aborts: Option<u64>,
}

impl RunConfig {
    /// Config for a scenario file with every optional field left at its default
    pub fn new(scenario: impl Into<PathBuf>, delta_time: f64, max_time: f64) -> Self {
        Self {
            scenario: scenario.into(),
            delta_time,
            max_time,
            gravitational_constant: None,
            body_radius: None,
            max_consecutive_aborts: None,
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }

    /// Runtime parameters with defaults filled in
    pub fn parameters(&self) -> Parameters {
        Parameters {
            t_end: self.max_time,
            h0: self.delta_time,
            g: self.gravitational_constant.unwrap_or(GRAVITATIONAL_CONSTANT),
            body_radius: self.body_radius,
            max_consecutive_aborts: self
                .max_consecutive_aborts
                .unwrap_or(DEFAULT_MAX_CONSECUTIVE_ABORTS),
        }
    }
}
