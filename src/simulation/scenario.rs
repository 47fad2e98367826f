//! Build fully-initialized simulations from scenario descriptions
//!
//! A scenario file is line oriented:
//!
//! ```text
//! <body count>
//! <universe radius>
//! <pos.x> <pos.y> <vel.x> <vel.y> <mass> <picture file>   (one line per body)
//! ```
//!
//! Blank body lines are skipped and reading stops once `body count` records
//! have been read. Anything after that is ignored.
//!
//! [`Scenario`] is the runtime bundle built from a [`RunConfig`]: the loaded
//! universe plus the parameters it should be driven with.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::configuration::config::RunConfig;
use crate::error::ScenarioError;
use crate::simulation::params::Parameters;
use crate::simulation::render::Renderer;
use crate::simulation::states::Body;
use crate::simulation::universe::{RunSummary, Universe};

/// Parse a scenario description into a universe at t = 0
pub fn parse_universe(text: &str) -> Result<Universe, ScenarioError> {
    // (1-based line number, raw line)
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (line, raw) = lines
        .next()
        .ok_or_else(|| ScenarioError::malformed(1, "missing body count"))?;
    let count: usize = raw
        .trim()
        .parse()
        .map_err(|_| ScenarioError::malformed(line, format!("body count `{}` is not an integer", raw.trim())))?;

    let (line, raw) = lines
        .next()
        .ok_or_else(|| ScenarioError::malformed(2, "missing universe radius"))?;
    let radius: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ScenarioError::malformed(line, format!("radius `{}` is not a number", raw.trim())))?;

    let mut universe = Universe::new(radius);
    let mut last_line = line;

    for (line, raw) in lines {
        if universe.len() == count {
            break;
        }
        last_line = line;
        if raw.trim().is_empty() {
            continue;
        }
        universe.add_body(Body::from_record(raw, line)?);
    }

    if universe.len() < count {
        return Err(ScenarioError::malformed(
            last_line + 1,
            format!("expected {count} bodies, found {}", universe.len()),
        ));
    }

    debug!(bodies = count, radius, "parsed scenario");
    Ok(universe)
}

/// Read and parse a scenario file
pub fn load_universe(path: impl AsRef<Path>) -> Result<Universe, ScenarioError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ScenarioError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ScenarioError::Io(e),
    })?;
    parse_universe(&text)
}

/// Scenario text for the universe's current state
pub fn serialize_universe(universe: &Universe) -> String {
    universe.to_string()
}

/// All `*.txt` scenario files directly inside `dir`, sorted by file name
pub fn list_scenarios(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ScenarioError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ScenarioError::NotFound {
            path: dir.to_path_buf(),
        },
        _ => ScenarioError::Io(e),
    })?;

    let mut found = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// A loaded universe together with the parameters that drive it
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub universe: Universe,
}

impl Scenario {
    /// Load `cfg.scenario` (relative paths resolve against `base_dir`) and
    /// apply the run parameters to it
    pub fn build_scenario(cfg: &RunConfig, base_dir: &Path) -> Result<Self, ScenarioError> {
        let path = base_dir.join(&cfg.scenario);
        let mut universe = load_universe(&path)?;

        let parameters = cfg.parameters();
        universe.apply(&parameters);

        info!(
            scenario = %path.display(),
            bodies = universe.len(),
            dt = parameters.h0,
            t_end = parameters.t_end,
            "scenario loaded"
        );

        Ok(Self { parameters, universe })
    }

    /// Drive the universe to its end time
    pub fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> RunSummary {
        self.universe.run(&self.parameters, renderer)
    }
}
