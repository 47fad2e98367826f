pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{ScenarioError, VectorError};

pub use simulation::vector::{Vector2D, NVec2};
pub use simulation::states::{Body, DEFAULT_BODY_RADIUS, RESOURCE_ROOT};
pub use simulation::params::Parameters;
pub use simulation::forces::{ForceSet, PairForce, NewtonianGravity, MomentumInjection, GRAVITATIONAL_CONSTANT};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::render::{Frame, Sprite, Renderer, NullRenderer, FrameRecorder, TraceRenderer, STAR_BACKGROUND};
pub use simulation::universe::{Universe, BodyId, RunSummary};
pub use simulation::scenario::{Scenario, parse_universe, load_universe, serialize_universe, list_scenarios};

pub use configuration::config::RunConfig;

pub use benchmark::benchmark::{bench_forces, bench_update};
