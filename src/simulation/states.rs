//! Core state type for the simulation.
//!
//! A `Body` is a disc particle: kinematic state (`position`, `velocity`,
//! `acceleration`), `mass`, a collision `radius`, and an opaque picture
//! resource that only the renderer cares about.

use std::fmt;

use crate::error::ScenarioError;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::vector::Vector2D;

/// Radius given to bodies read from a scenario record
pub const DEFAULT_BODY_RADIUS: f64 = 1.0;

/// Directory that picture resources are resolved against
pub const RESOURCE_ROOT: &str = "data";

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String, // identifying name, used for lookup
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D, // acceleration applied during the last update
    pub mass: f64,
    pub radius: f64, // collision threshold
    pub picture_path: String, // resource reference, not used by the physics
}

impl Body {
    /// Create a body at rest acceleration-wise
    /// `picture` is a bare file name, resolved under [`RESOURCE_ROOT`]
    pub fn new(
        name: impl Into<String>,
        position: Vector2D,
        velocity: Vector2D,
        mass: f64,
        radius: f64,
        picture: &str,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            velocity,
            acceleration: Vector2D::zeros(),
            mass,
            radius,
            picture_path: format!("{RESOURCE_ROOT}/{picture}"),
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Parse one scenario body record:
    /// `posX posY velX velY mass pictureFileName`
    ///
    /// The name is the picture file name up to its first `.`. Tokens past the
    /// sixth are ignored. `line` is only used for error reporting.
    pub fn from_record(record: &str, line: usize) -> Result<Self, ScenarioError> {
        let fields: Vec<&str> = record.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(ScenarioError::malformed(
                line,
                format!("expected 6 fields, found {}", fields.len()),
            ));
        }

        let number = |idx: usize, what: &str| -> Result<f64, ScenarioError> {
            fields[idx].parse::<f64>().map_err(|_| {
                ScenarioError::malformed(line, format!("{what} `{}` is not a number", fields[idx]))
            })
        };

        let position = Vector2D::new(number(0, "position.x")?, number(1, "position.y")?);
        let velocity = Vector2D::new(number(2, "velocity.x")?, number(3, "velocity.y")?);
        let mass = number(4, "mass")?;

        let picture = fields[5];
        let name = picture.split('.').next().unwrap_or(picture);

        Ok(Body::new(name, position, velocity, mass, DEFAULT_BODY_RADIUS, picture))
    }

    /// Advance this body by `dt` under `net_force`
    pub fn update(&mut self, net_force: Vector2D, dt: f64) {
        semi_implicit_euler(self, net_force, dt);
    }

    pub fn momentum(&self) -> Vector2D {
        self.velocity * self.mass
    }

    /// The picture file name with the resource directory stripped
    pub fn picture_file_name(&self) -> &str {
        self.picture_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.picture_path)
    }
}

/// Scenario record form: `posX posY velX velY mass picture`
impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.position.x(),
            self.position.y(),
            self.velocity.x(),
            self.velocity.y(),
            self.mass,
            self.picture_file_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_fields_and_defaults() {
        let b = Body::from_record("  1.5e11 0 0 -2.98e4 5.97e24 earth.gif ", 3).unwrap();
        assert_eq!(b.name, "earth");
        assert_eq!(b.position, Vector2D::new(1.5e11, 0.0));
        assert_eq!(b.velocity, Vector2D::new(0.0, -2.98e4));
        assert_eq!(b.acceleration, Vector2D::zeros());
        assert_eq!(b.mass, 5.97e24);
        assert_eq!(b.radius, DEFAULT_BODY_RADIUS);
        assert_eq!(b.picture_path, "data/earth.gif");
        assert_eq!(b.picture_file_name(), "earth.gif");
    }

    #[test]
    fn record_name_stops_at_first_dot() {
        let b = Body::from_record("0 0 0 0 1 moon.small.png", 1).unwrap();
        assert_eq!(b.name, "moon");
    }

    #[test]
    fn short_record_is_malformed() {
        let err = Body::from_record("0 0 0 0 1", 7).unwrap_err();
        assert!(matches!(err, ScenarioError::Malformed { line: 7, .. }));
    }

    #[test]
    fn non_numeric_field_is_malformed() {
        let err = Body::from_record("0 zero 0 0 1 sun.gif", 4).unwrap_err();
        match err {
            ScenarioError::Malformed { line, reason } => {
                assert_eq!(line, 4);
                assert!(reason.contains("position.y"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn display_matches_record_form() {
        let b = Body::new("sun", Vector2D::new(1.0, -2.0), Vector2D::new(0.5, 0.0), 3.0, 1.0, "sun.gif");
        assert_eq!(b.to_string(), "1 -2 0.5 0 3 sun.gif");
    }
}
