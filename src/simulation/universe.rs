//! The universe: every body, the simulation clock, and the per-tick step
//!
//! One tick (`update`) walks the bodies in collection order. For each body it
//! sums the pairwise forces against the *current* state of the others (bodies
//! earlier in the walk have already moved this tick), records any contacts,
//! and integrates the body. As soon as any two bodies overlap after a body has
//! moved, the tick stops and reports `false`: the remaining bodies keep their
//! old state, nothing is rendered or merged, and the clock does not advance.
//!
//! A tick that runs to the end renders a frame, merges every recorded contact
//! pair (lighter body absorbed into the heavier one) and advances the clock.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::simulation::forces::{touching, ForceSet, GRAVITATIONAL_CONSTANT};
use crate::simulation::params::Parameters;
use crate::simulation::render::{Frame, NullRenderer, Renderer, Sprite, STAR_BACKGROUND};
use crate::simulation::states::Body;

/// Stable handle for a body, independent of its index or position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u64);

/// Outcome of [`Universe::run`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub ticks: u64, // completed ticks
    pub aborted_ticks: u64,
    pub merges: usize,
    pub final_time: f64,
    pub stalled: bool, // gave up after too many aborts in a row
}

pub struct Universe {
    bodies: Vec<Body>,
    ids: Vec<BodyId>, // ids[i] belongs to bodies[i]
    next_id: u64,
    radius: f64, // half-width of the display window
    time: f64,
    max_time: f64,
    g: Option<f64>, // None once a custom force set is installed
    forces: ForceSet,
    collisions: Vec<(BodyId, BodyId)>, // contacts seen this tick, (free, source)
}

impl Universe {
    /// Empty universe at t = 0 using the standard force set
    pub fn new(radius: f64) -> Self {
        Self {
            bodies: Vec::new(),
            ids: Vec::new(),
            next_id: 0,
            radius,
            time: 0.0,
            max_time: 0.0,
            g: Some(GRAVITATIONAL_CONSTANT),
            forces: ForceSet::standard(GRAVITATIONAL_CONSTANT),
            collisions: Vec::new(),
        }
    }

    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.set_gravitational_constant(g);
        self
    }

    /// Replace the force terms entirely
    /// Contact recording and merging still happen regardless of the terms.
    /// A custom set is never rebuilt by later G changes.
    pub fn with_forces(mut self, forces: ForceSet) -> Self {
        self.forces = forces;
        self.g = None;
        self
    }

    /// Rebuild the standard force set around `g`
    /// Returns `false` and leaves the forces alone if a custom set is installed
    pub fn set_gravitational_constant(&mut self, g: f64) -> bool {
        if self.g.is_none() {
            warn!(g, "custom force set installed, gravitational constant ignored");
            return false;
        }
        self.g = Some(g);
        self.forces = ForceSet::standard(g);
        true
    }

    /// G used by the standard force set, `None` with a custom set
    pub fn gravitational_constant(&self) -> Option<f64> {
        self.g
    }

    /// Take end time, G and the optional radius override from `params`
    pub fn apply(&mut self, params: &Parameters) {
        self.max_time = params.t_end;
        if self.g.is_some_and(|g| g != params.g) {
            self.set_gravitational_constant(params.g);
        }
        if let Some(r) = params.body_radius {
            for b in self.bodies.iter_mut() {
                b.radius = r;
            }
        }
    }

    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(body);
        self.ids.push(id);
        id
    }

    /// Remove the first body called `name`
    pub fn remove(&mut self, name: &str) -> bool {
        match self.bodies.iter().position(|b| b.name == name) {
            Some(i) => {
                self.remove_at(i);
                true
            }
            None => false,
        }
    }

    fn remove_at(&mut self, i: usize) -> Body {
        self.ids.remove(i);
        self.bodies.remove(i)
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.ids.iter().position(|&x| x == id)
    }

    /// First body called `name`, if any
    pub fn get_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.name == name)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.index_of(id).map(|i| &self.bodies[i])
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn ids(&self) -> &[BodyId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    pub fn set_max_time(&mut self, max_time: f64) {
        self.max_time = max_time;
    }

    pub fn continue_simulation(&self) -> bool {
        self.time < self.max_time
    }

    /// Map a coordinate from [-radius, radius] into [0, 1]
    pub fn normalized(&self, value: f64) -> f64 {
        (value + self.radius) / (2.0 * self.radius)
    }

    /// Whether any two distinct bodies overlap, i.e. one sits inside the
    /// other's radius
    pub fn collision(&self) -> bool {
        for (i, a) in self.bodies.iter().enumerate() {
            for (j, b) in self.bodies.iter().enumerate() {
                if i != j && a.position.distance(&b.position) < a.radius {
                    return true;
                }
            }
        }
        false
    }

    /// Snapshot of the current positions for a renderer
    pub fn frame(&self) -> Frame {
        Frame {
            background: STAR_BACKGROUND.to_string(),
            sprites: self
                .bodies
                .iter()
                .map(|b| Sprite {
                    x: self.normalized(b.position.x()),
                    y: self.normalized(b.position.y()),
                    resource: b.picture_path.clone(),
                })
                .collect(),
        }
    }

    /// Advance by `dt` without rendering
    /// Returns `false` if the tick was cut short by an overlap
    pub fn update(&mut self, dt: f64) -> bool {
        self.update_with(dt, &mut NullRenderer)
    }

    /// Advance by `dt`, handing the resulting frame to `renderer`
    /// Returns `false` if the tick was cut short by an overlap
    pub fn update_with<R: Renderer + ?Sized>(&mut self, dt: f64, renderer: &mut R) -> bool {
        self.collisions.clear();

        for i in 0..self.bodies.len() {
            let net_force = self.forces.net_force(i, &self.bodies);
            self.record_contacts(i);
            self.bodies[i].update(net_force, dt);

            // bodies after i keep last tick's state
            if self.collision() {
                debug!(t = self.time, body = %self.bodies[i].name, "overlap detected, tick aborted");
                return false;
            }
        }

        renderer.draw(&self.frame());

        let merges = self.resolve_collisions();
        self.time += dt;
        trace!(t = self.time, bodies = self.bodies.len(), merges, "tick");
        true
    }

    fn record_contacts(&mut self, i: usize) {
        let free = &self.bodies[i];
        for (j, source) in self.bodies.iter().enumerate() {
            if j != i && touching(free, source) {
                self.collisions.push((self.ids[i], self.ids[j]));
            }
        }
    }

    /// Merge every recorded pair whose members both still exist
    /// The free side survives only when strictly heavier
    fn resolve_collisions(&mut self) -> usize {
        let pairs = std::mem::take(&mut self.collisions);
        let mut merges = 0;

        for (a, b) in pairs {
            let (Some(ia), Some(ib)) = (self.index_of(a), self.index_of(b)) else {
                continue; // already absorbed by an earlier pair
            };
            let total = self.bodies[ia].mass + self.bodies[ib].mass;
            let (winner, loser) = if self.bodies[ia].mass > self.bodies[ib].mass {
                (ia, ib)
            } else {
                (ib, ia)
            };
            self.bodies[winner].mass = total;
            let survivor = self.bodies[winner].name.clone();
            let absorbed = self.remove_at(loser);
            debug!(t = self.time, survivor = %survivor, absorbed = %absorbed.name, mass = total, "bodies merged");
            merges += 1;
        }

        merges
    }

    /// Step with `params.h0` until the end time, or until the run stalls on
    /// `params.max_consecutive_aborts` aborted ticks in a row
    pub fn run<R: Renderer + ?Sized>(&mut self, params: &Parameters, renderer: &mut R) -> RunSummary {
        let mut summary = RunSummary::default();

        // time would never advance
        if params.h0.is_nan() || params.h0 <= 0.0 {
            warn!(h0 = params.h0, "non-positive step size, nothing to run");
            summary.final_time = self.time;
            return summary;
        }

        let mut consecutive_aborts = 0;
        while self.continue_simulation() {
            let before = self.bodies.len();
            if self.update_with(params.h0, renderer) {
                summary.ticks += 1;
                summary.merges += before - self.bodies.len();
                consecutive_aborts = 0;
            } else {
                summary.aborted_ticks += 1;
                consecutive_aborts += 1;
                if consecutive_aborts >= params.max_consecutive_aborts {
                    warn!(t = self.time, aborts = consecutive_aborts, "simulation stalled on overlapping bodies");
                    summary.stalled = true;
                    break;
                }
            }
        }

        summary.final_time = self.time;
        summary
    }
}

impl fmt::Debug for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("bodies", &self.bodies)
            .field("radius", &self.radius)
            .field("time", &self.time)
            .field("max_time", &self.max_time)
            .field("g", &self.g)
            .field("force_terms", &self.forces.len())
            .finish()
    }
}

/// Scenario text form: body count, radius, then one record per body
impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.bodies.len(), self.radius)?;
        for b in &self.bodies {
            write!(f, "\n{b}")?;
        }
        Ok(())
    }
}
