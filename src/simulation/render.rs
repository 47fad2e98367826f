//! Renderer callback contract
//!
//! After every completed tick the universe hands a [`Frame`] to a [`Renderer`]:
//! a background resource drawn first, then one sprite per body with its
//! position mapped into the unit square `[0, 1] x [0, 1]`.
//! Drawing itself happens outside this crate.

use tracing::trace;

/// Background drawn beneath all bodies every frame
pub const STAR_BACKGROUND: &str = "data/starfield.jpg";

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub x: f64, // normalized x
    pub y: f64, // normalized y
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: String,
    pub sprites: Vec<Sprite>, // body collection order
}

pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Discards every frame
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &Frame) {}
}

/// Keeps every frame it is given
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    pub frames: Vec<Frame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Renderer for FrameRecorder {
    fn draw(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}

/// Emits each frame as `trace` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceRenderer {
    frames: u64,
}

impl TraceRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for TraceRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        for sprite in &frame.sprites {
            trace!(frame = self.frames, x = sprite.x, y = sprite.y, resource = %sprite.resource, "sprite");
        }
    }
}
