//! Drawing primitives shared by the canvas backgrounds.
//!
//! Visuals draw through [`Painter`], which mirrors the handful of 2D canvas
//! calls they need. The browser implementation lives in `wasm::render`; tests
//! use a recording implementation.

use std::fmt;

use crate::geom::{Point, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// Brand violet used by every background.
pub const VIOLET: Rgba = Rgba::new(139, 92, 246, 1.0);

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
}

pub trait Painter {
    /// Clears the whole surface.
    fn clear(&mut self, size: Size);

    /// Multiplier applied to every subsequent draw, like `globalAlpha`.
    fn set_global_alpha(&mut self, alpha: f64);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke);

    /// One connected path through `points`; nothing is drawn for an empty slice.
    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke);
}

/// A painter bound to a sized element.
pub trait Surface: Painter {
    /// Current layout-box size of the element.
    fn layout_size(&self) -> Size;

    /// Applies `size` as the pixel size of the backing store. Browsers clear
    /// the canvas as a side effect.
    fn apply_size(&mut self, size: Size);
}
