#![allow(dead_code)]

use dalexor_site::geom::{Point, Size};
use dalexor_site::paint::{Painter, Rgba, Stroke, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear(Size),
    Alpha(f64),
    Line(Point, Point, Stroke),
    FillCircle(Point, f64, Rgba),
    StrokeCircle(Point, f64, Stroke),
    Polyline(Vec<Point>, Stroke),
}

/// In-memory surface that records every draw call.
#[derive(Debug, Default)]
pub struct Recorder {
    pub layout: Size,
    pub applied: Vec<Size>,
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            layout: Size::new(width, height),
            ..Self::default()
        }
    }

    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl Painter for Recorder {
    fn clear(&mut self, size: Size) {
        self.calls.push(Call::Clear(size));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.calls.push(Call::Alpha(alpha));
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.calls.push(Call::Line(from, to, stroke));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.calls.push(Call::FillCircle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        self.calls.push(Call::StrokeCircle(center, radius, stroke));
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.calls.push(Call::Polyline(points.to_vec(), stroke));
    }
}

impl Surface for Recorder {
    fn layout_size(&self) -> Size {
        self.layout
    }

    fn apply_size(&mut self, size: Size) {
        self.applied.push(size);
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
