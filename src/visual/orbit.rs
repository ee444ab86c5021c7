// Platform visual: three satellites circling a hub, with a breathing ring.

use std::f64::consts::TAU;

use crate::anim::Visual;
use crate::config::OrbitConfig;
use crate::geom::{Point, Size};
use crate::paint::{Painter, Stroke, VIOLET};
use crate::rng::XorShift;

/// Everything drawn in one frame, derived from the time accumulator.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitFrame {
    pub center: Point,
    pub radius: f64,
    pub angles: Vec<f64>,
    pub satellites: Vec<Point>,
    pub pulse_radius: f64,
    pub pulse_alpha: f64,
}

pub struct Orbit {
    cfg: OrbitConfig,
    time: f64,
}

impl Orbit {
    pub fn new(cfg: OrbitConfig) -> Self {
        Self { cfg, time: 0.0 }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Satellite angles at time `t`, evenly spaced around the circle.
    pub fn angles(&self, t: f64) -> Vec<f64> {
        let n = self.cfg.orbiters;
        (0..n).map(|i| t + i as f64 * TAU / n as f64).collect()
    }

    pub fn layout(&self, size: Size, t: f64) -> OrbitFrame {
        let center = size.center();
        let radius = size.min_side() * self.cfg.radius_ratio;
        let angles = self.angles(t);
        let satellites = angles.iter().map(|&a| center.polar(a, radius)).collect();
        let wobble = (t * 2.0).sin();
        OrbitFrame {
            center,
            radius,
            angles,
            satellites,
            pulse_radius: radius * (1.0 + wobble * self.cfg.pulse_swing),
            pulse_alpha: self.cfg.pulse_alpha + wobble * self.cfg.pulse_alpha_swing,
        }
    }
}

impl Visual for Orbit {
    fn name(&self) -> &'static str {
        "orbit"
    }

    // Satellites are derived from time each frame; only the accumulator persists.
    fn populate(&mut self, _size: Size, _rng: &mut XorShift) {}

    fn frame(&mut self, size: Size, painter: &mut dyn Painter) {
        self.time += self.cfg.time_step;
        let f = self.layout(size, self.time);

        let spoke = Stroke::new(VIOLET.with_alpha(0.2), 2.0);
        for &sat in &f.satellites {
            painter.stroke_line(f.center, sat, spoke);
            painter.fill_circle(sat, self.cfg.orbiter_radius, VIOLET.with_alpha(0.3));
        }

        painter.fill_circle(f.center, self.cfg.hub_radius, VIOLET.with_alpha(0.5));
        painter.stroke_circle(
            f.center,
            f.pulse_radius,
            Stroke::new(VIOLET.with_alpha(f.pulse_alpha), 1.0),
        );
    }
}
