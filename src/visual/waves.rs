// Metrics background: stacked sine waves drifting sideways.

use crate::anim::Visual;
use crate::config::WaveFieldConfig;
use crate::geom::{Point, Size};
use crate::paint::{Painter, Stroke, VIOLET};
use crate::rng::XorShift;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub baseline: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub speed: f64,
    /// Phase; grows by `speed` every frame and never wraps.
    pub offset: f64,
}

impl Wave {
    pub fn y_at(&self, x: f64) -> f64 {
        self.baseline + self.amplitude * (x * self.frequency + self.offset).sin()
    }

    pub fn advance(&mut self) {
        self.offset += self.speed;
    }

    /// Samples at x = 0, step, 2*step … up to and including `width`.
    pub fn samples(&self, width: u32, step: u32) -> Vec<Point> {
        (0..=width)
            .step_by(step.max(1) as usize)
            .map(|x| Point::new(x as f64, self.y_at(x as f64)))
            .collect()
    }
}

pub struct WaveField {
    cfg: WaveFieldConfig,
    waves: Vec<Wave>,
}

impl WaveField {
    pub fn new(cfg: WaveFieldConfig) -> Self {
        Self {
            cfg,
            waves: Vec::new(),
        }
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    fn alpha(&self, index: usize) -> f64 {
        self.cfg.alpha + index as f64 * self.cfg.alpha_step
    }
}

impl Visual for WaveField {
    fn name(&self) -> &'static str {
        "waves"
    }

    fn populate(&mut self, size: Size, _rng: &mut XorShift) {
        let c = &self.cfg;
        self.waves = (0..c.waves)
            .map(|i| {
                let i = i as f64;
                Wave {
                    baseline: size.h() * (c.baseline + i * c.baseline_step),
                    amplitude: c.amplitude + i * c.amplitude_step,
                    frequency: c.frequency + i * c.frequency_step,
                    speed: c.speed + i * c.speed_step,
                    offset: 0.0,
                }
            })
            .collect();
    }

    fn frame(&mut self, size: Size, painter: &mut dyn Painter) {
        for i in 0..self.waves.len() {
            self.waves[i].advance();
            let stroke = Stroke::new(VIOLET.with_alpha(self.alpha(i)), 2.0);
            let points = self.waves[i].samples(size.width, self.cfg.sample_step);
            painter.stroke_polyline(&points, stroke);
        }
    }
}
