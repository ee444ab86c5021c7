// Hero background: drifting particles linked by fading lines.

use crate::anim::Visual;
use crate::config::MeshConfig;
use crate::geom::{Point, Size};
use crate::paint::{Painter, Rgba, Stroke, VIOLET};
use crate::rng::XorShift;

const LINK: Stroke = Stroke::new(VIOLET.with_alpha(0.1), 1.0);
const DOT: Rgba = VIOLET.with_alpha(0.6);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Point,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    /// Moves by one velocity step, then flips velocity on every axis the
    /// particle has left. Position is never clamped.
    pub fn step(&mut self, size: Size) {
        self.pos.x += self.vx;
        self.pos.y += self.vy;
        if self.pos.x < 0.0 || self.pos.x > size.w() {
            self.vx = -self.vx;
        }
        if self.pos.y < 0.0 || self.pos.y > size.h() {
            self.vy = -self.vy;
        }
    }
}

pub struct Mesh {
    cfg: MeshConfig,
    particles: Vec<Particle>,
}

impl Mesh {
    pub fn new(cfg: MeshConfig) -> Self {
        Self {
            cfg,
            particles: Vec::new(),
        }
    }

    /// Population for a surface; the density cap keeps the pairwise pass bounded.
    pub fn population(&self, size: Size) -> usize {
        (size.area() / self.cfg.area_per_particle.max(1)) as usize
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Opacity of the link between two particles `dist` apart, if any.
    pub fn link_alpha(&self, dist: f64) -> Option<f64> {
        let max = self.cfg.link_distance;
        (dist < max).then(|| (1.0 - dist / max) * self.cfg.link_alpha)
    }
}

impl Visual for Mesh {
    fn name(&self) -> &'static str {
        "mesh"
    }

    fn populate(&mut self, size: Size, rng: &mut XorShift) {
        let count = self.population(size);
        let s = self.cfg.max_speed;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                pos: Point::new(rng.next_f64() * size.w(), rng.next_f64() * size.h()),
                vx: rng.range(-s, s),
                vy: rng.range(-s, s),
                radius: rng.range(self.cfg.min_radius, self.cfg.max_radius),
            });
        }
        log::trace!("mesh populated with {count} particles");
    }

    fn frame(&mut self, size: Size, painter: &mut dyn Painter) {
        let n = self.particles.len();
        for i in 0..n {
            let a = self.particles[i].pos;
            for j in (i + 1)..n {
                let b = self.particles[j].pos;
                if let Some(alpha) = self.link_alpha(a.distance(b)) {
                    painter.set_global_alpha(alpha);
                    painter.stroke_line(a, b, LINK);
                }
            }
        }

        painter.set_global_alpha(1.0);
        for p in &mut self.particles {
            painter.fill_circle(p.pos, p.radius, DOT);
            p.step(size);
        }
    }
}
