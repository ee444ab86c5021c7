mod common;

use common::{approx, Call, Recorder};
use dalexor_site::config::MeshConfig;
use dalexor_site::geom::{Point, Size};
use dalexor_site::paint::VIOLET;
use dalexor_site::rng::XorShift;
use dalexor_site::visual::{Mesh, Particle};
use dalexor_site::AnimationLoop;

fn mesh_on(width: u32, height: u32, seed: u32) -> AnimationLoop<Recorder, Mesh> {
    AnimationLoop::initialize(
        Some(Recorder::sized(width, height)),
        Mesh::new(MeshConfig::default()),
        XorShift::new(seed),
    )
    .expect("surface present")
}

#[test]
fn population_follows_density_rule() {
    let mesh = Mesh::new(MeshConfig::default());
    assert_eq!(mesh.population(Size::new(1500, 750)), 75);
    assert_eq!(mesh.population(Size::new(1920, 1080)), 138);
    assert_eq!(mesh.population(Size::new(100, 100)), 0);
    assert_eq!(mesh.population(Size::new(0, 900)), 0);
}

#[test]
fn particles_start_inside_the_surface() {
    for (w, h, seed) in [(1500, 750, 1), (1024, 768, 99), (375, 812, 12345)] {
        let anim = mesh_on(w, h, seed);
        let particles = anim.visual().particles();
        assert_eq!(particles.len(), (w as u64 * h as u64 / 15_000) as usize);
        for p in particles {
            assert!((0.0..=w as f64).contains(&p.pos.x));
            assert!((0.0..=h as f64).contains(&p.pos.y));
            assert!(p.vx.abs() <= 0.15 && p.vy.abs() <= 0.15);
            assert!((1.0..3.0).contains(&p.radius));
        }
    }
}

#[test]
fn step_reflects_velocity_without_clamping() {
    let size = Size::new(100, 50);
    let mut p = Particle {
        pos: Point::new(99.95, 0.05),
        vx: 0.1,
        vy: -0.1,
        radius: 1.0,
    };

    p.step(size);
    assert!(p.pos.x > 100.0, "position is not clamped");
    assert!(p.pos.y < 0.0);
    assert!(approx(p.vx, -0.1));
    assert!(approx(p.vy, 0.1));

    p.step(size);
    assert!(p.pos.x <= 100.0 && p.pos.y >= 0.0);
    assert!(approx(p.vx, -0.1), "back inside, direction kept");
    assert!(approx(p.vy, 0.1));
}

#[test]
fn velocity_flips_exactly_when_leaving_bounds() {
    let mut anim = mesh_on(300, 200, 42);
    let (w, h) = (300.0, 200.0);
    for _ in 0..2_000 {
        let before: Vec<Particle> = anim.visual().particles().to_vec();
        anim.render_frame();
        anim.surface_mut().take();
        for (old, new) in before.iter().zip(anim.visual().particles()) {
            let out_x = new.pos.x < 0.0 || new.pos.x > w;
            let out_y = new.pos.y < 0.0 || new.pos.y > h;
            assert_eq!(new.vx, if out_x { -old.vx } else { old.vx });
            assert_eq!(new.vy, if out_y { -old.vy } else { old.vy });
        }
    }
}

#[test]
fn link_opacity_fades_with_distance() {
    let mesh = Mesh::new(MeshConfig::default());
    assert_eq!(mesh.link_alpha(0.0), Some(0.5));
    assert!(approx(mesh.link_alpha(75.0).unwrap_or_default(), 0.25));
    assert!(mesh.link_alpha(149.9).is_some());
    assert_eq!(mesh.link_alpha(150.0), None);
    assert_eq!(mesh.link_alpha(400.0), None);
}

#[test]
fn frame_draws_links_then_particles() {
    let mut anim = mesh_on(300, 100, 3);
    // pin both particles so the drawing is predictable
    let near = [Point::new(10.0, 10.0), Point::new(110.0, 10.0)];
    let particles = anim_particles(&mut anim);
    assert_eq!(particles.len(), 2);
    for (p, at) in particles.iter_mut().zip(near) {
        p.pos = at;
        p.vx = 0.0;
        p.vy = 0.0;
        p.radius = 2.0;
    }

    anim.render_frame();
    let calls = anim.surface_mut().take();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[0], Call::Clear(Size::new(300, 100)));
    match calls[1] {
        Call::Alpha(a) => assert!(approx(a, (1.0 - 100.0 / 150.0) * 0.5)),
        ref other => panic!("expected alpha, got {other:?}"),
    }
    match &calls[2] {
        Call::Line(from, to, stroke) => {
            assert_eq!((*from, *to), (near[0], near[1]));
            assert_eq!(stroke.color, VIOLET.with_alpha(0.1));
            assert_eq!(stroke.width, 1.0);
        }
        other => panic!("expected link, got {other:?}"),
    }
    assert_eq!(calls[3], Call::Alpha(1.0));
    assert_eq!(calls[4], Call::FillCircle(near[0], 2.0, VIOLET.with_alpha(0.6)));
    assert_eq!(calls[5], Call::FillCircle(near[1], 2.0, VIOLET.with_alpha(0.6)));
}

#[test]
fn distant_particles_are_not_linked() {
    let mut anim = mesh_on(300, 100, 5);
    let particles = anim_particles(&mut anim);
    particles[0].pos = Point::new(0.0, 0.0);
    particles[1].pos = Point::new(290.0, 90.0);

    anim.render_frame();
    let calls = anim.surface_mut().take();
    assert!(!calls.iter().any(|c| matches!(c, Call::Line(..))));
}

fn anim_particles(anim: &mut AnimationLoop<Recorder, Mesh>) -> &mut [Particle] {
    anim.visual_mut().particles_mut()
}
