//! The per-frame loop shared by the canvas backgrounds.
//!
//! An [`AnimationLoop`] owns one surface, one visual and the random source the
//! visual is seeded from. Scheduling is left to the caller: the browser driver
//! in `wasm::render` calls [`AnimationLoop::render_frame`] once per animation
//! frame and [`AnimationLoop::resize`] on every viewport resize.

use crate::geom::Size;
use crate::paint::{Painter, Surface};
use crate::rng::XorShift;

/// One decorative effect and its element collection.
pub trait Visual {
    fn name(&self) -> &'static str;

    /// Rebuilds the element collection for a surface of `size`.
    fn populate(&mut self, size: Size, rng: &mut XorShift);

    /// Advances every element by one step and draws it. The surface has
    /// already been cleared.
    fn frame(&mut self, size: Size, painter: &mut dyn Painter);
}

/// A running loop. Only [`AnimationLoop::initialize`] builds one, so holding a
/// value means the loop is running; there is no stopped state.
pub struct AnimationLoop<S, V> {
    surface: S,
    visual: V,
    size: Size,
    rng: XorShift,
    frames: u64,
}

impl<S: Surface, V: Visual> AnimationLoop<S, V> {
    /// Binds `visual` to `surface` and performs the first resize.
    ///
    /// A missing surface yields `None` without touching anything: decorative
    /// canvases are optional on a page.
    pub fn initialize(surface: Option<S>, visual: V, rng: XorShift) -> Option<Self> {
        let Some(surface) = surface else {
            log::debug!("no surface for {}, skipping", visual.name());
            return None;
        };
        let mut this = Self {
            surface,
            visual,
            size: Size::default(),
            rng,
            frames: 0,
        };
        this.resize();
        Some(this)
    }

    /// Re-reads the layout size, applies it to the surface and regenerates the
    /// element collection. Not debounced.
    pub fn resize(&mut self) {
        let size = self.surface.layout_size();
        self.surface.apply_size(size);
        self.size = size;
        self.visual.populate(size, &mut self.rng);
        log::debug!(
            "{} resized to {}x{}",
            self.visual.name(),
            size.width,
            size.height
        );
    }

    /// Clears the surface, then steps and draws the visual once.
    pub fn render_frame(&mut self) {
        self.surface.clear(self.size);
        self.visual.frame(self.size, &mut self.surface);
        self.frames += 1;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn visual(&self) -> &V {
        &self.visual
    }

    pub fn visual_mut(&mut self) -> &mut V {
        &mut self.visual
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
